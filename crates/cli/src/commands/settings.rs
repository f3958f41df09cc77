use anyhow::Result;
use chatdesk_storage::SettingsStore;
use std::path::PathBuf;

pub(crate) async fn run(path: PathBuf) -> Result<()> {
    let store = SettingsStore::initialize(path).await?;
    println!("{}", serde_json::to_string_pretty(&store.get().await)?);
    Ok(())
}
