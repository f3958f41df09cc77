use anyhow::Result;
use chatdesk_core::{find_user, AuthToken};
use chrono::Utc;

pub(crate) fn run(token: &str) -> Result<()> {
    let decoded = AuthToken::decode(token)?;
    let user = find_user(&decoded.user_id, &decoded.email);
    let report = serde_json::json!({
        "id": decoded.user_id,
        "email": decoded.email,
        "issuedAt": decoded.issued_at().map(|t| t.to_rfc3339()),
        "expired": decoded.is_expired(Utc::now()),
        "user": user,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
