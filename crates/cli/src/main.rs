use anyhow::Result;
use chatdesk_core::{
    env_list_with_default, env_parse_with_default, DEFAULT_ALLOWED_ORIGINS, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_SETTINGS_FILE, DEFAULT_UPSTREAM_URL,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chatdesk")]
#[command(about = "Chat relay for OpenAI-compatible completion APIs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Listening port [env: PORT, default: 3001]
        #[arg(short, long)]
        port: Option<u16>,
        /// Bind address [env: HOST, default: 0.0.0.0]
        #[arg(short = 'H', long)]
        host: Option<String>,
        /// Settings document path [env: CHATDESK_SETTINGS_FILE]
        #[arg(short, long)]
        settings_file: Option<PathBuf>,
        /// Upstream API base URL [env: OPENAI_BASE_URL]
        #[arg(short, long)]
        upstream_url: Option<String>,
        /// Browser origin allowed by CORS; repeatable [env: CHATDESK_ALLOWED_ORIGINS]
        #[arg(short, long = "allowed-origin")]
        allowed_origins: Vec<String>,
    },
    /// Print the settings document, creating it with defaults if absent
    Settings {
        /// Settings document path [env: CHATDESK_SETTINGS_FILE]
        #[arg(short, long)]
        settings_file: Option<PathBuf>,
    },
    /// Decode a login token and report whether it is still valid
    Token { token: String },
}

pub(crate) fn get_api_key() -> Result<String> {
    std::env::var("OPENAI_API_KEY")
        .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable must be set"))
}

pub(crate) fn get_base_url() -> String {
    std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_owned())
}

pub(crate) fn get_settings_path() -> PathBuf {
    std::env::var("CHATDESK_SETTINGS_FILE")
        .map_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_FILE), PathBuf::from)
}

pub(crate) fn get_port() -> u16 {
    env_parse_with_default("PORT", DEFAULT_PORT)
}

pub(crate) fn get_host() -> String {
    std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned())
}

pub(crate) fn get_allowed_origins() -> Vec<String> {
    env_list_with_default("CHATDESK_ALLOWED_ORIGINS", &DEFAULT_ALLOWED_ORIGINS)
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is the normal case.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, settings_file, upstream_url, allowed_origins } => {
            let options = commands::serve::ServeOptions {
                port: port.unwrap_or_else(get_port),
                host: host.unwrap_or_else(get_host),
                settings_file: settings_file.unwrap_or_else(get_settings_path),
                upstream_url: upstream_url.unwrap_or_else(get_base_url),
                allowed_origins: if allowed_origins.is_empty() {
                    get_allowed_origins()
                } else {
                    allowed_origins
                },
            };
            commands::serve::run(options).await?;
        },
        Commands::Settings { settings_file } => {
            commands::settings::run(settings_file.unwrap_or_else(get_settings_path)).await?;
        },
        Commands::Token { token } => {
            commands::token::run(&token)?;
        },
    }

    Ok(())
}
