//! Podcast-Relay: HTTP relay for a podcast listing API
//!
//! This is the main entry point for the application.

use anyhow::{bail, Result};
use podcast_relay::{
    config,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = match parse_args(std::env::args().skip(1))? {
        Command::Run { config } => config,
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("podcast-relay {}", podcast_relay::VERSION);
            return Ok(());
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Starting podcast-relay v{}", podcast_relay::VERSION);

    // Load configuration
    let settings = config::load(config_path.as_deref())?;
    info!("Relaying to upstream: {}", settings.upstream.base_url);

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.upstream)?;
    info!("HTTP client initialized");

    // Bind address
    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    let state = AppState::new(&settings.upstream, client)?;
    let app = create_router(state);

    info!("Server is running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[derive(Debug, PartialEq)]
enum Command {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

fn parse_args<I>(mut args: I) -> Result<Command>
where
    I: Iterator<Item = String>,
{
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-c" | "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => bail!("{} requires a file argument", arg),
            },
            other => bail!("unrecognized argument: {} (see --help)", other),
        }
    }
    Ok(Command::Run { config })
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Podcast-Relay v{}
HTTP relay for a podcast listing API

USAGE:
    podcast-relay [OPTIONS]

OPTIONS:
    -c, --config <FILE>    Path to configuration file
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    PODCAST_RELAY_SETTINGS_PATH    Path to settings.yml
    PODCAST_RELAY_PORT             Server port
    PODCAST_RELAY_BIND_ADDRESS     Bind address
    PODCAST_RELAY_UPSTREAM_URL     Upstream listing endpoint
    PODCAST_RELAY_REQUEST_TIMEOUT  Upstream timeout in seconds (0 = none)
    RUST_LOG                       Log filter (default: info)
"#,
        podcast_relay::VERSION
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), Command::Run { config: None });
    }

    #[test]
    fn test_config_flag() {
        assert_eq!(
            parse_args(args(&["--config", "relay.yml"])).unwrap(),
            Command::Run {
                config: Some(PathBuf::from("relay.yml"))
            }
        );
        assert!(parse_args(args(&["-c"])).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(args(&["-h"])).unwrap(), Command::Help);
        assert_eq!(parse_args(args(&["--version"])).unwrap(), Command::Version);
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}
