use clap::Parser;
use finboard::app::commands;
use finboard::utils::{logger, validation::Validate};
use finboard::{ApiClient, AppConfig, CliConfig, FileStore, RecordingNavigator, Session, TokenStorage};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    if config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli.command);
    match AppConfig::resolve_path(cli.config.as_deref()) {
        Some(path) => tracing::debug!("Using config file {}", path.display()),
        None => tracing::debug!("No config file, using defaults"),
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let token_file = config.token_file()?;
    tracing::debug!("Token file: {}", token_file.display());

    let navigator = Arc::new(RecordingNavigator::new());
    let tokens = TokenStorage::new(Arc::new(FileStore::new(token_file)));
    let client = ApiClient::with_timeout(
        config.api.base_url.clone(),
        config.timeout(),
        tokens,
        navigator.clone(),
    )?;

    let mut session = Session::new(client);
    session.bootstrap().await?;
    let seen = navigator.history().len();

    let result = commands::execute(&cli.command, &mut session).await;
    let session_expired = commands::session_expired_during(&navigator.history_since(seen));

    match result {
        Ok(output) => {
            println!("{}", output.trim_end());
            if session_expired {
                eprintln!("🔒 Your session has expired. Run `finboard login` to sign in again.");
                std::process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            if session_expired {
                eprintln!("🔒 Your session has expired. Run `finboard login` to sign in again.");
            } else {
                eprintln!("❌ {}", e.user_friendly_message());
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
