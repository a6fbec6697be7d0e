use anyhow::Context;
use tracing::Level;

use blobs_config::cli::cli_parser::{parse_args, Command};
use blobs_config::utils::logging::init_logger;
use blobs_config::Settings;

fn main() -> anyhow::Result<()> {
    let cli = parse_args();
    init_logger(if cli.verbose { Level::DEBUG } else { Level::INFO });

    tracing::debug!(
        config = %cli.config.display(),
        database = %cli.database.display(),
        "loading configuration"
    );

    // A config that fails to load aborts startup
    let settings = Settings::load(&cli.config, &cli.database)
        .with_context(|| {
            format!(
                "failed to load configuration from {} and {}",
                cli.config.display(),
                cli.database.display()
            )
        })
        .inspect_err(|e| tracing::error!("{:#}", e))?;
    tracing::info!(
        port = settings.port(),
        database_keys = settings.database.len(),
        "configuration loaded"
    );

    match cli.selected_command() {
        Command::Check => {
            tracing::info!("configuration OK");
        }
        Command::Show => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
