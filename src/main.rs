use anyhow::Result;
use clap::Parser;

use sc_core::settings::ClipboardSettings;
use sheetclip_lib::bootstrap::{init_tracing_subscriber, resolve_config};
use sheetclip_lib::cli::{run, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref())?;
    if let Err(err) = init_tracing_subscriber(&config) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let settings = ClipboardSettings::from_config(&config);
    tracing::debug!(?settings, "Resolved clipboard settings");

    run(cli.command, settings).await
}
