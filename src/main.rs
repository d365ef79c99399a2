//! Entry point: parse CLI, resolve settings, and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use underrated_mlb::{
    cli::{Cli, Commands},
    commands::{
        config::handle_config,
        show::{handle_show, ShowParams},
    },
    config::{ConfigFile, Settings},
    FetchState,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Cli::parse();

    let (file, config_path) =
        ConfigFile::discover(app.config.as_deref()).context("Failed to load config file")?;
    let source = match &app.command {
        Commands::Show { source, .. } | Commands::Config { source } => source.overrides(),
    };
    let settings = Settings::resolve(&source, &file).context("Invalid settings")?;

    let filter = if app.debug {
        "underrated_mlb=debug".to_string()
    } else {
        settings.log_filter.value.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match app.command {
        Commands::Show {
            format,
            check_images,
            output,
            ..
        } => {
            let state = handle_show(
                &settings,
                ShowParams {
                    format,
                    check_images,
                    output,
                },
            )
            .await?;

            match state {
                FetchState::Ready { .. } => {}
                FetchState::Error { .. } => std::process::exit(1),
                FetchState::Loading => std::process::exit(130),
            }
        }
        Commands::Config { .. } => handle_config(&settings, config_path.as_deref()),
    }

    Ok(())
}
