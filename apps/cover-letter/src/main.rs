mod config;
mod errors;
mod intake;
mod layout;
mod models;
mod render;
mod session;
mod templates;
mod text;

use std::io;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::{EXIT_CONFIG_FAILURE, EXIT_SUCCESS};

fn main() -> ExitCode {
    // Load configuration first; logging depends on RUST_LOG from it
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(EXIT_CONFIG_FAILURE);
        }
    };

    // Logs go to stderr so they never interleave with the prompts on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting cover-letter v{}", env!("CARGO_PKG_VERSION"));

    match session::run(&config, io::stdin().lock(), io::stdout()) {
        Ok(saved) => {
            info!("Session complete: {}", saved.path.display());
            println!();
            println!(
                "PDF Successfully created! \"{}\" can be found at: \"{}\".",
                saved.file_name,
                config.destination_dir.display()
            );
            println!();
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
