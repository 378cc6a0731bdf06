//! Varken CLI
//!
//! Locates, validates and prints the Varken configuration file.

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use varken_core::{resolve_config_path, ConfigLoader};
use varkenctl::cli::{
    generate_completion, handle_check, handle_path, handle_show, Cli, Commands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Determine config path: CLI flag > env var > ./varken.ini > default
    let config_path = resolve_config_path(cli.config.as_deref());
    debug!("Configuration file: {}", config_path.display());
    let loader = ConfigLoader::new(&config_path);

    let result = match cli.command {
        Commands::Check => match handle_check(&loader, &cli.format) {
            Ok(true) => Ok(()),
            Ok(false) => std::process::exit(1),
            Err(e) => Err(e),
        },
        Commands::Show { reveal_secrets } => handle_show(&loader, reveal_secrets, &cli.format),
        Commands::Path => handle_path(&config_path, &cli.format),
        Commands::Completion { shell } => {
            generate_completion(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if cli.verbose {
            eprintln!("Error details: {:?}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing subscriber for logging to stderr
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
