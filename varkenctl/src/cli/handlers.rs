//! Command execution handlers

use anyhow::Result;
use std::path::Path;
use varken_core::ConfigLoader;

use crate::format::{format_config, format_failure, format_success, format_summary};

use super::commands::*;

/// Handle check command
///
/// Returns `Ok(false)` when the file failed to load; the error has already
/// been printed.
pub fn handle_check(loader: &ConfigLoader, format: &OutputFormat) -> Result<bool> {
    let path = loader.path().display().to_string();
    let result = loader.load();

    match format {
        OutputFormat::Table => match &result {
            Ok(config) => println!(
                "{}",
                format_success(&format!("{} is valid ({})", path, format_summary(config)))
            ),
            Err(e) => eprintln!("{}", format_failure(&format!("{}: {}", path, e))),
        },
        OutputFormat::Json | OutputFormat::Toml => {
            let report = match &result {
                Ok(config) => serde_json::json!({
                    "path": path,
                    "valid": true,
                    "sonarr_servers": config.sonarr_servers.len(),
                    "radarr_servers": config.radarr_servers.len(),
                    "tautulli": config.tautulli_enabled(),
                    "ombi": config.ombi_enabled(),
                    "asa": config.asa_enabled(),
                }),
                Err(e) => serde_json::json!({
                    "path": path,
                    "valid": false,
                    "error": e.to_string(),
                }),
            };
            let rendered = match format {
                OutputFormat::Toml => toml::to_string_pretty(&report)?,
                _ => serde_json::to_string_pretty(&report)?,
            };
            println!("{}", rendered);
        }
    }

    Ok(result.is_ok())
}

/// Handle show command
pub fn handle_show(
    loader: &ConfigLoader,
    reveal_secrets: bool,
    format: &OutputFormat,
) -> Result<()> {
    let config = loader.load()?;
    let config = if reveal_secrets {
        config
    } else {
        config.redacted()
    };

    println!("{}", format_config(&config, &format.into())?);
    Ok(())
}

/// Handle path command
pub fn handle_path(path: &Path, format: &OutputFormat) -> Result<()> {
    let exists = path.is_file();
    let display = path.display().to_string();

    match format {
        OutputFormat::Table => {
            if exists {
                println!("{}", display);
            } else {
                println!("{} (not found)", display);
            }
        }
        OutputFormat::Json => {
            let report = serde_json::json!({ "path": display, "exists": exists });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Toml => {
            let report = serde_json::json!({ "path": display, "exists": exists });
            println!("{}", toml::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Generate shell completion script
pub fn generate_completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}
