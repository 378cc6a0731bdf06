//! Output formatting utilities for the CLI
//!
//! Provides table, JSON and TOML formatting with colors.

use anyhow::Result;
use colored::*;
use varken_core::VarkenConfig;

use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Table,
    Json,
    Toml,
}

fn yes_no(value: bool) -> String {
    if value {
        "Yes".green().to_string()
    } else {
        "No".red().to_string()
    }
}

/// Format the full configuration
pub fn format_config(config: &VarkenConfig, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Toml => Ok(toml::to_string_pretty(config)?),
        OutputFormat::Table => {
            let sections = [
                format_influx(config),
                format_sonarr(config),
                format_radarr(config),
                format_integrations(config),
            ];
            Ok(sections.join("\n\n"))
        }
    }
}

fn format_influx(config: &VarkenConfig) -> String {
    let influx = &config.influx_server;
    let mut output = String::new();
    output.push_str(&"InfluxDB".bold().to_string());
    output.push('\n');
    output.push_str(&format!("Address: {}", influx.address().cyan()));
    output.push('\n');
    output.push_str(&format!("Username: {}", influx.username.cyan()));
    output.push('\n');
    output.push_str(&format!("Password: {}", influx.password.dimmed()));
    output
}

fn format_sonarr(config: &VarkenConfig) -> String {
    if !config.sonarr_enabled() {
        return format!("{} {}", "Sonarr:".bold(), "disabled".dimmed());
    }

    #[derive(Tabled)]
    struct SonarrRow {
        #[tabled(rename = "ID")]
        id: u32,
        #[tabled(rename = "URL")]
        url: String,
        #[tabled(rename = "API Key")]
        api_key: String,
        #[tabled(rename = "Verify SSL")]
        verify_ssl: String,
        #[tabled(rename = "Queue")]
        queue: String,
        #[tabled(rename = "Missing (days / every)")]
        missing: String,
        #[tabled(rename = "Future (days / every)")]
        future: String,
    }

    let rows: Vec<SonarrRow> = config
        .sonarr_servers
        .iter()
        .map(|sonarr| SonarrRow {
            id: sonarr.server.id,
            url: sonarr.server.url.cyan().to_string(),
            api_key: sonarr.server.api_key.dimmed().to_string(),
            verify_ssl: yes_no(sonarr.server.verify_ssl),
            queue: if sonarr.queue {
                format!("every {}s", sonarr.queue_run_seconds)
                    .green()
                    .to_string()
            } else {
                "No".red().to_string()
            },
            missing: format!(
                "{} / {}s",
                sonarr.missing_days, sonarr.missing_days_run_seconds
            ),
            future: format!(
                "{} / {}s",
                sonarr.future_days, sonarr.future_days_run_seconds
            ),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!("{}\n{}", "Sonarr Servers:".bold(), table)
}

fn format_radarr(config: &VarkenConfig) -> String {
    if !config.radarr_enabled() {
        return format!("{} {}", "Radarr:".bold(), "disabled".dimmed());
    }

    #[derive(Tabled)]
    struct RadarrRow {
        #[tabled(rename = "ID")]
        id: u32,
        #[tabled(rename = "URL")]
        url: String,
        #[tabled(rename = "API Key")]
        api_key: String,
        #[tabled(rename = "Verify SSL")]
        verify_ssl: String,
    }

    let rows: Vec<RadarrRow> = config
        .radarr_servers
        .iter()
        .map(|radarr| RadarrRow {
            id: radarr.id,
            url: radarr.url.cyan().to_string(),
            api_key: radarr.api_key.dimmed().to_string(),
            verify_ssl: yes_no(radarr.verify_ssl),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!("{}\n{}", "Radarr Servers:".bold(), table)
}

fn format_integrations(config: &VarkenConfig) -> String {
    #[derive(Tabled)]
    struct IntegrationRow {
        #[tabled(rename = "Integration")]
        name: String,
        #[tabled(rename = "Enabled")]
        enabled: String,
        #[tabled(rename = "URL")]
        url: String,
        #[tabled(rename = "Verify SSL")]
        verify_ssl: String,
        #[tabled(rename = "Influx DB")]
        influx_db: String,
    }

    fn row(name: &str, endpoint: Option<(&str, bool, Option<&str>)>) -> IntegrationRow {
        match endpoint {
            Some((url, verify_ssl, influx_db)) => IntegrationRow {
                name: name.to_string(),
                enabled: yes_no(true),
                url: url.cyan().to_string(),
                verify_ssl: yes_no(verify_ssl),
                influx_db: influx_db.unwrap_or("-").to_string(),
            },
            None => IntegrationRow {
                name: name.to_string(),
                enabled: yes_no(false),
                url: "-".to_string(),
                verify_ssl: "-".to_string(),
                influx_db: "-".to_string(),
            },
        }
    }

    let rows = vec![
        row(
            "Tautulli",
            config
                .tautulli_server
                .as_ref()
                .map(|t| (t.url.as_str(), t.verify_ssl, Some(t.influx_db.as_str()))),
        ),
        row(
            "Ombi",
            config
                .ombi_server
                .as_ref()
                .map(|o| (o.url.as_str(), o.verify_ssl, None)),
        ),
        row(
            "ASA",
            config
                .asa
                .as_ref()
                .map(|a| (a.url.as_str(), a.verify_ssl, Some(a.influx_db.as_str()))),
        ),
    ];

    let table = Table::new(rows).with(Style::rounded()).to_string();
    format!("{}\n{}", "Integrations:".bold(), table)
}

/// One-line summary of what is enabled
pub fn format_summary(config: &VarkenConfig) -> String {
    let mut enabled = vec![
        format!("{} sonarr", config.sonarr_servers.len()),
        format!("{} radarr", config.radarr_servers.len()),
    ];
    if config.tautulli_enabled() {
        enabled.push("tautulli".to_string());
    }
    if config.ombi_enabled() {
        enabled.push("ombi".to_string());
    }
    if config.asa_enabled() {
        enabled.push("asa".to_string());
    }
    enabled.join(", ")
}

/// Format success message
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}

/// Format failure message
pub fn format_failure(message: &str) -> String {
    format!("{} {}", "✗".red().bold(), message)
}
