//! Loads `varken.ini` into a [`VarkenConfig`]
//!
//! The result is built once at startup and handed to consumers by value or
//! reference; nothing mutates it afterwards.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::influx::{self, InfluxServer};
use super::integrations::{load_gated, AsaServer, OmbiServer, TautulliServer};
use super::paths::resolve_config_path;
use super::servers::{Server, SonarrServer, RADARR, SONARR};
use super::source::IniSource;
use crate::error::{ConfigError, Result};

const REDACTED: &str = "********";

/// Fully parsed Varken configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarkenConfig {
    pub influx_server: InfluxServer,

    /// Sonarr instances in the order listed by `sonarr_server_ids`
    pub sonarr_servers: Vec<SonarrServer>,

    /// Radarr instances in the order listed by `radarr_server_ids`
    pub radarr_servers: Vec<Server>,

    pub tautulli_server: Option<TautulliServer>,
    pub ombi_server: Option<OmbiServer>,
    pub asa: Option<AsaServer>,
}

impl VarkenConfig {
    /// Parse configuration from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let source = IniSource::parse(content)?;

        debug!("Parsing [{}]", influx::SECTION);
        let influx_server = InfluxServer::from_source(&source)?;

        let sonarr_servers = SONARR.load(&source, SonarrServer::from_section)?;
        let radarr_servers = RADARR.load(&source, Server::from_section)?;

        let tautulli_server =
            load_gated(&source, TautulliServer::SECTION, TautulliServer::from_section)?;
        let ombi_server = load_gated(&source, OmbiServer::SECTION, OmbiServer::from_section)?;
        let asa = load_gated(&source, AsaServer::SECTION, AsaServer::from_section)?;

        Ok(Self {
            influx_server,
            sonarr_servers,
            radarr_servers,
            tautulli_server,
            ombi_server,
            asa,
        })
    }

    pub fn sonarr_enabled(&self) -> bool {
        !self.sonarr_servers.is_empty()
    }

    pub fn radarr_enabled(&self) -> bool {
        !self.radarr_servers.is_empty()
    }

    pub fn tautulli_enabled(&self) -> bool {
        self.tautulli_server.is_some()
    }

    pub fn ombi_enabled(&self) -> bool {
        self.ombi_server.is_some()
    }

    pub fn asa_enabled(&self) -> bool {
        self.asa.is_some()
    }

    /// Copy with every password and API key masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.influx_server.password = REDACTED.to_string();
        for sonarr in &mut config.sonarr_servers {
            sonarr.server.api_key = REDACTED.to_string();
        }
        for radarr in &mut config.radarr_servers {
            radarr.api_key = REDACTED.to_string();
        }
        if let Some(tautulli) = &mut config.tautulli_server {
            tautulli.api_key = REDACTED.to_string();
        }
        if let Some(ombi) = &mut config.ombi_server {
            ombi.api_key = REDACTED.to_string();
        }
        if let Some(asa) = &mut config.asa {
            asa.password = REDACTED.to_string();
        }
        config
    }
}

/// Reads the config file from disk and parses it.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Loader for a specific file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loader for the file chosen by `VARKEN_CONFIG` or the default locations.
    pub fn from_env() -> Self {
        Self::new(resolve_config_path(None))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the config file.
    pub fn load(&self) -> Result<VarkenConfig> {
        debug!("Loading configuration from: {}", self.path.display());

        let contents = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        let config = VarkenConfig::from_ini_str(&contents)?;

        info!(
            "Configuration loaded: {} sonarr, {} radarr, tautulli={}, ombi={}, asa={}",
            config.sonarr_servers.len(),
            config.radarr_servers.len(),
            config.tautulli_enabled(),
            config.ombi_enabled(),
            config.asa_enabled()
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[global]
sonarr_server_ids = 1
radarr_server_ids = false
tautulli = false
ombi = true
asa = false

[influxdb]
url = influxdb.domain.tld
port = 8086
username = root
password = root

[sonarr-1]
url = sonarr1.domain.tld
apikey = sonarrkey
ssl = false
verify_ssl = true
queue = true
missing_days = 7
future_days = 1
missing_days_run_seconds = 300
future_days_run_seconds = 300
queue_run_seconds = 300

[ombi]
url = ombi.domain.tld
apikey = ombikey
ssl = false
verify_ssl = true
"#;

    #[test]
    fn test_enabled_flags() {
        let config = VarkenConfig::from_ini_str(MINIMAL).unwrap();
        assert!(config.sonarr_enabled());
        assert!(!config.radarr_enabled());
        assert!(!config.tautulli_enabled());
        assert!(config.ombi_enabled());
        assert!(!config.asa_enabled());
    }

    #[test]
    fn test_redacted_masks_secrets() {
        let config = VarkenConfig::from_ini_str(MINIMAL).unwrap();
        let redacted = config.redacted();

        assert_eq!(redacted.influx_server.password, REDACTED);
        assert_eq!(redacted.sonarr_servers[0].server.api_key, REDACTED);
        assert_eq!(redacted.ombi_server.as_ref().unwrap().api_key, REDACTED);

        // Non-secret fields untouched
        assert_eq!(redacted.influx_server.username, "root");
        assert_eq!(redacted.sonarr_servers[0].server.url, "http://sonarr1.domain.tld");

        // Original left alone
        assert_eq!(config.sonarr_servers[0].server.api_key, "sonarrkey");
    }

    #[test]
    fn test_serialize_json() {
        let config = VarkenConfig::from_ini_str(MINIMAL).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["influx_server"]["port"], 8086);
        assert_eq!(json["sonarr_servers"][0]["id"], 1);
        assert_eq!(json["sonarr_servers"][0]["missing_days"], 7);
        assert!(json["tautulli_server"].is_null());
    }

    #[test]
    fn test_loader_missing_file() {
        let loader = ConfigLoader::new("/nonexistent/dir/varken.ini");
        let err = loader.load().unwrap_err();
        assert!(err.is_not_found());
    }
}
