//! Multi-instance server families (Sonarr, Radarr)
//!
//! Each family is enabled through a `*_server_ids` key in `[global]` and
//! configured through one `[<family>-<id>]` section per listed id.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::source::{parse_bool, IniSource};
use super::GLOBAL_SECTION;
use crate::error::{ConfigError, Result};

/// Value of a `*_server_ids` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerIds {
    /// A false-like boolean token
    Disabled,
    /// Instance ids in order of appearance, duplicates kept
    Ids(Vec<u32>),
}

impl ServerIds {
    /// Parse a raw `*_server_ids` value. `key` is only used for error reporting.
    pub fn parse(key: &str, raw: &str) -> Result<Self> {
        if parse_bool(raw) == Some(false) {
            return Ok(ServerIds::Disabled);
        }

        let invalid = || ConfigError::InvalidServerIds {
            key: key.to_string(),
        };

        raw.trim()
            .split(',')
            .map(|id| {
                let id = id.trim();
                if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                id.parse::<u32>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>>>()
            .map(ServerIds::Ids)
    }
}

/// What a family does when its ids key holds a false token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledPolicy {
    /// Fail with [`ConfigError::InvalidServerIds`]
    Reject,
    /// Leave the family disabled with no servers
    Disable,
}

/// Static description of a multi-instance family.
#[derive(Debug, Clone, Copy)]
pub struct ServerFamily {
    pub name: &'static str,
    pub ids_key: &'static str,
    pub on_disabled: DisabledPolicy,
}

// Sonarr rejects a false ids key, Radarr treats it as disabled.
pub const SONARR: ServerFamily = ServerFamily {
    name: "sonarr",
    ids_key: "sonarr_server_ids",
    on_disabled: DisabledPolicy::Reject,
};

pub const RADARR: ServerFamily = ServerFamily {
    name: "radarr",
    ids_key: "radarr_server_ids",
    on_disabled: DisabledPolicy::Disable,
};

impl ServerFamily {
    /// Section holding the settings of one instance, e.g. `sonarr-1`.
    pub fn section(&self, id: u32) -> String {
        format!("{}-{}", self.name, id)
    }

    /// Read the family's ids key and apply its disabled policy.
    pub fn enabled_ids(&self, source: &IniSource) -> Result<Vec<u32>> {
        let raw = source.get_str(GLOBAL_SECTION, self.ids_key)?;
        match ServerIds::parse(self.ids_key, raw)? {
            ServerIds::Ids(ids) => Ok(ids),
            ServerIds::Disabled => match self.on_disabled {
                DisabledPolicy::Reject => Err(ConfigError::InvalidServerIds {
                    key: self.ids_key.to_string(),
                }),
                DisabledPolicy::Disable => {
                    warn!("{} disabled via {}", self.name, self.ids_key);
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Load every listed instance with `parse`, in id order.
    pub(crate) fn load<T>(
        &self,
        source: &IniSource,
        parse: impl Fn(&IniSource, u32, &str) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.enabled_ids(source)?
            .into_iter()
            .map(|id| {
                let section = self.section(id);
                debug!("Parsing [{}]", section);
                parse(source, id, &section)
            })
            .collect()
    }
}

/// One instance of a family that only needs identity and auth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub id: u32,
    /// Scheme-prefixed URL
    pub url: String,
    pub api_key: String,
    pub verify_ssl: bool,
}

impl Server {
    pub(crate) fn from_section(source: &IniSource, id: u32, section: &str) -> Result<Self> {
        Ok(Self {
            id,
            url: source.get_url(section)?,
            api_key: source.get_str(section, "apikey")?.to_string(),
            verify_ssl: source.get_bool(section, "verify_ssl")?,
        })
    }
}

/// A Sonarr instance with its polling schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SonarrServer {
    #[serde(flatten)]
    pub server: Server,
    pub queue: bool,
    /// Days to look back for missing episodes
    pub missing_days: u32,
    /// Days to look ahead for upcoming episodes
    pub future_days: u32,
    pub missing_days_run_seconds: u64,
    pub future_days_run_seconds: u64,
    pub queue_run_seconds: u64,
}

impl SonarrServer {
    pub(crate) fn from_section(source: &IniSource, id: u32, section: &str) -> Result<Self> {
        Ok(Self {
            server: Server::from_section(source, id, section)?,
            queue: source.get_bool(section, "queue")?,
            missing_days: source.get_int(section, "missing_days")?,
            future_days: source.get_int(section, "future_days")?,
            missing_days_run_seconds: source.get_int(section, "missing_days_run_seconds")?,
            future_days_run_seconds: source.get_int(section, "future_days_run_seconds")?,
            queue_run_seconds: source.get_int(section, "queue_run_seconds")?,
        })
    }

    pub fn missing_days_interval(&self) -> Duration {
        Duration::from_secs(self.missing_days_run_seconds)
    }

    pub fn future_days_interval(&self) -> Duration {
        Duration::from_secs(self.future_days_run_seconds)
    }

    pub fn queue_interval(&self) -> Duration {
        Duration::from_secs(self.queue_run_seconds)
    }
}
