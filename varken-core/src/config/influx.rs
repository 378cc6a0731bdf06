//! InfluxDB connection settings from the `[influxdb]` section

use serde::{Deserialize, Serialize};

use super::source::IniSource;
use crate::error::Result;

pub(crate) const SECTION: &str = "influxdb";

/// Connection details for the time-series sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluxServer {
    /// Host name or address, without scheme
    pub url: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl InfluxServer {
    pub(crate) fn from_source(source: &IniSource) -> Result<Self> {
        Ok(Self {
            url: source.get_non_empty(SECTION, "url")?.to_string(),
            port: source.get_int(SECTION, "port")?,
            username: source.get_non_empty(SECTION, "username")?.to_string(),
            password: source.get_non_empty(SECTION, "password")?.to_string(),
        })
    }

    /// `host:port` form used when dialing the database.
    pub fn address(&self) -> String {
        format!("{}:{}", self.url, self.port)
    }
}
