//! Single-instance integrations: Tautulli, Ombi and ASA
//!
//! Each is gated by a boolean key in `[global]`. When the gate is off the
//! integration's own section is never consulted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::source::IniSource;
use super::GLOBAL_SECTION;
use crate::error::Result;

/// Tautulli endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TautulliServer {
    pub url: String,
    /// Address used when a stream reports no usable IP
    pub fallback_ip: String,
    pub api_key: String,
    pub verify_ssl: bool,
    pub influx_db: String,
}

/// Ombi endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmbiServer {
    pub url: String,
    pub api_key: String,
    pub verify_ssl: bool,
}

/// ASA firewall endpoint (credential pair instead of an API key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsaServer {
    pub url: String,
    pub username: String,
    pub password: String,
    pub verify_ssl: bool,
    pub influx_db: String,
}

/// Read `section` with `parse` when `[global] <section>` is true.
pub(crate) fn load_gated<T>(
    source: &IniSource,
    section: &str,
    parse: impl FnOnce(&IniSource, &str) -> Result<T>,
) -> Result<Option<T>> {
    if !source.get_bool(GLOBAL_SECTION, section)? {
        debug!("{} disabled", section);
        return Ok(None);
    }

    debug!("Parsing [{}]", section);
    parse(source, section).map(Some)
}

impl TautulliServer {
    pub const SECTION: &'static str = "tautulli";

    pub(crate) fn from_section(source: &IniSource, section: &str) -> Result<Self> {
        Ok(Self {
            url: source.get_url(section)?,
            fallback_ip: source.get_str(section, "fallback_ip")?.to_string(),
            api_key: source.get_str(section, "apikey")?.to_string(),
            verify_ssl: source.get_bool(section, "verify_ssl")?,
            influx_db: source.get_str(section, "influx_db")?.to_string(),
        })
    }
}

impl OmbiServer {
    pub const SECTION: &'static str = "ombi";

    pub(crate) fn from_section(source: &IniSource, section: &str) -> Result<Self> {
        Ok(Self {
            url: source.get_url(section)?,
            api_key: source.get_str(section, "apikey")?.to_string(),
            verify_ssl: source.get_bool(section, "verify_ssl")?,
        })
    }
}

impl AsaServer {
    pub const SECTION: &'static str = "asa";

    pub(crate) fn from_section(source: &IniSource, section: &str) -> Result<Self> {
        Ok(Self {
            url: source.get_url(section)?,
            username: source.get_str(section, "username")?.to_string(),
            password: source.get_str(section, "password")?.to_string(),
            verify_ssl: source.get_bool(section, "verify_ssl")?,
            influx_db: source.get_str(section, "influx_db")?.to_string(),
        })
    }
}
