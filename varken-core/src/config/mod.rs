//! Configuration types for Varken
//!
//! # Architecture
//!
//! Configuration is a single INI file read once at startup:
//! - `[influxdb]` - time-series sink, always required
//! - `[global]` - which integrations are enabled
//! - `[sonarr-<id>]`, `[radarr-<id>]` - one section per listed server id
//! - `[tautulli]`, `[ombi]`, `[asa]` - single-instance integrations
//!
//! [`ConfigLoader`] reads the file and produces an immutable [`VarkenConfig`].

mod influx;
mod integrations;
mod loader;
mod paths;
mod servers;
mod source;

pub use influx::InfluxServer;
pub use integrations::{AsaServer, OmbiServer, TautulliServer};
pub use loader::{ConfigLoader, VarkenConfig};
pub use paths::{default_config_path, resolve_config_path, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
pub use servers::{
    DisabledPolicy, Server, ServerFamily, ServerIds, SonarrServer, RADARR, SONARR,
};
pub use source::{parse_bool, IniSource, Scheme, DEFAULT_SECTION};

/// Section holding the integration toggles.
pub const GLOBAL_SECTION: &str = "global";
