//! Varken Core Library
//!
//! Typed loading of the `varken.ini` configuration that describes the
//! InfluxDB sink and the monitored services (Sonarr, Radarr, Tautulli,
//! Ombi, ASA). Used by the collectors and by `varkenctl`.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{
    default_config_path, resolve_config_path, AsaServer, ConfigLoader, InfluxServer, OmbiServer,
    Server, SonarrServer, TautulliServer, VarkenConfig,
};
pub use error::*;
