//! Integration tests for loading `varken.ini` files from disk

use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use varken_core::config::{ConfigLoader, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
use varken_core::{ConfigError, Server, VarkenConfig};

const INFLUX: &str = r#"
[influxdb]
url = influxdb.domain.tld
port = 8086
username = root
password = root
"#;

const SONARR_1: &str = r#"
[sonarr-1]
url = sonarr1.domain.tld
apikey = xxxxxxxxxxxxxxxx
ssl = false
verify_ssl = true
queue = true
missing_days = 7
future_days = 1
missing_days_run_seconds = 300
future_days_run_seconds = 300
queue_run_seconds = 300
"#;

const SONARR_2: &str = r#"
[sonarr-2]
url = sonarr2.domain.tld:8989/sonarr
apikey = yyyyyyyyyyyyyyyy
ssl = true
verify_ssl = false
queue = false
missing_days = 14
future_days = 3
missing_days_run_seconds = 600
future_days_run_seconds = 900
queue_run_seconds = 60
"#;

const RADARR_1: &str = r#"
[radarr-1]
url = radarr1.domain.tld
apikey = zzzzzzzzzzzzzzzz
ssl = false
verify_ssl = true
"#;

const TAUTULLI: &str = r#"
[tautulli]
url = tautulli.domain.tld:8181
fallback_ip = 0.0.0.0
apikey = tttttttttttttttt
ssl = true
verify_ssl = true
influx_db = plex
"#;

fn global(sonarr: &str, radarr: &str, tautulli: bool) -> String {
    format!(
        "[global]\nsonarr_server_ids = {}\nradarr_server_ids = {}\ntautulli = {}\nombi = false\nasa = false\n",
        sonarr, radarr, tautulli
    )
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn load(content: &str) -> varken_core::Result<VarkenConfig> {
    let file = write_config(content);
    ConfigLoader::new(file.path()).load()
}

#[test]
fn test_sonarr_false_is_rejected() {
    let content = [global("false", "false", false).as_str(), INFLUX].concat();

    let err = load(&content).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidServerIds { .. }));
    assert_eq!(
        err.to_string(),
        "sonarr_server_ids must be either false, or a comma-separated list of server ids."
    );
}

#[test]
fn test_sonarr_servers_in_input_order() {
    let content = [
        global("1,2", "false", false).as_str(),
        INFLUX,
        SONARR_2,
        SONARR_1,
    ]
    .concat();

    let config = load(&content).unwrap();
    assert!(config.sonarr_enabled());
    assert_eq!(config.sonarr_servers.len(), 2);

    let first = &config.sonarr_servers[0];
    assert_eq!(first.server.id, 1);
    assert_eq!(first.server.url, "http://sonarr1.domain.tld");
    assert_eq!(first.server.api_key, "xxxxxxxxxxxxxxxx");
    assert!(first.server.verify_ssl);
    assert!(first.queue);
    assert_eq!(first.missing_days, 7);
    assert_eq!(first.future_days, 1);
    assert_eq!(first.missing_days_run_seconds, 300);
    assert_eq!(first.future_days_run_seconds, 300);
    assert_eq!(first.queue_run_seconds, 300);

    let second = &config.sonarr_servers[1];
    assert_eq!(second.server.id, 2);
    assert_eq!(second.server.url, "https://sonarr2.domain.tld:8989/sonarr");
    assert_eq!(second.server.api_key, "yyyyyyyyyyyyyyyy");
    assert!(!second.server.verify_ssl);
    assert!(!second.queue);
    assert_eq!(second.missing_days, 14);
    assert_eq!(second.future_days, 3);
    assert_eq!(second.missing_days_run_seconds, 600);
    assert_eq!(second.future_days_run_seconds, 900);
    assert_eq!(second.queue_run_seconds, 60);
}

#[test]
fn test_duplicate_ids_are_kept() {
    let content = [global("1,1", "false", false).as_str(), INFLUX, SONARR_1].concat();

    let config = load(&content).unwrap();
    assert_eq!(config.sonarr_servers.len(), 2);
    assert_eq!(config.sonarr_servers[0], config.sonarr_servers[1]);
}

#[test]
fn test_radarr_false_is_disabled() {
    let content = [global("1", "false", false).as_str(), INFLUX, SONARR_1].concat();

    let config = load(&content).unwrap();
    assert!(!config.radarr_enabled());
    assert!(config.radarr_servers.is_empty());
}

#[test]
fn test_radarr_servers() {
    let content = [global("1", "1", false).as_str(), INFLUX, SONARR_1, RADARR_1].concat();

    let config = load(&content).unwrap();
    assert!(config.radarr_enabled());
    assert_eq!(
        config.radarr_servers,
        vec![Server {
            id: 1,
            url: "http://radarr1.domain.tld".to_string(),
            api_key: "zzzzzzzzzzzzzzzz".to_string(),
            verify_ssl: true,
        }]
    );
}

#[test]
fn test_missing_instance_section() {
    let content = [global("1,3", "false", false).as_str(), INFLUX, SONARR_1].concat();

    match load(&content) {
        Err(ConfigError::MissingSection(section)) => assert_eq!(section, "sonarr-3"),
        other => panic!("Expected MissingSection, got {:?}", other),
    }
}

#[test]
fn test_tautulli_disabled_without_section() {
    let content = [global("1", "false", false).as_str(), INFLUX, SONARR_1].concat();

    let config = load(&content).unwrap();
    assert!(!config.tautulli_enabled());
    assert!(config.tautulli_server.is_none());
}

#[test]
fn test_tautulli_enabled() {
    let content = [global("1", "false", true).as_str(), INFLUX, SONARR_1, TAUTULLI].concat();

    let config = load(&content).unwrap();
    let tautulli = config.tautulli_server.expect("tautulli should be configured");
    assert_eq!(tautulli.url, "https://tautulli.domain.tld:8181");
    assert_eq!(tautulli.fallback_ip, "0.0.0.0");
    assert_eq!(tautulli.api_key, "tttttttttttttttt");
    assert!(tautulli.verify_ssl);
    assert_eq!(tautulli.influx_db, "plex");
}

#[test]
fn test_influx_port_not_a_number() {
    let content = [
        global("1", "false", false).as_str(),
        "[influxdb]\nurl = localhost\nport = notanumber\nusername = root\npassword = root\n",
        SONARR_1,
    ]
    .concat();

    match load(&content) {
        Err(ConfigError::InvalidInteger {
            section,
            key,
            value,
        }) => {
            assert_eq!(section, "influxdb");
            assert_eq!(key, "port");
            assert_eq!(value, "notanumber");
        }
        other => panic!("Expected InvalidInteger, got {:?}", other),
    }
}

#[test]
fn test_influx_missing_key() {
    let content = [
        global("1", "false", false).as_str(),
        "[influxdb]\nurl = localhost\nport = 8086\nusername = root\n",
        SONARR_1,
    ]
    .concat();

    match load(&content) {
        Err(ConfigError::MissingKey { section, key }) => {
            assert_eq!(section, "influxdb");
            assert_eq!(key, "password");
        }
        other => panic!("Expected MissingKey, got {:?}", other),
    }
}

#[test]
fn test_ssl_tokens_select_scheme() {
    let pairs = [("true", "false"), ("yes", "no"), ("on", "off"), ("1", "0")];

    for (on, off) in pairs {
        for (token, scheme) in [(on, "https://"), (off, "http://")] {
            let radarr = format!(
                "[radarr-1]\nurl = radarr.local:7878/base\napikey = k\nssl = {}\nverify_ssl = true\n",
                token
            );
            let content = [
                global("1", "1", false).as_str(),
                INFLUX,
                SONARR_1,
                radarr.as_str(),
            ]
            .concat();

            let config = load(&content).unwrap();
            assert_eq!(
                config.radarr_servers[0].url,
                format!("{}radarr.local:7878/base", scheme),
                "ssl token {}",
                token
            );
        }
    }
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::new(dir.path().join(CONFIG_FILE_NAME))
        .load()
        .unwrap_err();

    assert!(err.is_not_found());
}

#[test]
#[serial]
fn test_loader_from_env() {
    let content = [global("1", "false", false).as_str(), INFLUX, SONARR_1].concat();
    let file = write_config(&content);

    std::env::set_var(CONFIG_ENV_VAR, file.path());
    let loader = ConfigLoader::from_env();
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(loader.path(), file.path());
    let config = loader.load().unwrap();
    assert_eq!(config.influx_server.port, 8086);
}

#[test]
fn test_example_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("varken.example.ini");

    let config = ConfigLoader::new(path).load().unwrap();
    assert_eq!(config.sonarr_servers.len(), 2);
    assert_eq!(config.radarr_servers.len(), 2);
    assert!(config.tautulli_enabled());
    assert!(config.ombi_enabled());
    assert!(!config.asa_enabled());
    assert_eq!(
        config.ombi_server.unwrap().url,
        "http://ombi.domain.tld".to_string()
    );
}

#[test]
fn test_repeated_ssl_key_rejected() {
    let sonarr = format!("{}ssl = true\n", SONARR_1);
    let content = [global("1", "false", false).as_str(), INFLUX, sonarr.as_str()].concat();

    match load(&content) {
        Err(ConfigError::DuplicateKey { section, key }) => {
            assert_eq!(section, "sonarr-1");
            assert_eq!(key, "ssl");
        }
        other => panic!("Expected DuplicateKey, got {:?}", other),
    }
}

#[test]
fn test_split_instance_section_rejected() {
    let content = [
        global("1", "false", false).as_str(),
        INFLUX,
        SONARR_1,
        "[sonarr-1]\nqueue = false\n",
    ]
    .concat();

    match load(&content) {
        Err(ConfigError::DuplicateSection(section)) => assert_eq!(section, "sonarr-1"),
        other => panic!("Expected DuplicateSection, got {:?}", other),
    }
}

#[test]
fn test_shared_settings_from_default_section() {
    let radarr = "[radarr-1]\nurl = radarr1.domain.tld\napikey = k\n";
    let content = [
        "[DEFAULT]\nssl = true\nverify_ssl = false\n",
        global("1", "1", false).as_str(),
        INFLUX,
        SONARR_1,
        radarr,
    ]
    .concat();

    let config = load(&content).unwrap();
    assert_eq!(config.radarr_servers[0].url, "https://radarr1.domain.tld");
    assert!(!config.radarr_servers[0].verify_ssl);
    // Section values still override the defaults
    assert_eq!(config.sonarr_servers[0].server.url, "http://sonarr1.domain.tld");
}
