//! Typed key lookup over a parsed INI document
//!
//! Coercion follows the usual INI conventions: booleans accept
//! `1/yes/true/on` and `0/no/false/off` in any case, integers are decimal.
//! Keys match case-insensitively and fall back to `[DEFAULT]`; a repeated
//! section or key is an error.

use ini::{Ini, ParseOption, Properties};
use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// Parse a boolean token, returning `None` for anything unrecognized.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// URL scheme selected by an `ssl` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn from_ssl(ssl: bool) -> Self {
        if ssl {
            Scheme::Https
        } else {
            Scheme::Http
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Scheme::Http => "http://",
            Scheme::Https => "https://",
        }
    }

    /// Prepend the scheme to a configured host value, leaving the host untouched.
    pub fn apply(self, host: &str) -> String {
        format!("{}{}", self.prefix(), host)
    }
}

/// Section whose keys every other section inherits.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Parsed INI document with typed, error-reporting getters.
pub struct IniSource {
    ini: Ini,
}

impl IniSource {
    /// Parse INI text. Values are taken verbatim: no quote or escape handling.
    pub fn parse(content: &str) -> Result<Self> {
        let opt = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, opt)?;
        check_duplicates(&ini)?;
        Ok(Self { ini })
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.ini.section(Some(section)).is_some()
    }

    fn section(&self, section: &str) -> Result<&Properties> {
        self.ini
            .section(Some(section))
            .ok_or_else(|| ConfigError::MissingSection(section.to_string()))
    }

    /// Raw string value of a required key.
    ///
    /// The section itself must exist; only the key may come from `[DEFAULT]`.
    pub fn get_str(&self, section: &str, key: &str) -> Result<&str> {
        let props = self.section(section)?;
        lookup(props, key)
            .or_else(|| {
                self.ini
                    .section(Some(DEFAULT_SECTION))
                    .and_then(|defaults| lookup(defaults, key))
            })
            .ok_or_else(|| ConfigError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    /// Required key that must also be non-empty.
    pub fn get_non_empty(&self, section: &str, key: &str) -> Result<&str> {
        let value = self.get_str(section, key)?;
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                section: section.to_string(),
                key: key.to_string(),
            });
        }
        Ok(value)
    }

    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool> {
        let value = self.get_str(section, key)?;
        parse_bool(value).ok_or_else(|| ConfigError::InvalidBoolean {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Integer value of any width; overflow is reported as an invalid integer.
    pub fn get_int<T: FromStr>(&self, section: &str, key: &str) -> Result<T> {
        let value = self.get_str(section, key)?;
        value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidInteger {
                section: section.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            })
    }

    /// `url` combined with the scheme chosen by `ssl`.
    pub fn get_url(&self, section: &str) -> Result<String> {
        let host = self.get_str(section, "url")?;
        let scheme = Scheme::from_ssl(self.get_bool(section, "ssl")?);
        Ok(scheme.apply(host))
    }
}

fn lookup<'a>(props: &'a Properties, key: &str) -> Option<&'a str> {
    props
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}

fn check_duplicates(ini: &Ini) -> Result<()> {
    let mut sections = HashSet::new();
    for (name, props) in ini.iter() {
        let name = name.unwrap_or_default();
        if !sections.insert(name) {
            return Err(ConfigError::DuplicateSection(name.to_string()));
        }

        let mut keys = HashSet::new();
        for (key, _) in props.iter() {
            if !keys.insert(key.to_ascii_lowercase()) {
                return Err(ConfigError::DuplicateKey {
                    section: name.to_string(),
                    key: key.to_string(),
                });
            }
        }
    }
    Ok(())
}
