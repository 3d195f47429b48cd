use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_SITE_ROOT: &str = "./target/site";
pub const DEFAULT_SITE_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_INDEX_FILE: &str = "./jianying-http/index.html";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid SITE_ADDR \"{value}\": {source}")]
    InvalidAddr {
        value: String,
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Output of the wasm build, served as-is.
    pub site_root: PathBuf,
    pub site_addr: SocketAddr,
    /// Shell that loads `/pkg/jianying.js` and mounts the page.
    pub index_file: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let site_root = lookup("SITE_ROOT").unwrap_or_else(|| DEFAULT_SITE_ROOT.to_string());
        let index_file = lookup("INDEX_FILE").unwrap_or_else(|| DEFAULT_INDEX_FILE.to_string());
        let site_addr = lookup("SITE_ADDR").unwrap_or_else(|| DEFAULT_SITE_ADDR.to_string());
        let site_addr = site_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: site_addr.clone(),
                source,
            })?;

        Ok(Self {
            site_root: PathBuf::from(site_root),
            site_addr,
            index_file: PathBuf::from(index_file),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{ConfigError, ServerConfig};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.site_root, PathBuf::from("./target/site"));
        assert_eq!(config.site_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.index_file, PathBuf::from("./jianying-http/index.html"));
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SITE_ROOT", "/srv/jianying"),
            ("SITE_ADDR", "127.0.0.1:8080"),
            ("INDEX_FILE", "/srv/index.html"),
        ]))
        .unwrap();
        assert_eq!(config.site_root, PathBuf::from("/srv/jianying"));
        assert_eq!(config.site_addr.port(), 8080);
        assert_eq!(config.index_file, PathBuf::from("/srv/index.html"));
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup(&[("SITE_ADDR", "localhost")])).unwrap_err();
        let ConfigError::InvalidAddr { value, .. } = &err;
        assert_eq!(value, "localhost");
        assert!(err.to_string().starts_with("invalid SITE_ADDR \"localhost\""));
    }
}
