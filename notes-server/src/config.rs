//! Server configuration, read from `NOTES_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Result, ServerError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Host to bind the server to.
    pub host: String,
    /// Port to bind the server to.
    pub port: u16,
    /// Directory holding the built UI.
    pub dist_dir: PathBuf,
    /// JSON file with the notes to serve; built-in notes when unset.
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("NOTES_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ServerError::Configuration(format!("NOTES_PORT is not a valid port: {raw}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: get("NOTES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            dist_dir: get("NOTES_DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR)),
            seed_file: get("NOTES_SEED_FILE").map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ServerError::Configuration(format!("Invalid address: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_values_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("NOTES_HOST", "127.0.0.1"),
            ("NOTES_PORT", "8081"),
            ("NOTES_DIST_DIR", "/srv/notes"),
            ("NOTES_SEED_FILE", "/etc/notes.json"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8081");
        assert_eq!(config.dist_dir, PathBuf::from("/srv/notes"));
        assert_eq!(config.seed_file, Some(PathBuf::from("/etc/notes.json")));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("NOTES_PORT", " "),
            ("NOTES_SEED_FILE", ""),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        for bad in ["abc", "70000", "-1"] {
            let result = ServerConfig::from_lookup(lookup_from(&[("NOTES_PORT", bad)]));
            assert!(matches!(result, Err(ServerError::Configuration(_))), "{bad}");
        }
    }

    #[test]
    fn test_invalid_host_rejected() {
        let config = ServerConfig::from_lookup(lookup_from(&[("NOTES_HOST", "not a host")])).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
