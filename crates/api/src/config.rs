//! Runtime configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const BIND_ADDR_VAR: &str = "INVCALC_BIND_ADDR";
pub const DATA_DIR_VAR: &str = "INVCALC_DATA_DIR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Directory holding `db.json` and `globalStats.json`.
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank values fall
    /// back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind = var(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_VAR} is not a socket address: {bind}"))?;

        Ok(Self {
            bind_addr,
            data_dir: PathBuf::from(var(DATA_DIR_VAR, DEFAULT_DATA_DIR)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (DATA_DIR_VAR, "/var/lib/invcalc"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(cfg.data_dir, PathBuf::from("/var/lib/invcalc"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[(DATA_DIR_VAR, "   ")])).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn invalid_bind_address_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));
    }
}
