//! # Runtime Configuration Module
//!
//! Environment-variable configuration for the server. Every value can also be
//! overridden by the matching `serve` flag on the command line.
//!
//! ## Environment Variables
//!
//! | Variable                        | Default                  |
//! |---------------------------------|--------------------------|
//! | `FUNSRV_ADDR`                   | `0.0.0.0:9000`           |
//! | `FUNSRV_WWW_DIR`                | `www`                    |
//! | `FUNSRV_IMAGES_DIR`             | `images`                 |
//! | `FUNSRV_FILE_ROOT`              | `.`                      |
//! | `FUNSRV_GITHUB_API`             | `https://api.github.com` |
//! | `FUNSRV_UPSTREAM_TIMEOUT_SECS`  | `20`                     |
//! | `FUNSRV_WORKERS`                | `1`                      |
//! | `FUNSRV_WORKER_STACK_SIZE`      | `0x40000` (256 KB)       |
//! | `FUNSRV_READ_TIMEOUT_SECS`      | `30`                     |
//!
//! `FUNSRV_WORKERS=1` keeps the single-threaded model: each connection is read,
//! answered and closed before the next one is accepted.
//!
//! ## Usage
//!
//! ```rust
//! use funserver::runtime_config::ServerConfig;
//!
//! let config = ServerConfig::from_env();
//! println!("listening on {}", config.addr);
//! ```

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ADDR: &str = "0.0.0.0:9000";
pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_WORKER_STACK_SIZE: usize = 0x40000;
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address and port to listen on
    pub addr: String,
    /// Directory holding `root.html`, `index.html`; also the listed directory
    pub www_dir: PathBuf,
    /// Directory holding `kitty1.html` and `kitty2.html`
    pub images_dir: PathBuf,
    /// Base directory for `/file/<path>` existence checks
    pub file_root: PathBuf,
    /// Base URL the github route appends its query to
    pub github_api: String,
    /// Timeout for the outbound GitHub request
    pub upstream_timeout: Duration,
    /// Number of connection workers (1 = sequential)
    pub workers: usize,
    /// Stack size for worker threads in bytes
    pub worker_stack_size: usize,
    /// Per-read timeout on accepted connections
    pub read_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            www_dir: PathBuf::from("www"),
            images_dir: PathBuf::from("images"),
            file_root: PathBuf::from("."),
            github_api: DEFAULT_GITHUB_API.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            workers: 1,
            worker_stack_size: DEFAULT_WORKER_STACK_SIZE,
            read_timeout: Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
        }
    }
}

/// Parse a size given in decimal or `0x` hexadecimal.
pub fn parse_size(val: &str) -> Option<usize> {
    match val.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            addr: lookup("FUNSRV_ADDR").unwrap_or(defaults.addr),
            www_dir: lookup("FUNSRV_WWW_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.www_dir),
            images_dir: lookup("FUNSRV_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.images_dir),
            file_root: lookup("FUNSRV_FILE_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.file_root),
            github_api: lookup("FUNSRV_GITHUB_API").unwrap_or(defaults.github_api),
            upstream_timeout: lookup("FUNSRV_UPSTREAM_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.upstream_timeout),
            workers: lookup("FUNSRV_WORKERS")
                .and_then(|s| s.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.workers),
            worker_stack_size: lookup("FUNSRV_WORKER_STACK_SIZE")
                .and_then(|s| parse_size(&s))
                .unwrap_or(defaults.worker_stack_size),
            read_timeout: lookup("FUNSRV_READ_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .filter(|n: &u64| *n > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.read_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr, "0.0.0.0:9000");
        assert_eq!(config.upstream_timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("FUNSRV_ADDR", "127.0.0.1:8080"),
            ("FUNSRV_WWW_DIR", "/srv/www"),
            ("FUNSRV_UPSTREAM_TIMEOUT_SECS", "3"),
            ("FUNSRV_WORKERS", "4"),
            ("FUNSRV_WORKER_STACK_SIZE", "0x8000"),
            ("FUNSRV_READ_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.www_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.workers, 4);
        assert_eq!(config.worker_stack_size, 0x8000);
        assert_eq!(config.read_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("FUNSRV_WORKERS", "0"),
            ("FUNSRV_UPSTREAM_TIMEOUT_SECS", "soon"),
            ("FUNSRV_WORKER_STACK_SIZE", "0xZZ"),
            ("FUNSRV_READ_TIMEOUT_SECS", "0"),
        ]));
        assert_eq!(config.workers, 1);
        assert_eq!(config.read_timeout, Duration::from_secs(30));
        assert_eq!(config.upstream_timeout, Duration::from_secs(20));
        assert_eq!(config.worker_stack_size, DEFAULT_WORKER_STACK_SIZE);
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("16384"), Some(16384));
        assert_eq!(parse_size("0x4000"), Some(0x4000));
        assert_eq!(parse_size("lots"), None);
    }
}
