//! Runtime defaults read from the environment (and an optional `.env`).

use crate::models::MAX_LENGTH;
use crate::processing::DEFAULT_TOP_N;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `NET_TOOLS_TOP_N`
    pub top_n: usize,
    /// `NET_TOOLS_LOWER`
    pub lower: u8,
    /// `NET_TOOLS_UPPER`
    pub upper: u8,
    /// `NET_TOOLS_OUTPUT_DIR`, stdout when unset.
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            top_n: DEFAULT_TOP_N,
            lower: 0,
            upper: MAX_LENGTH,
            output_dir: None,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the `NET_TOOLS_*` variables.
    pub fn from_env() -> Config {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Config {
        let default = Config::default();
        Config {
            top_n: parse_or("NET_TOOLS_TOP_N", &lookup, default.top_n),
            lower: parse_or("NET_TOOLS_LOWER", &lookup, default.lower),
            upper: parse_or("NET_TOOLS_UPPER", &lookup, default.upper),
            output_dir: lookup("NET_TOOLS_OUTPUT_DIR")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring {key}={raw:?}, using {default}");
            default
        }),
        None => default,
    }
}
