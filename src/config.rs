// src/config.rs
//! Instance configuration, loaded from TOML or JSON.
//!
//! ```toml
//! seed = 42                        # optional, fixed RNG seed
//! lexicon_path = "lex.json"        # optional, extra tagger entries, relative to this file
//! ignore = ["bork", { pattern = "^the " }]
//! ```
//!
//! Lookup order for `load_config_default`:
//! 1) $DOGEIFY_CONFIG_PATH
//! 2) config/dogeify.toml
//! 3) config/dogeify.json
//! 4) built-in defaults
//!
//! `$DOGEIFY_SEED` overrides `seed` when it parses as an unsigned integer.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ignore::IgnoreEntry;

pub const ENV_CONFIG_PATH: &str = "DOGEIFY_CONFIG_PATH";
pub const ENV_SEED: &str = "DOGEIFY_SEED";
pub const DEFAULT_TOML_PATH: &str = "config/dogeify.toml";
pub const DEFAULT_JSON_PATH: &str = "config/dogeify.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DogeifyConfig {
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Extra lexicon entries merged into the bundled tagger.
    pub lexicon_path: Option<PathBuf>,
    /// Ignore entries applied on every call, on top of the built-ins.
    pub ignore: Vec<IgnoreEntry>,
}

/// Load config from an explicit path. Supports TOML or JSON.
pub fn load_config_from(path: &Path) -> Result<DogeifyConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading dogeify config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let mut cfg = parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing dogeify config {}", path.display()))?;
    resolve_relative_paths(&mut cfg, path);
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

/// Relative paths inside a config file point next to that file, not the CWD.
fn resolve_relative_paths(cfg: &mut DogeifyConfig, config_path: &Path) {
    let Some(base) = config_path.parent() else {
        return;
    };
    if let Some(lex) = cfg.lexicon_path.as_mut() {
        if lex.is_relative() {
            *lex = base.join(&*lex);
        }
    }
}

/// Load config using env var + fallbacks (see module docs).
pub fn load_config_default() -> Result<DogeifyConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_config_from(&pb);
        } else {
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
    }
    for p in [DEFAULT_TOML_PATH, DEFAULT_JSON_PATH] {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_config_from(&pb);
        }
    }
    let mut cfg = DogeifyConfig::default();
    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn parse_config(s: &str, hint_ext: &str) -> Result<DogeifyConfig> {
    match hint_ext {
        "toml" => Ok(toml::from_str(s)?),
        "json" => Ok(serde_json::from_str(s)?),
        _ => {
            // No usable extension: sniff JSON by its opening brace.
            if s.trim_start().starts_with('{') {
                Ok(serde_json::from_str(s)?)
            } else {
                Ok(toml::from_str(s)?)
            }
        }
    }
}

fn apply_env_overrides(cfg: &mut DogeifyConfig) {
    if let Some(seed) = parse_seed_env(std::env::var(ENV_SEED).ok()) {
        cfg.seed = Some(seed);
    }
}

fn parse_seed_env(raw: Option<String>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
}
