// src/config/io.rs
use super::types::{Config, CscanToml};
use crate::error::{CscanError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "cscan.toml";
pub const IGNORE_FILE: &str = ".cscanignore";

pub fn load_toml_config(config: &mut Config, dir: &Path) {
    let path = dir.join(CONFIG_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return;
    };
    if let Err(e) = parse_toml(config, &content) {
        eprintln!("WARN: ignoring {}: {e}", path.display());
    }
}

/// Applies a `cscan.toml` body on top of `config`.
///
/// # Errors
/// Returns error if the TOML is malformed or an exclude pattern is not a valid regex.
/// On error `config` is left untouched.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: CscanToml = toml::from_str(content)?;
    let patterns = parsed
        .discovery
        .exclude
        .iter()
        .map(|s| Regex::new(s))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    config.exclude_patterns.extend(patterns);
    config.limits = parsed.limits;
    config.discovery = parsed.discovery;
    config.preferences = parsed.preferences;
    Ok(())
}

pub fn load_ignore_file(config: &mut Config, dir: &Path) {
    let Ok(content) = fs::read_to_string(dir.join(IGNORE_FILE)) else {
        return;
    };
    for line in content.lines() {
        process_ignore_line(config, line);
    }
}

pub fn process_ignore_line(config: &mut Config, line: &str) {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return;
    }
    match Regex::new(trimmed) {
        Ok(re) => config.exclude_patterns.push(re),
        Err(e) => {
            if config.verbose {
                eprintln!("WARN: bad pattern in {IGNORE_FILE}: {trimmed} ({e})");
            }
        }
    }
}

/// Writes a default `cscan.toml` into `dir`.
///
/// # Errors
/// Returns error if the file already exists or cannot be written.
pub fn write_default(dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Err(CscanError::Config(format!(
            "{} already exists",
            path.display()
        )));
    }
    let body = toml::to_string_pretty(&CscanToml::default())
        .map_err(|e| CscanError::Config(e.to_string()))?;
    fs::write(&path, body).map_err(|source| CscanError::Io { source, path })
}
