// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{
    Config, CscanToml, DiscoveryConfig, LimitsConfig, OutputFormat, Preferences,
};
use crate::error::Result;
use std::path::Path;

/// Directories never descended into during discovery.
pub const PRUNE_DIRS: &[&str] = &[".git", "target", "build", "node_modules"];

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and loads `cscan.toml` and `.cscanignore` from `dir`.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let mut config = Self::new();
        config.load_local_config(dir);
        config
    }

    pub fn load_local_config(&mut self, dir: &Path) {
        io::load_ignore_file(self, dir);
        io::load_toml_config(self, dir);
    }

    /// # Errors
    /// Returns error if the TOML is malformed or holds an invalid exclude regex.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// True when `ext` is one of the configured source extensions.
    #[must_use]
    pub fn is_source_ext(&self, ext: &str) -> bool {
        self.discovery
            .extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Writes a default `cscan.toml` into `dir`.
///
/// # Errors
/// Returns error if the file exists or the write fails.
pub fn init(dir: &Path) -> Result<()> {
    io::write_default(dir)
}
