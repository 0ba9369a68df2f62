use std::env;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "base32.json";

// Console settings
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Column width for encoded output; `None` prints a single line.
    pub wrap: Option<usize>,
    /// Also put results on the clipboard.
    pub copy: bool,
    pub log_level: LevelFilter,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            wrap: None,
            copy: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl ConsoleConfig {
    /// Read `base32.json` from the working directory, falling back to env vars.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("invalid config file {}", path.display())),
            Err(_) => Ok(Self::from_env()),
        }
    }

    /// `BASE32_WRAP`, `BASE32_COPY` and `BASE32_LOG`; unset or unparsable values use defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let wrap = var("BASE32_WRAP")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&w| w > 0)
            .or(defaults.wrap);
        let copy = var("BASE32_COPY")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.copy);
        let log_level = var("BASE32_LOG")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.log_level);

        Self { wrap, copy, log_level }
    }

    /// Split encoded output into lines of at most `wrap` characters.
    pub fn wrap_output(&self, encoded: &str) -> String {
        match self.wrap {
            Some(width) if width > 0 && encoded.len() > width => encoded
                .as_bytes()
                .chunks(width)
                // encoded output is ASCII, so every chunk is valid UTF-8
                .map(String::from_utf8_lossy)
                .collect::<Vec<_>>()
                .join("\n"),
            _ => encoded.to_string(),
        }
    }
}
