use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const SUPPORTED_LANGUAGES: &[&str] = &["da", "en"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_columns")]
    pub columns: u16,
    #[serde(default = "default_volume")]
    pub volume: u8,
    #[serde(default = "default_speech_cache")]
    pub speech_cache: bool,
    #[serde(default = "default_speech_cache_dir")]
    pub speech_cache_dir: String,
    #[serde(default = "default_speech_cache_max_mb")]
    pub speech_cache_max_mb: u64,
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_language() -> String {
    "da".to_string()
}
fn default_columns() -> u16 {
    6
}
fn default_volume() -> u8 {
    100
}
fn default_speech_cache() -> bool {
    true
}
fn default_speech_cache_max_mb() -> u64 {
    64
}
fn default_speech_cache_dir() -> String {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taleplade")
        .join("tts")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            theme: default_theme(),
            language: default_language(),
            columns: default_columns(),
            volume: default_volume(),
            speech_cache: default_speech_cache(),
            speech_cache_dir: default_speech_cache_dir(),
            speech_cache_max_mb: default_speech_cache_max_mb(),
            fetch_timeout_secs: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.validate();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taleplade")
            .join("config.toml")
    }

    /// Clamp values a hand-edited config file can get wrong.
    pub fn validate(&mut self) {
        self.columns = self.columns.clamp(1, 12);
        self.volume = self.volume.min(100);
        self.speech_cache_max_mb = self.speech_cache_max_mb.max(1);
        if !SUPPORTED_LANGUAGES.contains(&self.language.as_str()) {
            self.language = default_language();
        }
        let trimmed = self.server_url.trim_end_matches('/');
        if trimmed.is_empty() {
            self.server_url = default_server_url();
        } else if trimmed.len() != self.server_url.len() {
            self.server_url = trimmed.to_string();
        }
    }

    pub fn speech_cache_max_bytes(&self) -> u64 {
        self.speech_cache_max_mb.saturating_mul(1024 * 1024)
    }

    pub fn volume_ratio(&self) -> f32 {
        f32::from(self.volume) / 100.0
    }
}
