use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::voice;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        if let Ok(path) = env::var("REDUB_CONFIG") {
            return Self::from_path(Path::new(&path));
        }

        let default_path = Path::new("config/redub.toml");
        if default_path.exists() {
            return Self::from_path(default_path);
        }

        Ok(Self::default())
    }

    fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("invalid config: {:?}", path))?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// Literal API key. Prefer `api_key_env` in checked-in configs.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the API key; checked before `api_key`.
    #[serde(default = "GeminiConfig::default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "GeminiConfig::default_model")]
    pub model: String,
}

impl GeminiConfig {
    fn default_api_key_env() -> String {
        "GEMINI_API_KEY".into()
    }

    fn default_model() -> String {
        "gemini-2.5-flash-preview-tts".into()
    }

    /// Resolve the API key, preferring the environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Ok(key) = env::var(&self.api_key_env) {
            if !key.trim().is_empty() {
                return Some(key);
            }
        }
        self.api_key.clone()
    }

    /// Non-fatal sanity check of the configured key.
    ///
    /// Returns false when no key can be resolved at all; a key with an
    /// unexpected shape only gets a warning, since the real check happens on
    /// the first remote call.
    pub fn validate(&self) -> bool {
        match self.resolve_api_key() {
            None => {
                tracing::warn!(env = %self.api_key_env, "no Gemini API key configured");
                false
            }
            Some(key) => {
                if !key.starts_with("AIza") {
                    tracing::warn!("Gemini API key does not look like an AIza-prefixed key");
                }
                true
            }
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: Self::default_api_key_env(),
            model: Self::default_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Voice used when the caller does not pick one.
    #[serde(default = "SpeechConfig::default_voice")]
    pub default_voice: String,
    /// Silence inserted between paragraphs, in seconds. Zero renders the
    /// whole text in a single remote call.
    #[serde(default)]
    pub paragraph_gap_secs: f64,
}

impl SpeechConfig {
    fn default_voice() -> String {
        voice::DEFAULT_VOICE.into()
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            default_voice: Self::default_voice(),
            paragraph_gap_secs: 0.0,
        }
    }
}
