use config::{Config, File};
use serde::Deserialize;

use crate::error::AstraError;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AstraConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8780,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// "template" (deterministic knowledge-base engine) or "openai".
    pub backend: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: "template".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OpenAiConfig {
    pub model: String,
    pub max_completion_tokens: u32,
    /// Explicit key; falls back to the OPENAI_API_KEY env var at call time.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            model: "gpt-5".to_string(),
            max_completion_tokens: 2048,
            api_key: None,
        }
    }
}

impl AstraConfig {
    pub fn load(path: &str) -> Result<Self, AstraError> {
        let s = Config::builder()
            .add_source(File::with_name(path))
            .build()?;
        Ok(s.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_the_template_backend() {
        let config = AstraConfig::default();
        assert_eq!(config.generator.backend, "template");
        assert_eq!(config.http.port, 8780);
        assert_eq!(config.openai.model, "gpt-5");
        assert!(config.openai.api_key.is_none());
    }
}
