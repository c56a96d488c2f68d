use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::models::{KeywordMap, MatchPolicy, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub ollama: OllamaSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
    /// Directory with the frontend bundle; skipped when absent
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            frontend_dir: default_frontend_dir(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }
fn default_frontend_dir() -> String { "frontend".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

fn default_catalog_path() -> String { "assets/clubs.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaSettings {
    #[serde(default = "default_ollama_url")]
    pub base_url: String,
    #[serde(default = "default_ollama_model")]
    pub model: String,
    #[serde(default = "default_ollama_timeout")]
    pub timeout_secs: u64,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            base_url: default_ollama_url(),
            model: default_ollama_model(),
            timeout_secs: default_ollama_timeout(),
        }
    }
}

fn default_ollama_url() -> String { "http://localhost:11434".to_string() }
fn default_ollama_model() -> String { "llama3".to_string() }
fn default_ollama_timeout() -> u64 { 30 }

/// Which matching strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Scoring,
    Keyword,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_strategy")]
    pub strategy: MatchStrategy,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Trigger word -> club names, consulted only in keyword mode
    #[serde(default)]
    pub keywords: HashMap<String, Vec<String>>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            max_results: default_max_results(),
            keywords: HashMap::new(),
        }
    }
}

fn default_strategy() -> MatchStrategy { MatchStrategy::Scoring }
fn default_max_results() -> usize { 3 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_tags_weight")]
    pub tags: u32,
    #[serde(default = "default_description_weight")]
    pub description: u32,
    #[serde(default = "default_name_weight")]
    pub name: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            tags: default_tags_weight(),
            description: default_description_weight(),
            name: default_name_weight(),
        }
    }
}

fn default_tags_weight() -> u32 { 3 }
fn default_description_weight() -> u32 { 2 }
fn default_name_weight() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CLUBMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CLUBMATCH_)
            // e.g., CLUBMATCH_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CLUBMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CLUBMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Build the matching policy value from configuration
    pub fn match_policy(&self) -> MatchPolicy {
        match self.matching.strategy {
            MatchStrategy::Scoring => MatchPolicy::Scoring(ScoringWeights {
                tags: self.scoring.weights.tags,
                description: self.scoring.weights.description,
                name: self.scoring.weights.name,
            }),
            MatchStrategy::Keyword => {
                let map: KeywordMap = self.matching.keywords.clone();
                MatchPolicy::Keyword(map)
            }
        }
    }
}

/// Apply well-known environment variable overrides
///
/// The Ollama endpoint and model are commonly set through OLLAMA_URL and
/// OLLAMA_MODEL in deployment; both win over the config file.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let ollama_url = env::var("OLLAMA_URL").ok();
    let ollama_model = env::var("OLLAMA_MODEL").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = ollama_url {
        builder = builder.set_override("ollama.base_url", url)?;
    }
    if let Some(model) = ollama_model {
        builder = builder.set_override("ollama.model", model)?;
    }

    builder.build()
}
