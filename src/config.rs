use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
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
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_journeys_table")]
    pub journeys_table: String,
    #[serde(default = "default_stories_table")]
    pub stories_table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_journeys_table() -> String { "journeys".to_string() }
fn default_stories_table() -> String { "stories".to_string() }
fn default_timeout_secs() -> u64 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// How long a fetched candidate list stays fresh; 0 disables caching
    #[serde(default = "default_catalog_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_catalog_entries")]
    pub max_entries: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_catalog_ttl(),
            max_entries: default_catalog_entries(),
        }
    }
}

fn default_catalog_ttl() -> u64 { 300 }
fn default_catalog_entries() -> u64 { 16 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_journeys_limit")]
    pub default_journeys_limit: usize,
    #[serde(default = "default_stories_limit")]
    pub default_stories_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_journeys_limit: default_journeys_limit(),
            default_stories_limit: default_stories_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_journeys_limit() -> usize { 3 }
fn default_stories_limit() -> usize { 4 }
fn default_max_limit() -> usize { 24 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_region_weight")]
    pub region: u32,
    #[serde(default = "default_tag_destination_weight")]
    pub tag_destination: u32,
    #[serde(default = "default_focus_tag_weight")]
    pub focus_tag: u32,
    #[serde(default = "default_focus_category_weight")]
    pub focus_category: u32,
    #[serde(default = "default_category_focus_weight")]
    pub category_focus: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            region: default_region_weight(),
            tag_destination: default_tag_destination_weight(),
            focus_tag: default_focus_tag_weight(),
            focus_category: default_focus_category_weight(),
            category_focus: default_category_focus_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            region: config.region,
            tag_destination: config.tag_destination,
            focus_tag: config.focus_tag,
            focus_category: config.focus_category,
            category_focus: config.category_focus,
        }
    }
}

fn default_region_weight() -> u32 { 10 }
fn default_tag_destination_weight() -> u32 { 5 }
fn default_focus_tag_weight() -> u32 { 3 }
fn default_focus_category_weight() -> u32 { 3 }
fn default_category_focus_weight() -> u32 { 5 }

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
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SLOWMO__)
    /// 5. SUPABASE_URL / SUPABASE_SERVICE_KEY / SUPABASE_ANON_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SLOWMO__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_supabase_env(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("SLOWMO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Overlay the conventional Supabase variables shared with the website
fn apply_supabase_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let url = env::var("SUPABASE_URL").ok();
    let api_key = env::var("SUPABASE_SERVICE_KEY")
        .or_else(|_| env::var("SUPABASE_ANON_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = url {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Some(api_key) = api_key {
        builder = builder.set_override("supabase.api_key", api_key)?;
    }

    builder.build()
}
