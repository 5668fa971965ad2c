//! Nursing Notes Assistant core library
//!
//! Collects a doctor's order note, wraps it in the nursing-documentation
//! prompt, sends it to the generation service and renders the result.

pub mod api;
pub mod core;
pub mod error;
pub mod models;
pub mod telemetry;

/// Application configuration
pub mod config {
    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        pub server: ServerConfig,
        pub generation: GenerationConfig,
        #[serde(default)]
        pub logging: LoggingConfig,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GenerationConfig {
        /// Base of an OpenAI-compatible API, e.g. `https://api.openai.com/v1`.
        pub base_url: String,
        pub model: String,
        pub temperature: f32,
        pub timeout_secs: u64,
        #[serde(default)]
        pub api_key: Option<String>,
    }

    impl GenerationConfig {
        /// Configured key, falling back to `OPENAI_API_KEY`. Blank values count as missing.
        pub fn credential(&self) -> Option<String> {
            self.api_key
                .clone()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                .map(|key| key.trim().to_string())
                .filter(|key| !key.is_empty())
        }
    }

    #[derive(Debug, Clone, Default, Deserialize)]
    pub struct LoggingConfig {
        #[serde(default)]
        pub json: bool,
    }

    /// Load configuration from `config/`
    pub fn load_config() -> Result<Config, ::config::ConfigError> {
        load_config_from("config")
    }

    /// Load configuration from the given directory
    pub fn load_config_from(dir: &str) -> Result<Config, ::config::ConfigError> {
        let env = std::env::var("NOAH_ENV").unwrap_or_else(|_| "development".into());

        let settings = ::config::Config::builder()
            // Built-in defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("generation.base_url", "https://api.openai.com/v1")?
            .set_default("generation.model", "gpt-4.1")?
            .set_default("generation.temperature", 0.7)?
            .set_default("generation.timeout_secs", 60)?
            // Shared settings, then environment-specific overrides
            .add_source(::config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(::config::File::with_name(&format!("{}/{}", dir, env)).required(false))
            // NOAH_GENERATION__MODEL=... etc.
            .add_source(::config::Environment::with_prefix("NOAH").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;

        url::Url::parse(&config.generation.base_url).map_err(|e| {
            ::config::ConfigError::Message(format!(
                "generation.base_url {:?} is not a valid URL: {}",
                config.generation.base_url, e
            ))
        })?;
        if config.generation.timeout_secs == 0 {
            return Err(::config::ConfigError::Message(
                "generation.timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(config)
    }

}
