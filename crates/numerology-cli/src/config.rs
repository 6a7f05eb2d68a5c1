//! Configuration for the numerology CLI

use std::path::PathBuf;

use numerology_interpret::InterpreterConfig;
use serde::{Deserialize, Serialize};

/// Main CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Interpretation backend
    #[serde(default)]
    pub interpretation: InterpreterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report output
    #[serde(default)]
    pub report: ReportConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory manuscripts are written to when no output path is given
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl CliConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `NUMEROLOGY_*` environment variables (`__` separates sections, e.g.
    /// `NUMEROLOGY_INTERPRETATION__MODEL`). A missing API key is finally
    /// taken from `GEMINI_API_KEY`.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&CliConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("NUMEROLOGY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut loaded: CliConfig = builder.build()?.try_deserialize()?;
        loaded.interpretation = loaded.interpretation.with_env_fallback();
        Ok(loaded)
    }
}
