//! Startup configuration read from the environment.

use stockroom_observability::{LogFormat, ObservabilityConfig};

pub const ENV_SEED: &str = "STOCKROOM_SEED";
pub const ENV_CURRENCY: &str = "STOCKROOM_CURRENCY";
pub const ENV_LOG: &str = "STOCKROOM_LOG";
pub const ENV_LOG_FORMAT: &str = "STOCKROOM_LOG_FORMAT";

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Load the sample catalog at startup.
    pub seed: bool,
    /// Prefix of the price column.
    pub currency: String,
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: true,
            currency: "$".to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    ///
    /// Returns warnings for values that were ignored; they are meant to be logged
    /// once tracing is up.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup(ENV_SEED) {
            match parse_bool(&raw) {
                Some(seed) => config.seed = seed,
                None => warnings.push(format!(
                    "{ENV_SEED}=`{raw}` is not a boolean; using {}",
                    config.seed
                )),
            }
        }

        if let Some(raw) = lookup(ENV_CURRENCY) {
            config.currency = raw;
        }

        if let Some(raw) = lookup(ENV_LOG) {
            if raw.trim().is_empty() {
                warnings.push(format!(
                    "{ENV_LOG} is empty; using `{}`",
                    config.observability.default_filter
                ));
            } else {
                config.observability.default_filter = raw.trim().to_string();
            }
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            match LogFormat::parse(&raw) {
                Some(format) => config.observability.format = format,
                None => warnings.push(format!(
                    "{ENV_LOG_FORMAT}=`{raw}` is not one of text|json; using text"
                )),
            }
        }

        (config, warnings)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
