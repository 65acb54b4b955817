use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::Level;
use crate::core::library::{LibraryError, LibraryResult, OutputFormat};

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable {
    fn id(&self) -> String;
}

pub const ENV_BRANCH: &str = "LMS_BRANCH";
pub const ENV_LOG_LEVEL: &str = "LMS_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LMS_LOG_FORMAT";
pub const ENV_OUTPUT: &str = "LMS_OUTPUT";

// Configuration abstracts config options for the library demos
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub log_level: String,
    pub log_format: OutputFormat,
    pub output_format: OutputFormat,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            log_level: "warn".to_string(),
            log_format: OutputFormat::Text,
            output_format: OutputFormat::Text,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Builds configuration from any key lookup; unset or unusable values keep the defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(
            lookup(ENV_BRANCH).as_deref().unwrap_or("dev"));
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            if parse_level(&level).is_ok() {
                config.log_level = level;
            }
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.log_format = OutputFormat::from(format);
        }
        if let Some(format) = lookup(ENV_OUTPUT) {
            config.output_format = OutputFormat::from(format);
        }
        config
    }

    pub fn max_level(&self) -> LibraryResult<Level> {
        parse_level(&self.log_level)
    }
}

fn parse_level(level: &str) -> LibraryResult<Level> {
    Level::from_str(level).map_err(|err| LibraryError::validation(
        format!("invalid log level {:?}", level).as_str(), Some(err.to_string())))
}
