//! Configuration management for the responder
//!
//! Supports loading configuration from:
//! - YAML files under `config/`
//! - Environment variables (RESPONDER__ prefix)
//!
//! The rule set (keywords, reply templates, affirmative tokens) is a separate
//! [`DomainConfig`], built in or loaded from its own YAML/JSON file.

pub mod domain;
pub mod settings;
pub mod venasic;

pub use domain::{DomainConfig, KeywordTable, LanguagePack, ResponseTemplates};
pub use settings::{
    load_settings, DialogueConfig, GatewayConfig, ObservabilityConfig, RuntimeEnvironment,
    ServerConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<ConfigError> for responder_core::Error {
    fn from(err: ConfigError) -> Self {
        responder_core::Error::Config(err.to_string())
    }
}
