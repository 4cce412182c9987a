//! Domain rule-set configuration
//!
//! Keyword triggers, reply templates and the affirmative token for every
//! supported language. The built-in tables live in [`crate::venasic`]; a YAML or
//! JSON file with the same shape can replace them at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use responder_core::{IntentCategory, Language};

use crate::ConfigError;

/// Complete rule set for one deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Domain name
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Domain version
    #[serde(default = "default_version")]
    pub version: String,
    /// Primary language tables
    pub english: LanguagePack,
    /// Secondary language tables
    pub sinhala: LanguagePack,
}

fn default_domain() -> String {
    "venasic".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Everything the engine needs for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagePack {
    /// Token that confirms the service-details offer ("yes")
    pub affirmative_token: String,
    /// Trigger phrases per intent category
    pub keywords: KeywordTable,
    /// Reply templates
    pub responses: ResponseTemplates,
}

/// Trigger phrases per intent category (case-insensitive substrings)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTable {
    pub greeting: Vec<String>,
    pub identity: Vec<String>,
    pub wellbeing: Vec<String>,
    pub wellbeing_affirmative: Vec<String>,
    pub price: Vec<String>,
    pub services: Vec<String>,
    pub website: Vec<String>,
    pub contact: Vec<String>,
}

impl KeywordTable {
    /// Triggers registered for a category
    pub fn triggers(&self, category: IntentCategory) -> &[String] {
        match category {
            IntentCategory::Greeting => &self.greeting,
            IntentCategory::Identity => &self.identity,
            IntentCategory::Wellbeing => &self.wellbeing,
            IntentCategory::WellbeingAffirmative => &self.wellbeing_affirmative,
            IntentCategory::PriceInquiry => &self.price,
            IntentCategory::ServicesInquiry => &self.services,
            IntentCategory::WebsiteInquiry => &self.website,
            IntentCategory::ContactInquiry => &self.contact,
        }
    }
}

/// Reply templates for one language
///
/// Random sets are `Vec`s; single canonical templates are plain strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTemplates {
    pub greetings: Vec<String>,
    pub identity: Vec<String>,
    /// "I'm fine. How about you?"
    pub wellbeing_ack: String,
    /// Asks whether the user wants service details
    pub service_offer: String,
    /// Full service details, sent after the user confirms
    pub service_details: String,
    pub prices: Vec<String>,
    pub services: String,
    pub website: String,
    pub contact: String,
    pub fallbacks: Vec<String>,
}

impl DomainConfig {
    /// The VENASIC English/Sinhala rule set
    pub fn builtin() -> Self {
        Self {
            domain: default_domain(),
            version: default_version(),
            english: crate::venasic::english(),
            sinhala: crate::venasic::sinhala(),
        }
    }

    /// Tables for a language
    pub fn pack(&self, language: Language) -> &LanguagePack {
        match language {
            Language::English => &self.english,
            Language::Sinhala => &self.sinhala,
        }
    }

    /// Load from a YAML (`.yaml`/`.yml`) or JSON file and validate
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();
        let config = if path_str.ends_with(".yaml") || path_str.ends_with(".yml") {
            Self::from_yaml_file(path)?
        } else {
            Self::from_json_file(path)?
        };

        config.validate().map_err(|errors| ConfigError::InvalidValue {
            field: "domain".to_string(),
            message: errors.join("; "),
        })?;

        tracing::info!(
            domain = %config.domain,
            version = %config.version,
            path = %path.display(),
            "Loaded domain configuration"
        );

        Ok(config)
    }

    /// Load from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load from JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save to YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validate configuration
    ///
    /// Every category needs at least one trigger, an empty trigger would match
    /// every message, and every reply set must be non-empty so selection is total.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for &language in Language::all() {
            let pack = self.pack(language);
            let code = language.code();

            if pack.affirmative_token.trim().is_empty() {
                errors.push(format!("{code}.affirmative_token must not be empty"));
            }

            for &category in IntentCategory::all() {
                let triggers = pack.keywords.triggers(category);
                if triggers.is_empty() {
                    errors.push(format!("{code}.keywords.{category}: at least one trigger required"));
                }
                if triggers.iter().any(|t| t.trim().is_empty()) {
                    errors.push(format!("{code}.keywords.{category}: empty trigger"));
                }
            }

            let r = &pack.responses;
            let sets = [
                ("greetings", r.greetings.as_slice()),
                ("identity", r.identity.as_slice()),
                ("prices", r.prices.as_slice()),
                ("fallbacks", r.fallbacks.as_slice()),
            ];
            for (name, set) in sets {
                if set.is_empty() {
                    errors.push(format!("{code}.responses.{name}: at least one reply required"));
                }
            }

            let singles = [
                ("wellbeing_ack", &r.wellbeing_ack),
                ("service_offer", &r.service_offer),
                ("service_details", &r.service_details),
                ("services", &r.services),
                ("website", &r.website),
                ("contact", &r.contact),
            ];
            for (name, template) in singles {
                if template.trim().is_empty() {
                    errors.push(format!("{code}.responses.{name} must not be empty"));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_is_valid() {
        let config = DomainConfig::builtin();
        assert!(config.validate().is_ok());
        assert_eq!(config.domain, "venasic");
    }

    #[test]
    fn test_pack_per_language() {
        let config = DomainConfig::builtin();
        assert_eq!(config.pack(Language::English).affirmative_token, "yes");
        assert_eq!(config.pack(Language::Sinhala).affirmative_token, "ඔව්");
    }

    #[test]
    fn test_validate_rejects_empty_sets() {
        let mut config = DomainConfig::builtin();
        config.english.responses.fallbacks.clear();
        config.sinhala.keywords.price.push("  ".to_string());
        config.sinhala.keywords.contact.clear();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("en.responses.fallbacks")));
        assert!(errors.iter().any(|e| e.contains("si.keywords.price_inquiry: empty trigger")));
        assert!(errors.iter().any(|e| e.contains("si.keywords.contact_inquiry")));
    }

    #[test]
    fn test_yaml_roundtrip_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("domain.yaml");

        let mut config = DomainConfig::builtin();
        config.english.responses.greetings = vec!["Hi from a file".to_string()];
        config.to_yaml_file(&path).unwrap();

        let loaded = DomainConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("domain.yml");

        let mut config = DomainConfig::builtin();
        config.sinhala.affirmative_token = String::new();
        config.to_yaml_file(&path).unwrap();

        match DomainConfig::load(&path) {
            Err(ConfigError::InvalidValue { field, message }) => {
                assert_eq!(field, "domain");
                assert!(message.contains("si.affirmative_token"));
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = DomainConfig::load("/nonexistent/domain.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("domain.json");
        let config = DomainConfig::builtin();
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = DomainConfig::load(&path).unwrap();
        assert_eq!(loaded.sinhala, config.sinhala);
    }
}
