//! Response catalog
//!
//! Per language, the reply candidates for each [`ReplyKey`]. Random sets go
//! through the injected [`ReplyChooser`]; single templates are returned as-is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use responder_config::{DomainConfig, ResponseTemplates};
use responder_core::{Language, ReplyChooser};

/// Which reply to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKey {
    Greeting,
    Identity,
    /// "I'm fine. How about you?"
    WellbeingAck,
    /// Asks whether the user wants service details
    ServiceOffer,
    /// Full service details template
    ServiceDetails,
    Price,
    Services,
    Website,
    Contact,
    Fallback,
}

impl ReplyKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Identity => "identity",
            Self::WellbeingAck => "wellbeing_ack",
            Self::ServiceOffer => "service_offer",
            Self::ServiceDetails => "service_details",
            Self::Price => "price",
            Self::Services => "services",
            Self::Website => "website",
            Self::Contact => "contact",
            Self::Fallback => "fallback",
        }
    }

    /// Keys backed by a random set rather than one canonical template
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            Self::Greeting | Self::Identity | Self::Price | Self::Fallback
        )
    }
}

impl std::fmt::Display for ReplyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reply templates per language
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    templates: HashMap<Language, ResponseTemplates>,
}

impl ResponseCatalog {
    pub fn new(config: &DomainConfig) -> Self {
        let templates = Language::all()
            .iter()
            .map(|&language| (language, config.pack(language).responses.clone()))
            .collect();
        Self { templates }
    }

    /// All candidates for `(language, key)`; single-template keys yield one
    pub fn candidates(&self, language: Language, key: ReplyKey) -> Vec<&str> {
        let Some(t) = self.templates.get(&language) else {
            return Vec::new();
        };
        match key {
            ReplyKey::Greeting => set(&t.greetings),
            ReplyKey::Identity => set(&t.identity),
            ReplyKey::Price => set(&t.prices),
            ReplyKey::Fallback => set(&t.fallbacks),
            ReplyKey::WellbeingAck => vec![t.wellbeing_ack.as_str()],
            ReplyKey::ServiceOffer => vec![t.service_offer.as_str()],
            ReplyKey::ServiceDetails => vec![t.service_details.as_str()],
            ReplyKey::Services => vec![t.services.as_str()],
            ReplyKey::Website => vec![t.website.as_str()],
            ReplyKey::Contact => vec![t.contact.as_str()],
        }
    }

    /// Pick the reply for `(language, key)`
    ///
    /// Single-template keys never consult the chooser. An empty set (only
    /// possible with an unvalidated rule set) yields an empty string.
    pub fn select(&self, language: Language, key: ReplyKey, chooser: &dyn ReplyChooser) -> String {
        let candidates = self.candidates(language, key);
        let index = if key.is_random() && candidates.len() > 1 {
            chooser.choose(candidates.len()).min(candidates.len() - 1)
        } else {
            0
        };
        candidates
            .get(index)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

fn set(v: &[String]) -> Vec<&str> {
    v.iter().map(String::as_str).collect()
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::new(&DomainConfig::builtin())
    }
}
