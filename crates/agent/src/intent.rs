//! Keyword intent matching
//!
//! Case-insensitive substring containment against the triggers of a
//! [`DomainConfig`]. Not tokenized: a trigger inside a longer word still matches
//! ("hi" in "this", "web" in "website").

use std::collections::HashMap;

use responder_config::DomainConfig;
use responder_core::{IntentCategory, Language};

/// Lower-cased triggers for one language
#[derive(Debug, Clone, Default)]
struct CompiledPack {
    triggers: HashMap<IntentCategory, Vec<String>>,
    affirmative: String,
}

/// Intent matcher
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    packs: HashMap<Language, CompiledPack>,
}

impl IntentMatcher {
    /// Build from a domain rule set; triggers are lower-cased once here
    pub fn new(config: &DomainConfig) -> Self {
        let mut packs = HashMap::new();

        for &language in Language::all() {
            let pack = config.pack(language);
            let triggers = IntentCategory::all()
                .iter()
                .map(|&category| {
                    let phrases = pack
                        .keywords
                        .triggers(category)
                        .iter()
                        .map(|t| t.to_lowercase())
                        .filter(|t| !t.is_empty())
                        .collect();
                    (category, phrases)
                })
                .collect();

            packs.insert(
                language,
                CompiledPack {
                    triggers,
                    affirmative: pack.affirmative_token.to_lowercase(),
                },
            );
        }

        tracing::debug!(languages = packs.len(), "Compiled intent triggers");

        Self { packs }
    }

    /// True iff `text` contains at least one trigger of `(language, category)`
    pub fn matches(&self, text: &str, language: Language, category: IntentCategory) -> bool {
        let text = text.to_lowercase();
        self.triggers(language, category)
            .iter()
            .any(|trigger| text.contains(trigger.as_str()))
    }

    /// Every category with a hit, in declaration order
    pub fn matched_categories(&self, text: &str, language: Language) -> Vec<IntentCategory> {
        IntentCategory::all()
            .iter()
            .copied()
            .filter(|&category| self.matches(text, language, category))
            .collect()
    }

    /// Whether `text` contains the affirmative token ("yes") of `language`
    pub fn is_affirmative(&self, text: &str, language: Language) -> bool {
        match self.packs.get(&language) {
            Some(pack) if !pack.affirmative.is_empty() => {
                text.to_lowercase().contains(pack.affirmative.as_str())
            }
            _ => false,
        }
    }

    /// Triggers registered for `(language, category)`
    pub fn triggers(&self, language: Language, category: IntentCategory) -> &[String] {
        self.packs
            .get(&language)
            .and_then(|pack| pack.triggers.get(&category))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new(&DomainConfig::builtin())
    }
}
