//! Intent categories recognised by keyword matching

use serde::{Deserialize, Serialize};

/// Semantic bucket of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Greeting,
    Identity,
    /// "how are you"
    Wellbeing,
    /// Positive answer to our own "how about you?"
    WellbeingAffirmative,
    PriceInquiry,
    ServicesInquiry,
    WebsiteInquiry,
    ContactInquiry,
}

impl IntentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Identity => "identity",
            Self::Wellbeing => "wellbeing",
            Self::WellbeingAffirmative => "wellbeing_affirmative",
            Self::PriceInquiry => "price_inquiry",
            Self::ServicesInquiry => "services_inquiry",
            Self::WebsiteInquiry => "website_inquiry",
            Self::ContactInquiry => "contact_inquiry",
        }
    }

    /// Get all categories
    pub fn all() -> &'static [IntentCategory] {
        &[
            Self::Greeting,
            Self::Identity,
            Self::Wellbeing,
            Self::WellbeingAffirmative,
            Self::PriceInquiry,
            Self::ServicesInquiry,
            Self::WebsiteInquiry,
            Self::ContactInquiry,
        ]
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
