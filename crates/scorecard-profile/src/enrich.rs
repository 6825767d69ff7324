//! Channel suggestions and profile enrichment payloads
//!
//! A real deployment would source [`EnrichmentData`] from a brand
//! intelligence API keyed by the profile's domain. That integration is
//! out of scope; [`sample_enrichment`] stands in with fixed content.

use serde::{Deserialize, Serialize};

/// Canonical channel suggestions offered by the channel combobox
pub const CHANNEL_SUGGESTIONS: [&str; 10] = [
    "Digital Advertising",
    "Digital Publishing",
    "Event Activations",
    "News, Press, Media",
    "Outbound Sales",
    "Print Advertising",
    "Referrals & Partnerships",
    "Product Experience",
    "Retail",
    "Social Media",
];

/// Lists an enrichment source contributes to a profile
///
/// Merged into the profile with [`BrandProfile::enrich`], which unions
/// and deduplicates rather than overwriting.
///
/// [`BrandProfile::enrich`]: crate::BrandProfile::enrich
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentData {
    pub segments: Vec<String>,
    pub channels: Vec<String>,
    pub products: Vec<String>,
}

/// Stand-in enrichment payload used where a real API call would go
#[must_use]
pub fn sample_enrichment() -> EnrichmentData {
    EnrichmentData {
        segments: vec![
            "Small Businesses".to_string(),
            "Startups".to_string(),
            "Enterprise".to_string(),
        ],
        channels: vec![
            "Social Media".to_string(),
            "Content Marketing".to_string(),
            "Email Marketing".to_string(),
        ],
        products: vec![
            "CRM Software".to_string(),
            "Marketing Automation".to_string(),
            "Analytics Tool".to_string(),
        ],
    }
}
