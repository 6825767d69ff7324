//! The brand profile and its edit operations

use crate::enrich::EnrichmentData;
use crate::validate::is_valid_domain;
use serde::{Deserialize, Serialize};

/// Names the four editable tag lists on a profile
///
/// Fixed schema: callers address a list by variant, not by field-name
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileField {
    /// Team roster; also feeds initiative assignment
    Personnel,
    /// Customer segments
    Segments,
    /// Product catalog
    Products,
    /// Marketing channels; the allocation mapping tracks this list
    Channels,
}

/// Company identity, budget, and tag lists
///
/// Owned by the profile editor; the composing layer watches the channel
/// list and total budget and keeps the allocation mapping reconciled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    /// Company display name
    pub company_name: String,
    /// Company domain; advisory validation only
    pub domain_url: String,
    /// Uploaded logo as a data URL, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub logo: Option<String>,
    /// Total marketing budget shared by the mix and the benchmarks
    pub total_budget: f64,
    /// Team roster
    pub personnel: Vec<String>,
    /// Product catalog
    pub products: Vec<String>,
    /// Customer segments
    pub segments: Vec<String>,
    /// Marketing channels, in display order
    pub channels: Vec<String>,
}

impl BrandProfile {
    /// Create an empty profile
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With company name
    #[inline]
    #[must_use]
    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = name.into();
        self
    }

    /// With domain URL
    #[inline]
    #[must_use]
    pub fn with_domain_url(mut self, url: impl Into<String>) -> Self {
        self.domain_url = url.into();
        self
    }

    /// With total budget
    #[inline]
    #[must_use]
    pub fn with_total_budget(mut self, budget: f64) -> Self {
        self.total_budget = budget;
        self
    }

    /// With channel list
    #[inline]
    #[must_use]
    pub fn with_channels(mut self, channels: Vec<String>) -> Self {
        self.channels = channels;
        self
    }

    /// Set the company name
    #[inline]
    pub fn set_company_name(&mut self, name: impl Into<String>) {
        self.company_name = name.into();
    }

    /// Set the domain URL
    ///
    /// Invalid-looking domains are stored anyway; a warning event is
    /// emitted for the caller's notification surface.
    pub fn set_domain_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !url.is_empty() && !is_valid_domain(&url) {
            tracing::warn!(domain = %url, "domain URL does not look valid");
        }
        self.domain_url = url;
    }

    /// Set the uploaded logo (data URL)
    #[inline]
    pub fn set_logo(&mut self, logo: Option<String>) {
        self.logo = logo;
    }

    /// Set the total budget
    #[inline]
    pub fn set_total_budget(&mut self, budget: f64) {
        self.total_budget = budget;
    }

    /// Whether the stored domain passes the advisory pattern check
    #[must_use]
    pub fn has_valid_domain(&self) -> bool {
        is_valid_domain(&self.domain_url)
    }

    /// Append an item to the named list
    ///
    /// Input is trimmed; empty-after-trim input is ignored.
    pub fn add_item(&mut self, field: ProfileField, item: &str) {
        let trimmed = item.trim();
        if trimmed.is_empty() {
            return;
        }
        self.list_mut(field).push(trimmed.to_string());
    }

    /// Remove every occurrence of `item` from the named list
    ///
    /// An absent value is a silent no-op.
    pub fn remove_item(&mut self, field: ProfileField, item: &str) {
        self.list_mut(field).retain(|existing| existing != item);
    }

    /// View the named list
    #[must_use]
    pub fn list(&self, field: ProfileField) -> &[String] {
        match field {
            ProfileField::Personnel => &self.personnel,
            ProfileField::Segments => &self.segments,
            ProfileField::Products => &self.products,
            ProfileField::Channels => &self.channels,
        }
    }

    /// Merge an enrichment payload into the profile
    ///
    /// Each contributed list is unioned with the existing one,
    /// deduplicating while keeping first-occurrence order. Existing
    /// entries are never dropped or reordered.
    pub fn enrich(&mut self, data: EnrichmentData) {
        self.segments = union_dedupe(std::mem::take(&mut self.segments), data.segments);
        self.channels = union_dedupe(std::mem::take(&mut self.channels), data.channels);
        self.products = union_dedupe(std::mem::take(&mut self.products), data.products);
        tracing::debug!(
            segments = self.segments.len(),
            channels = self.channels.len(),
            products = self.products.len(),
            "profile enriched"
        );
    }

    fn list_mut(&mut self, field: ProfileField) -> &mut Vec<String> {
        match field {
            ProfileField::Personnel => &mut self.personnel,
            ProfileField::Segments => &mut self.segments,
            ProfileField::Products => &mut self.products,
            ProfileField::Channels => &mut self.channels,
        }
    }
}

// Set-union with first-occurrence order, existing entries first.
fn union_dedupe(existing: Vec<String>, incoming: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    existing
        .into_iter()
        .chain(incoming)
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
