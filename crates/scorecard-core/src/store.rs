//! Repository seam and the in-memory mock store
//!
//! A real deployment implements [`ScorecardRepository`] against durable
//! storage behind an API. [`InMemoryStore`] stands in for that route:
//! last-write-wins per id, no durability.

use crate::error::ScorecardError;
use crate::scorecard::Scorecard;
use async_trait::async_trait;
use dashmap::DashMap;
use scorecard_profile::BrandProfile;
use scorecard_types::ScorecardId;

/// Storage seam for scorecard records
#[async_trait]
pub trait ScorecardRepository: Send + Sync {
    /// Fetch a record by id
    ///
    /// # Errors
    /// - `ScorecardError::NotFound` if no record has this id
    async fn get(&self, id: ScorecardId) -> Result<Scorecard, ScorecardError>;

    /// Insert or replace a record
    async fn put(&self, scorecard: Scorecard) -> Result<(), ScorecardError>;

    /// Delete a record; absent ids are a no-op
    async fn remove(&self, id: ScorecardId) -> Result<(), ScorecardError>;
}

/// In-memory record store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: DashMap<ScorecardId, Scorecard>,
}

impl InMemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the sample record
    ///
    /// The seed mirrors the mock API payload: "Acme Inc.", a 1,000,000
    /// budget, and a two-channel mix.
    #[must_use]
    pub fn with_sample_record() -> (Self, ScorecardId) {
        let store = Self::new();
        let scorecard = sample_record();
        let id = scorecard.id;
        store.records.insert(id, scorecard);
        (store, id)
    }

    /// Number of stored records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ScorecardRepository for InMemoryStore {
    async fn get(&self, id: ScorecardId) -> Result<Scorecard, ScorecardError> {
        self.records
            .get(&id)
            .map(|record| record.clone())
            .ok_or_else(|| {
                tracing::warn!(%id, "scorecard not found");
                ScorecardError::NotFound(id)
            })
    }

    async fn put(&self, scorecard: Scorecard) -> Result<(), ScorecardError> {
        tracing::debug!(id = %scorecard.id, owner = %scorecard.owner_name, "scorecard stored");
        self.records.insert(scorecard.id, scorecard);
        Ok(())
    }

    async fn remove(&self, id: ScorecardId) -> Result<(), ScorecardError> {
        self.records.remove(&id);
        Ok(())
    }
}

// The mock payload the shared-scorecard route returns.
fn sample_record() -> Scorecard {
    let mut profile = BrandProfile::new()
        .with_company_name("Acme Inc.")
        .with_domain_url("https://acme.com")
        .with_total_budget(1_000_000.0)
        .with_channels(vec![
            "Social Media".to_string(),
            "Email Marketing".to_string(),
        ]);
    profile.personnel = vec!["John Doe".to_string(), "Jane Smith".to_string()];
    profile.products = vec!["Product A".to_string(), "Product B".to_string()];
    profile.segments = vec!["Segment 1".to_string(), "Segment 2".to_string()];

    Scorecard::new("John Doe").with_profile(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_and_get() {
        let store = InMemoryStore::new();
        let scorecard = Scorecard::new("John Doe");
        let id = scorecard.id;

        store.put(scorecard.clone()).await.unwrap();
        let fetched = store.get(id).await.unwrap();
        assert_eq!(fetched, scorecard);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = InMemoryStore::new();
        let id = ScorecardId::new();

        let result = store.get(id).await;
        assert!(matches!(result, Err(ScorecardError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn put_replaces_existing() {
        let store = InMemoryStore::new();
        let mut scorecard = Scorecard::new("John Doe");
        store.put(scorecard.clone()).await.unwrap();

        scorecard.brand_profile.set_company_name("Acme Inc.");
        store.put(scorecard.clone()).await.unwrap();

        let fetched = store.get(scorecard.id).await.unwrap();
        assert_eq!(fetched.brand_profile.company_name, "Acme Inc.");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = InMemoryStore::new();
        let scorecard = Scorecard::new("John Doe");
        let id = scorecard.id;
        store.put(scorecard).await.unwrap();

        store.remove(id).await.unwrap();
        store.remove(id).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn sample_record_matches_mock_payload() {
        let (store, id) = InMemoryStore::with_sample_record();
        let scorecard = store.get(id).await.unwrap();

        assert_eq!(scorecard.owner_name, "John Doe");
        assert_eq!(scorecard.brand_profile.company_name, "Acme Inc.");
        assert_eq!(scorecard.brand_profile.total_budget, 1_000_000.0);
        assert_eq!(
            scorecard.marketing_mix.channels().collect::<Vec<_>>(),
            vec!["Social Media", "Email Marketing"]
        );
    }
}
