//! Scorecard manager
//!
//! Composes session, plan enforcement, and the record store:
//! - Creates sequentially named scorecards within the plan's count limit
//! - Saves and fetches records through the repository seam
//! - Mints share links for records when the plan allows sharing
//! - Tracks the session's download quota

use crate::error::ScorecardError;
use crate::scorecard::Scorecard;
use crate::session::Session;
use crate::store::ScorecardRepository;
use scorecard_types::{EditableList, ScorecardId};
use std::sync::Arc;

/// A session-local entry in the scorecard picker
///
/// Display names ("Scorecard 1", "Scorecard 2", ...) are not part of
/// the persisted record; they live only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorecardSummary {
    /// Record identifier
    pub id: ScorecardId,
    /// Session-local display name
    pub name: String,
}

/// Session-scoped scorecard operations
pub struct ScorecardManager {
    session: Session,
    store: Arc<dyn ScorecardRepository>,
    summaries: EditableList<ScorecardSummary>,
}

impl ScorecardManager {
    /// Create a manager for a session against a store
    #[must_use]
    pub fn new(session: Session, store: Arc<dyn ScorecardRepository>) -> Self {
        Self {
            session,
            store,
            summaries: EditableList::new(),
        }
    }

    /// The active session
    #[inline]
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Scorecards created this session, in creation order
    #[inline]
    #[must_use]
    pub fn scorecards(&self) -> &[ScorecardSummary] {
        self.summaries.items()
    }

    /// Create, store, and register a new scorecard
    ///
    /// # Errors
    /// - `ScorecardError::ScorecardLimitReached` when the plan's count
    ///   limit is hit
    pub async fn new_scorecard(&mut self) -> Result<Scorecard, ScorecardError> {
        let plan = self.session.plan();
        if let Some(max) = plan.max_scorecards {
            if self.summaries.len() >= max {
                tracing::warn!(max, "scorecard limit reached");
                return Err(ScorecardError::ScorecardLimitReached(max));
            }
        }

        let scorecard = Scorecard::new(self.session.user.name.clone());
        self.store.put(scorecard.clone()).await?;

        let name = format!("Scorecard {}", self.summaries.len() + 1);
        tracing::info!(id = %scorecard.id, %name, "scorecard created");
        self.summaries.push(ScorecardSummary {
            id: scorecard.id,
            name,
        });

        Ok(scorecard)
    }

    /// Save a scorecard, refreshing its last-save timestamp
    pub async fn save(&self, scorecard: &mut Scorecard) -> Result<(), ScorecardError> {
        scorecard.touch();
        self.store.put(scorecard.clone()).await
    }

    /// Fetch a scorecard by id
    ///
    /// # Errors
    /// - `ScorecardError::NotFound` if no record has this id
    pub async fn fetch(&self, id: ScorecardId) -> Result<Scorecard, ScorecardError> {
        self.store.get(id).await
    }

    /// Mint a share link for a record
    ///
    /// # Errors
    /// - `ScorecardError::SharingNotAllowed` when the plan forbids it
    pub fn share(&self, id: ScorecardId) -> Result<String, ScorecardError> {
        if !self.session.plan().can_share {
            return Err(ScorecardError::SharingNotAllowed);
        }
        let link = format!("/share/{id}");
        tracing::info!(%id, %link, "share link minted");
        Ok(link)
    }

    /// Consume one download from the session quota
    ///
    /// # Errors
    /// - `ScorecardError::DownloadsExhausted` when the quota is used up
    pub fn record_download(&mut self) -> Result<usize, ScorecardError> {
        self.session.record_download()
    }
}

impl std::fmt::Debug for ScorecardManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScorecardManager")
            .field("session", &self.session)
            .field("summaries", &self.summaries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn manager() -> ScorecardManager {
        let session = Session::log_in("john@example.com", "pw");
        ScorecardManager::new(session, Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn new_scorecards_are_named_sequentially() {
        let mut manager = manager();
        manager.new_scorecard().await.unwrap();
        manager.new_scorecard().await.unwrap();

        let names: Vec<&str> = manager.scorecards().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Scorecard 1", "Scorecard 2"]);
    }

    #[tokio::test]
    async fn free_plan_caps_scorecard_count() {
        let mut manager = manager();
        for _ in 0..3 {
            manager.new_scorecard().await.unwrap();
        }

        let result = manager.new_scorecard().await;
        assert!(matches!(
            result,
            Err(ScorecardError::ScorecardLimitReached(3))
        ));
        assert_eq!(manager.scorecards().len(), 3);
    }

    #[tokio::test]
    async fn share_link_contains_record_id() {
        let mut manager = manager();
        let scorecard = manager.new_scorecard().await.unwrap();

        let link = manager.share(scorecard.id).unwrap();
        assert_eq!(link, format!("/share/{}", scorecard.id));
    }

    #[tokio::test]
    async fn save_refreshes_updated_at() {
        let mut manager = manager();
        let mut scorecard = manager.new_scorecard().await.unwrap();
        let saved_at = scorecard.updated_at;

        scorecard.brand_profile.set_company_name("Acme Inc.");
        manager.save(&mut scorecard).await.unwrap();

        assert!(scorecard.updated_at >= saved_at);
        let fetched = manager.fetch(scorecard.id).await.unwrap();
        assert_eq!(fetched.brand_profile.company_name, "Acme Inc.");
    }
}
