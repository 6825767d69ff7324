//! The scorecard record
//!
//! The persisted unit: profile, allocation mapping, and benchmark board
//! under one id. The record owns the cross-model invariants: the mix
//! tracks the profile's channel list, and budget changes re-derive
//! every dependent amount in both the mix and the benchmarks.

use chrono::{DateTime, Utc};
use scorecard_benchmarks::BenchmarkBoard;
use scorecard_mix::MarketingMix;
use scorecard_profile::{BrandProfile, ProfileField};
use scorecard_types::ScorecardId;
use serde::{Deserialize, Serialize};

/// One scorecard record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// Record identifier
    pub id: ScorecardId,
    /// Display name of the record owner
    pub owner_name: String,
    /// Company identity, budget, and tag lists
    pub brand_profile: BrandProfile,
    /// Per-channel budget allocation
    pub marketing_mix: MarketingMix,
    /// Goal trackers
    pub benchmarks: BenchmarkBoard,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last save time
    pub updated_at: DateTime<Utc>,
}

impl Scorecard {
    /// Create an empty scorecard owned by `owner_name`
    #[must_use]
    pub fn new(owner_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ScorecardId::new(),
            owner_name: owner_name.into(),
            brand_profile: BrandProfile::new(),
            marketing_mix: MarketingMix::default(),
            benchmarks: BenchmarkBoard::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// With a prepared profile; the mix is initialized from its channels
    #[must_use]
    pub fn with_profile(mut self, profile: BrandProfile) -> Self {
        self.marketing_mix =
            MarketingMix::initialize(&profile.channels, profile.total_budget);
        self.brand_profile = profile;
        self
    }

    /// Replace the channel list and reconcile the mix against it
    pub fn set_channels(&mut self, channels: Vec<String>) {
        self.brand_profile.channels = channels;
        self.sync_mix();
    }

    /// Add one channel and reconcile the mix
    pub fn add_channel(&mut self, channel: &str) {
        self.brand_profile.add_item(ProfileField::Channels, channel);
        self.sync_mix();
    }

    /// Remove one channel and reconcile the mix
    pub fn remove_channel(&mut self, channel: &str) {
        self.brand_profile.remove_item(ProfileField::Channels, channel);
        self.sync_mix();
    }

    /// Change the total budget, re-deriving every dependent amount
    ///
    /// Mix amounts and initiative budget shares both track the shared
    /// budget; percentages and costs are untouched.
    pub fn set_total_budget(&mut self, budget: f64) {
        self.brand_profile.total_budget = budget;
        self.marketing_mix = std::mem::take(&mut self.marketing_mix).rescale_for_budget(budget);
        self.benchmarks = std::mem::take(&mut self.benchmarks).rescale_for_budget(budget);
    }

    /// Set one channel's allocation percentage against the record budget
    pub fn set_channel_percentage(&mut self, channel: &str, raw_value: f64) {
        self.marketing_mix = std::mem::take(&mut self.marketing_mix).set_percentage(
            channel,
            raw_value,
            self.brand_profile.total_budget,
        );
    }

    /// Re-align the mix with the profile's current channel list
    ///
    /// Idempotent; called after any channel-list edit.
    pub fn sync_mix(&mut self) {
        self.marketing_mix =
            std::mem::take(&mut self.marketing_mix).reconcile(&self.brand_profile.channels);
    }

    /// Refresh the last-save timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
