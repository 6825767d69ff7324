//! The channel → allocation mapping and its operations
//!
//! Owns the per-channel allocation set exclusively; collaborators only
//! read snapshots and issue single-field edits. Operations are pure
//! transformations: each consumes the mapping and returns the next
//! value, so an edit can never be applied against a stale copy without
//! the caller explicitly cloning one.

use crate::allocation::Allocation;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-channel budget allocation mapping
///
/// Keys are channel names, unique within the active channel set; entry
/// order is display order. The mapping tracks exactly the channels the
/// profile currently lists; [`MarketingMix::reconcile`] re-aligns it
/// after any channel-list edit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketingMix {
    entries: IndexMap<String, Allocation>,
}

impl MarketingMix {
    /// Create one zeroed entry per channel
    ///
    /// An empty channel list yields an empty mapping. That is a defined
    /// empty state (the caller renders a "no channels" notice), not an
    /// error.
    #[must_use]
    pub fn initialize<S: AsRef<str>>(channels: &[S], total_budget: f64) -> Self {
        let entries = channels
            .iter()
            .map(|channel| {
                (
                    channel.as_ref().to_string(),
                    Allocation::from_percentage(0.0, total_budget),
                )
            })
            .collect();
        Self { entries }
    }

    /// Align the mapping with the latest channel list
    ///
    /// Returns a mapping containing exactly the channels in `channels`:
    /// surviving entries keep their percentage and amount, new channels
    /// start zeroed, removed channels are dropped. Idempotent.
    #[must_use]
    pub fn reconcile<S: AsRef<str>>(self, channels: &[S]) -> Self {
        let mut old = self.entries;
        let entries = channels
            .iter()
            .map(|channel| {
                let name = channel.as_ref();
                let allocation = old.swap_remove(name).unwrap_or_else(Allocation::zero);
                (name.to_string(), allocation)
            })
            .collect();
        Self { entries }
    }

    /// Set one channel's percentage, re-deriving its amount
    ///
    /// `raw_value` is clamped into `[0, 100]`. Other entries are
    /// untouched. A channel not present in the mapping is a silent
    /// no-op: stale references can occur while the channel list is
    /// being edited and must not fail the edit stream.
    #[must_use]
    pub fn set_percentage(mut self, channel: &str, raw_value: f64, total_budget: f64) -> Self {
        if let Some(entry) = self.entries.get_mut(channel) {
            *entry = Allocation::from_percentage(raw_value, total_budget);
        }
        self
    }

    /// Re-derive every amount for a new total budget
    ///
    /// Percentages are untouched; changing the budget alone still moves
    /// every amount.
    #[must_use]
    pub fn rescale_for_budget(mut self, new_total_budget: f64) -> Self {
        for entry in self.entries.values_mut() {
            *entry = entry.rescaled(new_total_budget);
        }
        self
    }

    /// Sum of all percentage shares
    #[must_use]
    pub fn total_percentage(&self) -> f64 {
        self.entries.values().map(|a| a.percentage).sum()
    }

    /// Whether the allocation reconciles to exactly 100%
    ///
    /// The total is rounded to two decimal places before comparing, so
    /// decimal entry like 33.33 + 33.33 + 33.34 counts as complete
    /// instead of tripping on float drift.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        (self.total_percentage() * 100.0).round() == 10_000.0
    }

    /// Entries with a nonzero share, in display order
    ///
    /// This is the proportional-chart feed: zero-percent channels are
    /// omitted from the chart but stay in the table.
    #[must_use]
    pub fn chart_slices(&self) -> Vec<ChartSlice> {
        self.entries
            .iter()
            .filter(|(_, allocation)| allocation.percentage > 0.0)
            .map(|(channel, allocation)| ChartSlice {
                channel: channel.clone(),
                percentage: allocation.percentage,
            })
            .collect()
    }

    /// Full read-only snapshot for the presentation layer
    #[must_use]
    pub fn snapshot(&self) -> MixSnapshot {
        MixSnapshot {
            entries: self.entries.clone(),
            total_percentage: self.total_percentage(),
            complete: self.is_complete(),
        }
    }

    /// Look up one channel's allocation
    #[inline]
    #[must_use]
    pub fn get(&self, channel: &str) -> Option<&Allocation> {
        self.entries.get(channel)
    }

    /// Channel names in display order
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Allocation)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of tracked channels
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no channels are tracked
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One proportional-chart slice: a channel and its nonzero share
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    /// Channel name
    pub channel: String,
    /// Percentage share, strictly positive
    pub percentage: f64,
}

/// Read-only mapping snapshot with the aggregate checks pre-computed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixSnapshot {
    /// Per-channel allocations in display order
    pub entries: IndexMap<String, Allocation>,
    /// Sum of all percentage shares
    pub total_percentage: f64,
    /// Whether the allocation reconciles to 100%
    pub complete: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn initialize_zeroes_every_channel() {
        let mix = MarketingMix::initialize(&channels(&["Social Media", "SEO"]), 50_000.0);

        assert_eq!(mix.len(), 2);
        for (_, allocation) in mix.iter() {
            assert_eq!(allocation.percentage, 0.0);
            assert_eq!(allocation.amount, 0.0);
        }
    }

    #[test]
    fn initialize_empty_channel_list() {
        let mix = MarketingMix::initialize::<String>(&[], 1000.0);
        assert!(mix.is_empty());
    }

    #[test]
    fn set_percentage_derives_amount() {
        let mix = MarketingMix::initialize(&channels(&["SEO"]), 2000.0)
            .set_percentage("SEO", 25.0, 2000.0);

        assert_eq!(mix.get("SEO").unwrap().amount, 500.0);
    }

    #[test]
    fn set_percentage_stale_key_is_noop() {
        let mix = MarketingMix::initialize(&channels(&["SEO"]), 1000.0);
        let before = mix.clone();

        let after = mix.set_percentage("Nonexistent Channel", 50.0, 1000.0);
        assert_eq!(after, before);
    }

    #[test]
    fn set_percentage_touches_one_entry_only() {
        let mix = MarketingMix::initialize(&channels(&["A", "B"]), 1000.0)
            .set_percentage("A", 30.0, 1000.0)
            .set_percentage("B", 70.0, 1000.0)
            .set_percentage("A", 10.0, 1000.0);

        assert_eq!(mix.get("A").unwrap().percentage, 10.0);
        assert_eq!(mix.get("B").unwrap().percentage, 70.0);
    }

    #[test]
    fn reconcile_preserves_and_drops() {
        let mix = MarketingMix::initialize(&channels(&["A", "B"]), 1000.0)
            .set_percentage("A", 40.0, 1000.0)
            .reconcile(&channels(&["A", "C"]));

        assert_eq!(mix.channels().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(mix.get("A").unwrap().percentage, 40.0);
        assert_eq!(mix.get("C").unwrap().percentage, 0.0);
        assert!(mix.get("B").is_none());
    }

    #[test]
    fn reconcile_keeps_display_order() {
        let mix = MarketingMix::initialize(&channels(&["A", "B"]), 1000.0)
            .reconcile(&channels(&["B", "Z", "A"]));

        assert_eq!(mix.channels().collect::<Vec<_>>(), vec!["B", "Z", "A"]);
    }

    #[test]
    fn rescale_moves_every_amount() {
        let mix = MarketingMix::initialize(&channels(&["Email"]), 1000.0)
            .set_percentage("Email", 40.0, 1000.0)
            .rescale_for_budget(2000.0);

        let allocation = mix.get("Email").unwrap();
        assert_eq!(allocation.percentage, 40.0);
        assert_eq!(allocation.amount, 800.0);
    }

    #[test]
    fn completeness_at_exactly_100() {
        let mix = MarketingMix::initialize(&channels(&["A", "B"]), 1000.0)
            .set_percentage("A", 60.0, 1000.0)
            .set_percentage("B", 40.0, 1000.0);

        assert!(mix.is_complete());
        assert_eq!(mix.total_percentage(), 100.0);
    }

    #[test]
    fn completeness_under_allocation() {
        let mix = MarketingMix::initialize(&channels(&["A", "B"]), 1000.0)
            .set_percentage("A", 60.0, 1000.0)
            .set_percentage("B", 30.0, 1000.0);

        assert!(!mix.is_complete());
        assert_eq!(mix.total_percentage(), 90.0);
    }

    #[test]
    fn completeness_tolerates_decimal_entry() {
        let mix = MarketingMix::initialize(&channels(&["A", "B", "C"]), 1000.0)
            .set_percentage("A", 33.33, 1000.0)
            .set_percentage("B", 33.33, 1000.0)
            .set_percentage("C", 33.34, 1000.0);

        assert!(mix.is_complete());
    }

    #[test]
    fn chart_slices_skip_zero_entries() {
        let mix = MarketingMix::initialize(&channels(&["A", "B", "C"]), 1000.0)
            .set_percentage("B", 55.0, 1000.0);

        let slices = mix.chart_slices();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].channel, "B");
        assert_eq!(slices[0].percentage, 55.0);
    }

    #[test]
    fn snapshot_reports_aggregates() {
        let mix = MarketingMix::initialize(&channels(&["A"]), 1000.0)
            .set_percentage("A", 100.0, 1000.0);

        let snapshot = mix.snapshot();
        assert_eq!(snapshot.total_percentage, 100.0);
        assert!(snapshot.complete);
        assert_eq!(snapshot.entries.len(), 1);
    }

    #[test]
    fn serializes_as_plain_mapping() {
        let mix = MarketingMix::initialize(&channels(&["SEO"]), 2000.0)
            .set_percentage("SEO", 25.0, 2000.0);

        let json = serde_json::to_value(&mix).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"SEO": {"percentage": 25.0, "amount": 500.0}})
        );
    }
}
