//! A benchmark: a named goal with metric, baseline, target and
//! initiative table

use crate::id::BenchmarkId;
use crate::initiative::Initiative;
use serde::{Deserialize, Serialize};

/// A tracked goal
///
/// `benchmark` is the baseline value of the metric; `goal` is the
/// target. Both are free-form strings as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    /// Benchmark identifier
    pub id: BenchmarkId,
    /// Goal title
    pub title: String,
    /// Target timeline (e.g. "2026 Q1")
    pub timeline: String,
    /// Name of the tracked metric
    pub metric_name: String,
    /// Baseline value of the metric
    pub benchmark: String,
    /// Target value of the metric
    pub goal: String,
    /// Whether the detail section is expanded
    pub expanded: bool,
    /// Free-form notes
    pub notes: String,
    /// Nested action items
    pub initiatives: Vec<Initiative>,
}

impl Benchmark {
    /// Create a fresh expanded benchmark with the default title
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: BenchmarkId::new(),
            title: "New Benchmark".to_string(),
            timeline: String::new(),
            metric_name: String::new(),
            benchmark: String::new(),
            goal: String::new(),
            expanded: true,
            notes: String::new(),
            initiatives: Vec::new(),
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With timeline
    #[inline]
    #[must_use]
    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = timeline.into();
        self
    }

    /// With metric name
    #[inline]
    #[must_use]
    pub fn with_metric(mut self, metric_name: impl Into<String>) -> Self {
        self.metric_name = metric_name.into();
        self
    }

    /// Look up an initiative by id
    #[must_use]
    pub fn initiative(&self, id: crate::InitiativeId) -> Option<&Initiative> {
        self.initiatives.iter().find(|i| i.id == id)
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}
