//! The benchmark board and its edit operations

use crate::benchmark::Benchmark;
use crate::generate::generated_initiatives;
use crate::id::{BenchmarkId, InitiativeId};
use crate::initiative::{Difficulty, Initiative, InitiativeStatus};
use serde::{Deserialize, Serialize};

/// Ordered list of benchmarks with copy-on-write edits
///
/// Every operation consumes the board and returns the next value.
/// Edits addressed at unknown benchmark or initiative ids are silent
/// no-ops: ids can go stale while rows are being added and removed, and
/// a stale edit must not fail the stream.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkBoard {
    benchmarks: Vec<Benchmark>,
}

impl BenchmarkBoard {
    /// Create an empty board
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh benchmark ("New Benchmark", expanded)
    #[must_use]
    pub fn add_benchmark(self) -> Self {
        self.push_benchmark(Benchmark::new())
    }

    /// Append a prepared benchmark
    #[must_use]
    pub fn push_benchmark(mut self, benchmark: Benchmark) -> Self {
        self.benchmarks.push(benchmark);
        self
    }

    /// Delete a benchmark and its initiatives
    #[must_use]
    pub fn delete_benchmark(mut self, id: BenchmarkId) -> Self {
        self.benchmarks.retain(|b| b.id != id);
        self
    }

    /// Flip a benchmark's expanded state
    #[must_use]
    pub fn toggle(self, id: BenchmarkId) -> Self {
        self.with_benchmark(id, |b| b.expanded = !b.expanded)
    }

    /// Set a benchmark's title
    #[must_use]
    pub fn set_title(self, id: BenchmarkId, title: impl Into<String>) -> Self {
        let title = title.into();
        self.with_benchmark(id, move |b| b.title = title)
    }

    /// Set a benchmark's timeline
    #[must_use]
    pub fn set_timeline(self, id: BenchmarkId, timeline: impl Into<String>) -> Self {
        let timeline = timeline.into();
        self.with_benchmark(id, move |b| b.timeline = timeline)
    }

    /// Set a benchmark's metric name
    #[must_use]
    pub fn set_metric_name(self, id: BenchmarkId, metric_name: impl Into<String>) -> Self {
        let metric_name = metric_name.into();
        self.with_benchmark(id, move |b| b.metric_name = metric_name)
    }

    /// Set a benchmark's baseline value
    #[must_use]
    pub fn set_benchmark_value(self, id: BenchmarkId, value: impl Into<String>) -> Self {
        let value = value.into();
        self.with_benchmark(id, move |b| b.benchmark = value)
    }

    /// Set a benchmark's goal value
    #[must_use]
    pub fn set_goal(self, id: BenchmarkId, goal: impl Into<String>) -> Self {
        let goal = goal.into();
        self.with_benchmark(id, move |b| b.goal = goal)
    }

    /// Set a benchmark's notes
    #[must_use]
    pub fn set_notes(self, id: BenchmarkId, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.with_benchmark(id, move |b| b.notes = notes)
    }

    /// Append a blank pending initiative to a benchmark
    #[must_use]
    pub fn add_initiative(self, benchmark_id: BenchmarkId) -> Self {
        self.with_benchmark(benchmark_id, |b| b.initiatives.push(Initiative::new()))
    }

    /// Delete one initiative
    #[must_use]
    pub fn delete_initiative(self, benchmark_id: BenchmarkId, initiative_id: InitiativeId) -> Self {
        self.with_benchmark(benchmark_id, move |b| {
            b.initiatives.retain(|i| i.id != initiative_id);
        })
    }

    /// Set an initiative's name
    #[must_use]
    pub fn set_initiative_name(
        self,
        benchmark_id: BenchmarkId,
        initiative_id: InitiativeId,
        name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.with_initiative(benchmark_id, initiative_id, move |i| i.name = name)
    }

    /// Set an initiative's cost, re-deriving its budget share
    #[must_use]
    pub fn set_cost(
        self,
        benchmark_id: BenchmarkId,
        initiative_id: InitiativeId,
        cost: f64,
        total_budget: f64,
    ) -> Self {
        self.with_initiative(benchmark_id, initiative_id, move |i| {
            i.cost = cost;
            i.budget_percent = Initiative::derive_budget_percent(cost, total_budget);
        })
    }

    /// Set an initiative's difficulty
    #[must_use]
    pub fn set_difficulty(
        self,
        benchmark_id: BenchmarkId,
        initiative_id: InitiativeId,
        difficulty: Difficulty,
    ) -> Self {
        self.with_initiative(benchmark_id, initiative_id, move |i| {
            i.difficulty = difficulty;
        })
    }

    /// Set an initiative's approval status
    #[must_use]
    pub fn set_status(
        self,
        benchmark_id: BenchmarkId,
        initiative_id: InitiativeId,
        status: InitiativeStatus,
    ) -> Self {
        self.with_initiative(benchmark_id, initiative_id, move |i| i.status = status)
    }

    /// Assign a team member to an initiative; duplicates are ignored
    #[must_use]
    pub fn add_personnel(
        self,
        benchmark_id: BenchmarkId,
        initiative_id: InitiativeId,
        person: impl Into<String>,
    ) -> Self {
        let person = person.into();
        self.with_initiative(benchmark_id, initiative_id, move |i| {
            if !i.personnel.contains(&person) {
                i.personnel.push(person);
            }
        })
    }

    /// Unassign a team member from an initiative
    #[must_use]
    pub fn remove_personnel(
        self,
        benchmark_id: BenchmarkId,
        initiative_id: InitiativeId,
        person: &str,
    ) -> Self {
        self.with_initiative(benchmark_id, initiative_id, move |i| {
            i.personnel.retain(|p| p != person);
        })
    }

    /// Re-derive every initiative's budget share for a new total budget
    ///
    /// Costs are untouched, same discipline as the allocation mapping's
    /// budget rescale.
    #[must_use]
    pub fn rescale_for_budget(mut self, total_budget: f64) -> Self {
        for benchmark in &mut self.benchmarks {
            for initiative in &mut benchmark.initiatives {
                initiative.budget_percent =
                    Initiative::derive_budget_percent(initiative.cost, total_budget);
            }
        }
        self
    }

    /// Replace a benchmark's initiatives with generated templates
    ///
    /// The mocked "generate with AI" action: three initiatives named
    /// from the benchmark's metric, costed at 20/15/10% of the budget,
    /// staffed from overlapping roster slices, all pending.
    #[must_use]
    pub fn generate_initiatives(
        self,
        benchmark_id: BenchmarkId,
        total_budget: f64,
        roster: &[String],
    ) -> Self {
        self.with_benchmark(benchmark_id, move |b| {
            b.initiatives = generated_initiatives(&b.metric_name, total_budget, roster);
        })
    }

    /// Look up a benchmark by id
    #[must_use]
    pub fn get(&self, id: BenchmarkId) -> Option<&Benchmark> {
        self.benchmarks.iter().find(|b| b.id == id)
    }

    /// Benchmarks in display order
    #[inline]
    #[must_use]
    pub fn benchmarks(&self) -> &[Benchmark] {
        &self.benchmarks
    }

    /// Number of benchmarks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Check if the board has no benchmarks
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }

    fn with_benchmark(mut self, id: BenchmarkId, edit: impl FnOnce(&mut Benchmark)) -> Self {
        if let Some(benchmark) = self.benchmarks.iter_mut().find(|b| b.id == id) {
            edit(benchmark);
        }
        self
    }

    fn with_initiative(
        self,
        benchmark_id: BenchmarkId,
        initiative_id: InitiativeId,
        edit: impl FnOnce(&mut Initiative),
    ) -> Self {
        self.with_benchmark(benchmark_id, move |b| {
            if let Some(initiative) = b.initiatives.iter_mut().find(|i| i.id == initiative_id) {
                edit(initiative);
            }
        })
    }
}
