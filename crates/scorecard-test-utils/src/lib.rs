//! Testing utilities for the scorecard workspace
//!
//! Shared fixtures: a populated profile, an allocated mix, a benchmark
//! board with one costed initiative, and a pre-seeded store.

#![allow(missing_docs)]

use scorecard_benchmarks::{Benchmark, BenchmarkBoard};
use scorecard_core::{InMemoryStore, Scorecard, ScorecardManager, Session};
use scorecard_mix::MarketingMix;
use scorecard_profile::BrandProfile;
use scorecard_types::ScorecardId;
use std::sync::Arc;

pub const SAMPLE_CHANNELS: [&str; 3] = ["Social Media", "Content Marketing", "Email Marketing"];

pub fn sample_profile() -> BrandProfile {
    let mut profile = BrandProfile::new()
        .with_company_name("Acme Inc.")
        .with_domain_url("acme.com")
        .with_total_budget(50_000.0)
        .with_channels(SAMPLE_CHANNELS.iter().map(|s| (*s).to_string()).collect());
    profile.personnel = vec!["John Doe".to_string(), "Jane Smith".to_string()];
    profile.segments = vec!["Startups".to_string()];
    profile.products = vec!["CRM Software".to_string()];
    profile
}

pub fn sample_mix() -> MarketingMix {
    MarketingMix::initialize(&SAMPLE_CHANNELS, 50_000.0)
        .set_percentage("Social Media", 50.0, 50_000.0)
        .set_percentage("Content Marketing", 30.0, 50_000.0)
        .set_percentage("Email Marketing", 20.0, 50_000.0)
}

pub fn sample_board() -> BenchmarkBoard {
    let benchmark = Benchmark::new()
        .with_title("Grow signups")
        .with_timeline("2025 Q1")
        .with_metric("Signups");
    let board = BenchmarkBoard::new().push_benchmark(benchmark);
    let benchmark_id = board.benchmarks()[0].id;

    let board = board.add_initiative(benchmark_id);
    let initiative_id = board.benchmarks()[0].initiatives[0].id;
    board
        .set_initiative_name(benchmark_id, initiative_id, "Referral program")
        .set_cost(benchmark_id, initiative_id, 10_000.0, 50_000.0)
}

pub fn sample_scorecard() -> Scorecard {
    let mut scorecard = Scorecard::new("John Doe").with_profile(sample_profile());
    scorecard.marketing_mix = sample_mix();
    scorecard.benchmarks = sample_board();
    scorecard
}

pub fn seeded_store() -> (Arc<InMemoryStore>, ScorecardId) {
    let (store, id) = InMemoryStore::with_sample_record();
    (Arc::new(store), id)
}

pub fn setup_test_manager() -> ScorecardManager {
    let session = Session::log_in("john@example.com", "password");
    ScorecardManager::new(session, Arc::new(InMemoryStore::new()))
}
