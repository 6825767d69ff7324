use scorecard_test_utils::{
    sample_board, sample_mix, sample_profile, sample_scorecard, seeded_store, setup_test_manager,
    SAMPLE_CHANNELS,
};

#[test]
fn sample_mix_is_fully_allocated() {
    let mix = sample_mix();
    assert!(mix.is_complete());
    assert_eq!(mix.get("Social Media").unwrap().amount, 25_000.0);
    assert_eq!(mix.channels().count(), SAMPLE_CHANNELS.len());
}

#[test]
fn sample_profile_and_mix_agree_on_channels() {
    let profile = sample_profile();
    let mix = sample_mix();
    assert_eq!(
        profile.channels,
        mix.channels().map(str::to_string).collect::<Vec<_>>()
    );
}

#[test]
fn sample_board_has_one_costed_initiative() {
    let board = sample_board();
    let initiative = &board.benchmarks()[0].initiatives[0];
    assert_eq!(initiative.cost, 10_000.0);
    assert_eq!(initiative.budget_percent, 20.0);
}

#[test]
fn sample_scorecard_is_internally_consistent() {
    let scorecard = sample_scorecard();
    assert_eq!(
        scorecard.brand_profile.channels,
        scorecard
            .marketing_mix
            .channels()
            .map(str::to_string)
            .collect::<Vec<_>>()
    );
    assert!(scorecard.marketing_mix.is_complete());
}

#[tokio::test]
async fn seeded_store_serves_the_sample_record() {
    use scorecard_core::ScorecardRepository;

    let (store, id) = seeded_store();
    let scorecard = store.get(id).await.unwrap();
    assert_eq!(scorecard.brand_profile.company_name, "Acme Inc.");
}

#[tokio::test]
async fn test_manager_starts_empty() {
    let mut manager = setup_test_manager();
    assert!(manager.scorecards().is_empty());
    assert!(manager.new_scorecard().await.is_ok());
}
