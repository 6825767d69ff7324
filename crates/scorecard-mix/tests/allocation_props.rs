use proptest::prelude::*;
use scorecard_mix::MarketingMix;
use std::collections::BTreeSet;

fn channel_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Social Media".to_string()),
        Just("SEO".to_string()),
        Just("Email Marketing".to_string()),
        Just("Event Activations".to_string()),
        Just("Retail".to_string()),
        Just("Print Advertising".to_string()),
    ]
}

fn channel_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(channel_name(), 0..6)
}

// A mapping in an arbitrary edit state: initialized from one channel
// list, then hit with a batch of percentage edits.
fn arbitrary_mix() -> impl Strategy<Value = MarketingMix> {
    (
        channel_list(),
        proptest::collection::vec(-50.0f64..150.0, 0..6),
    )
        .prop_map(|(channels, raw_values)| {
            let mut mix = MarketingMix::initialize(&channels, 1000.0);
            for (channel, raw) in channels.iter().zip(raw_values) {
                mix = mix.set_percentage(channel, raw, 1000.0);
            }
            mix
        })
}

proptest! {
    // Key set of the reconciled mapping equals exactly the set of
    // names in the channel list.
    #[test]
    fn prop_reconcile_totality(mix in arbitrary_mix(), channels in channel_list()) {
        let result = mix.reconcile(&channels);

        let expected: BTreeSet<&str> = channels.iter().map(String::as_str).collect();
        let actual: BTreeSet<&str> = result.channels().collect();
        prop_assert_eq!(actual, expected);
    }

    // A channel present both before and after reconcile keeps its
    // percentage and amount.
    #[test]
    fn prop_reconcile_preservation(mix in arbitrary_mix(), channels in channel_list()) {
        let before = mix.clone();
        let result = mix.reconcile(&channels);

        for channel in channels.iter() {
            if let Some(prior) = before.get(channel) {
                prop_assert_eq!(result.get(channel), Some(prior));
            }
        }
    }

    #[test]
    fn prop_reconcile_idempotent(mix in arbitrary_mix(), channels in channel_list()) {
        let once = mix.reconcile(&channels);
        let twice = once.clone().reconcile(&channels);
        prop_assert_eq!(twice, once);
    }

    // Percentages always land in [0, 100] and the amount is always the
    // derived value, whatever raw input arrives.
    #[test]
    fn prop_set_percentage_clamps_and_derives(
        raw in -1_000.0f64..1_000.0,
        budget in 0.0f64..1_000_000.0,
    ) {
        let mix = MarketingMix::initialize(&["Social Media"], budget)
            .set_percentage("Social Media", raw, budget);

        let allocation = mix.get("Social Media").unwrap();
        prop_assert!((0.0..=100.0).contains(&allocation.percentage));
        prop_assert_eq!(allocation.amount, allocation.percentage / 100.0 * budget);
    }

    // Rescaling changes amounts only; every amount tracks the new
    // budget.
    #[test]
    fn prop_rescale_keeps_percentages(
        mix in arbitrary_mix(),
        new_budget in 0.0f64..1_000_000.0,
    ) {
        let before = mix.clone();
        let result = mix.rescale_for_budget(new_budget);

        for (channel, allocation) in result.iter() {
            let prior = before.get(channel).unwrap();
            prop_assert_eq!(allocation.percentage, prior.percentage);
            prop_assert_eq!(allocation.amount, allocation.percentage / 100.0 * new_budget);
        }
    }

    // Edits against channels the mapping does not track never change
    // anything.
    #[test]
    fn prop_stale_key_is_noop(mix in arbitrary_mix(), raw in -50.0f64..150.0) {
        let before = mix.clone();
        let result = mix.set_percentage("Carrier Pigeon", raw, 1000.0);
        prop_assert_eq!(result, before);
    }
}

#[test]
fn clamping_examples() {
    let mix = MarketingMix::initialize(&["Social Media"], 1000.0)
        .set_percentage("Social Media", -10.0, 1000.0);
    let allocation = mix.get("Social Media").unwrap();
    assert_eq!(allocation.percentage, 0.0);
    assert_eq!(allocation.amount, 0.0);

    let mix = mix.set_percentage("Social Media", 150.0, 1000.0);
    let allocation = mix.get("Social Media").unwrap();
    assert_eq!(allocation.percentage, 100.0);
    assert_eq!(allocation.amount, 1000.0);
}

#[test]
fn budget_rescale_example() {
    let mix = MarketingMix::initialize(&["Email"], 1000.0)
        .set_percentage("Email", 40.0, 1000.0);
    assert_eq!(mix.get("Email").unwrap().amount, 400.0);

    let mix = mix.rescale_for_budget(2000.0);
    let allocation = mix.get("Email").unwrap();
    assert_eq!(allocation.percentage, 40.0);
    assert_eq!(allocation.amount, 800.0);
}

#[test]
fn empty_state_example() {
    let mix = MarketingMix::initialize::<String>(&[], 1000.0);
    assert!(mix.is_empty());
    assert_eq!(mix.total_percentage(), 0.0);
    assert!(mix.chart_slices().is_empty());
}
