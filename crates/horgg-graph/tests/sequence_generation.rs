use horgg_core::rng::RngHandle;
use horgg_graph::{
    draw_matching_sequence, draw_sequence, is_bigraphic, DiscreteDistribution, DEFAULT_MAX_DRAWS,
};

#[test]
fn cumulative_lookup_matches_first_reaching_index() {
    let dist = DiscreteDistribution::from_cumulative(vec![0.0, 0.25, 0.25, 1.0]).unwrap();
    assert_eq!(dist.value_at(0.1), 1);
    assert_eq!(dist.value_at(0.25), 1);
    assert_eq!(dist.value_at(0.3), 3);
    assert_eq!(dist.value_at(1.5), 3);

    let from_pmf = DiscreteDistribution::from_probabilities(&[0.0, 0.25, 0.0, 0.75]).unwrap();
    assert_eq!(from_pmf, dist);
}

#[test]
fn invalid_distributions_are_rejected() {
    for cumulative in [vec![], vec![0.5, 0.2], vec![0.0, f64::NAN], vec![0.0, 0.0]] {
        let err = DiscreteDistribution::from_cumulative(cumulative).unwrap_err();
        assert_eq!(err.code(), "invalid-distribution");
    }
    let err = DiscreteDistribution::from_probabilities(&[0.5, -0.1]).unwrap_err();
    assert_eq!(err.info().context.get("index").map(String::as_str), Some("1"));
}

#[test]
fn fixed_size_groups_yield_constant_sequence() {
    let mut rng = RngHandle::from_seed(42);
    let dist = DiscreteDistribution::from_probabilities(&[0.0, 0.0, 0.0, 1.0]).unwrap();
    let sizes = draw_sequence(20, &dist, &mut rng);
    assert_eq!(sizes, vec![3; 20]);
}

#[test]
fn matching_sequence_hits_target_and_is_reproducible() {
    let group_dist = DiscreteDistribution::from_probabilities(&[0.0, 0.0, 0.5, 0.5]).unwrap();
    let member_dist =
        DiscreteDistribution::from_probabilities(&[0.0, 0.2, 0.3, 0.3, 0.2]).unwrap();

    let mut rng = RngHandle::from_seed(7);
    let sizes = draw_sequence(30, &group_dist, &mut rng);
    let target: usize = sizes.iter().sum();
    let members =
        draw_matching_sequence(target, &member_dist, &mut rng, DEFAULT_MAX_DRAWS).unwrap();
    assert_eq!(members.iter().sum::<usize>(), target);
    assert!(members.iter().all(|&m| (1..=4).contains(&m)));

    let mut replay = RngHandle::from_seed(7);
    let sizes_again = draw_sequence(30, &group_dist, &mut replay);
    let members_again =
        draw_matching_sequence(target, &member_dist, &mut replay, DEFAULT_MAX_DRAWS).unwrap();
    assert_eq!(sizes, sizes_again);
    assert_eq!(members, members_again);

    // a membership count never exceeds the number of groups here
    assert!(is_bigraphic(&sizes, &members));
}

#[test]
fn zero_target_gives_empty_sequence() {
    let mut rng = RngHandle::from_seed(1);
    let dist = DiscreteDistribution::from_probabilities(&[0.0, 1.0]).unwrap();
    assert!(draw_matching_sequence(0, &dist, &mut rng, 10).unwrap().is_empty());
}

#[test]
fn unreachable_targets_fail() {
    let mut rng = RngHandle::from_seed(3);
    let zeros = DiscreteDistribution::from_probabilities(&[1.0]).unwrap();
    let err = draw_matching_sequence(5, &zeros, &mut rng, 100).unwrap_err();
    assert_eq!(err.code(), "degenerate-distribution");

    let evens = DiscreteDistribution::from_probabilities(&[0.0, 0.0, 1.0]).unwrap();
    let err = draw_matching_sequence(5, &evens, &mut rng, 100).unwrap_err();
    assert_eq!(err.code(), "reconciliation-exhausted");
}

#[test]
fn overshoot_with_single_element_recovers() {
    // every 4 overshoots the target of 3
    let dist = DiscreteDistribution::from_probabilities(&[0.0, 0.5, 0.0, 0.0, 0.5]).unwrap();
    let mut rng = RngHandle::from_seed(11);
    let seq = draw_matching_sequence(3, &dist, &mut rng, 10_000).unwrap();
    assert_eq!(seq, vec![1, 1, 1]);
}

#[test]
fn unnormalized_mass_is_rescaled() {
    let dist = DiscreteDistribution::from_cumulative(vec![0.1, 0.2, 0.4]).unwrap();
    assert_eq!(dist.cumulative(), &[0.25, 0.5, 1.0]);
    assert_eq!(dist.value_at(0.2), 0);
    assert_eq!(dist.value_at(0.3), 1);
    assert_eq!(dist.value_at(0.6), 2);

    let weights = DiscreteDistribution::from_probabilities(&[1.0, 3.0]).unwrap();
    assert_eq!(weights.cumulative(), &[0.25, 1.0]);
    assert_eq!(weights.value_at(0.5), 1);
}
