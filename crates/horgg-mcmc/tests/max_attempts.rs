use horgg_mcmc::BipartiteSampler;

#[test]
fn unique_realization_exhausts_the_budget() {
    let mut sampler = BipartiteSampler::with_seed(vec![1, 2, 3, 4], vec![1, 2, 3, 4], 0).unwrap();
    let err = sampler.get_graph(10, Some(10)).unwrap_err();
    assert!(err.is_max_attempts_exceeded());
    assert_eq!(err.code(), "swap-budget");
    let info = err.info();
    assert_eq!(info.context.get("completed").map(String::as_str), Some("0"));
    assert_eq!(info.context.get("max_attempts").map(String::as_str), Some("10"));

    // still usable afterwards
    let (groups_of_node, nodes_of_group) = sampler.get_graph(0, None).unwrap();
    assert_eq!(groups_of_node.len(), 4);
    assert_eq!(nodes_of_group.len(), 4);
}

#[test]
fn default_budget_also_fails_on_a_frozen_graph() {
    let mut sampler = BipartiteSampler::with_seed(vec![1, 2, 3, 4], vec![1, 2, 3, 4], 1).unwrap();
    let err = sampler.get_random_graph(1).unwrap_err();
    assert!(err.is_max_attempts_exceeded());
    assert_eq!(
        err.info().context.get("attempts").map(String::as_str),
        Some("1000")
    );
}

#[test]
fn single_edge_fails_for_positive_steps() {
    let mut sampler = BipartiteSampler::with_seed(vec![1], vec![1], 0).unwrap();
    let err = sampler.get_random_graph(1).unwrap_err();
    assert!(err.is_max_attempts_exceeded());
    assert_eq!(sampler.get_random_graph(0).unwrap().len(), 1);
}

#[test]
fn zero_budget_with_positive_steps_fails() {
    let mut sampler = BipartiteSampler::with_seed(vec![2; 5], vec![2; 5], 0).unwrap();
    let err = sampler.get_graph(1, Some(0)).unwrap_err();
    assert!(err.is_max_attempts_exceeded());
}
