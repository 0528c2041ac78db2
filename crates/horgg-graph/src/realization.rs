use std::cmp::Reverse;
use std::collections::BTreeSet;

use horgg_core::errors::HorggError;
use horgg_core::Edge;

use crate::bigraph::BipartiteGraph;
use crate::feasibility::check_bigraphic;

/// Checks feasibility, then builds the canonical realization.
pub fn try_build_realization(
    group_sizes: &[usize],
    memberships: &[usize],
) -> Result<BipartiteGraph, HorggError> {
    check_bigraphic(group_sizes, memberships)?;
    Ok(build_realization(group_sizes, memberships))
}

/// Builds the canonical realization of a bigraphic pair.
///
/// Groups are served in decreasing size; each one takes the nodes with the
/// largest remaining demand, kept in an ordered set so the whole build costs
/// `O(E log n)`. Ties on either side go to the lower index, so the output
/// (including edge order) depends only on the two sequences.
///
/// # Panics
///
/// Panics if the pair is not bigraphic. Use [`try_build_realization`] for
/// unchecked input.
pub fn build_realization(group_sizes: &[usize], memberships: &[usize]) -> BipartiteGraph {
    let total: usize = group_sizes.iter().sum();
    let mut graph = BipartiteGraph::with_capacity(group_sizes.len(), memberships.len(), total);

    let mut group_order: Vec<usize> = (0..group_sizes.len()).collect();
    group_order.sort_by(|&a, &b| group_sizes[b].cmp(&group_sizes[a]));

    // Nodes with positive remaining demand, largest demand first, lower index on ties.
    let mut ranked: BTreeSet<(Reverse<usize>, usize)> = memberships
        .iter()
        .enumerate()
        .filter(|&(_, &demand)| demand > 0)
        .map(|(node, &demand)| (Reverse(demand), node))
        .collect();
    let mut chosen = Vec::new();

    for group in group_order {
        let size = group_sizes[group];
        if size == 0 {
            break;
        }
        chosen.clear();
        chosen.extend(ranked.iter().take(size).copied());
        assert!(
            chosen.len() == size,
            "group {group} needs {size} nodes but only {} have remaining demand",
            chosen.len()
        );
        for &(Reverse(demand), node) in &chosen {
            ranked.remove(&(Reverse(demand), node));
            if demand > 1 {
                ranked.insert((Reverse(demand - 1), node));
            }
            let inserted = graph.add_edge(Edge::new(node, group));
            assert!(inserted.is_ok(), "group {group} was linked to node {node} twice");
        }
    }

    assert!(
        ranked.is_empty(),
        "node demands left unmet after serving every group"
    );
    graph
}
