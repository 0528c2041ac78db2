use horgg_core::errors::{ErrorInfo, HorggError};

/// Returns whether `(group_sizes, memberships)` is a bigraphic pair.
pub fn is_bigraphic(group_sizes: &[usize], memberships: &[usize]) -> bool {
    check_bigraphic(group_sizes, memberships).is_ok()
}

/// Validates the Gale–Ryser condition, reporting which check failed.
///
/// With `n` sorted descending, every prefix `k` must satisfy
/// `sum(n[..k]) <= sum(min(m[g], k))`. Empty sequences are feasible.
pub fn check_bigraphic(group_sizes: &[usize], memberships: &[usize]) -> Result<(), HorggError> {
    let group_total: u64 = group_sizes.iter().map(|&d| d as u64).sum();
    let node_total: u64 = memberships.iter().map(|&d| d as u64).sum();

    if group_sizes.is_empty() && node_total > 0 {
        return Err(empty_side("groups", node_total));
    }
    if memberships.is_empty() && group_total > 0 {
        return Err(empty_side("nodes", group_total));
    }
    if group_total != node_total {
        return Err(HorggError::InvalidDegreeSequence(
            ErrorInfo::new("sum-mismatch", "sequences do not sum to the same value")
                .with_context("group_sum", group_total.to_string())
                .with_context("node_sum", node_total.to_string()),
        ));
    }

    let mut nodes_desc = memberships.to_vec();
    nodes_desc.sort_unstable_by(|a, b| b.cmp(a));
    let mut groups_asc = group_sizes.to_vec();
    groups_asc.sort_unstable();

    // capped(k) = sum over groups of min(m[g], k): groups below k contribute
    // their full size, the rest contribute k each.
    let mut below = 0usize;
    let mut below_sum = 0u64;
    let mut lhs = 0u64;
    for (offset, &degree) in nodes_desc.iter().enumerate() {
        let k = offset + 1;
        lhs += degree as u64;
        while below < groups_asc.len() && groups_asc[below] < k {
            below_sum += groups_asc[below] as u64;
            below += 1;
        }
        let rhs = below_sum + (k as u64) * ((groups_asc.len() - below) as u64);
        if lhs > rhs {
            return Err(HorggError::InvalidDegreeSequence(
                ErrorInfo::new("gale-ryser", "sequences are not bigraphic")
                    .with_context("k", k.to_string())
                    .with_context("prefix_sum", lhs.to_string())
                    .with_context("capacity", rhs.to_string())
                    .with_hint("a degree on one side exceeds what the other side can absorb"),
            ));
        }
    }
    Ok(())
}

fn empty_side(side: &str, required: u64) -> HorggError {
    HorggError::InvalidDegreeSequence(
        ErrorInfo::new("empty-side", "one side is empty but edges are required")
            .with_context("empty", side)
            .with_context("required_edges", required.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_capacity_boundary() {
        assert!(is_bigraphic(&[4, 4], &[2, 2, 2, 2]));
        assert!(is_bigraphic(&[1, 1], &[2]));
        assert!(is_bigraphic(&[1, 1, 1], &[3]));

        // a node of degree 3 with only two groups
        let err = check_bigraphic(&[4, 4], &[3, 3, 1, 1]).unwrap_err();
        assert_eq!(err.code(), "gale-ryser");
        assert_eq!(err.info().context.get("k"), Some(&"1".to_string()));
        assert_eq!(err.info().context.get("capacity"), Some(&"2".to_string()));

        let err = check_bigraphic(&[1, 1], &[3]).unwrap_err();
        assert_eq!(err.code(), "sum-mismatch");
    }

    #[test]
    fn zero_degrees_are_feasible() {
        assert!(is_bigraphic(&[0, 0], &[0]));
        assert!(is_bigraphic(&[], &[0, 0]));
        assert!(is_bigraphic(&[], &[]));
    }
}
