use super::model::Dataset;

// ---------------------------------------------------------------------------
// Branch aggregation
// ---------------------------------------------------------------------------

/// Count the given records per branch, in first-encounter order.
///
/// `indices` is a filtered index set (normally the output of
/// [`super::filter::below_threshold`]); the counts feed the branch bar
/// chart, so stable, deterministic ordering matters more than sort order.
pub fn branch_counts(dataset: &Dataset, indices: &[usize]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for &i in indices {
        let branch = &dataset.records[i].branch;
        match counts.iter_mut().find(|(name, _)| name == branch) {
            Some((_, n)) => *n += 1,
            None => counts.push((branch.clone(), 1)),
        }
    }

    counts
}
