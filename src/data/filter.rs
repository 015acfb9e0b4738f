use super::model::Dataset;

// ---------------------------------------------------------------------------
// Threshold filter
// ---------------------------------------------------------------------------

/// Indices of records earning strictly less per km than `threshold`,
/// in source order. Pure; callers re-index from 1 for display.
pub fn below_threshold(dataset: &Dataset, threshold: f64) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| is_flagged(r.earning_per_km, threshold))
        .map(|(i, _)| i)
        .collect()
}

/// Highlight predicate for a single EPKM cell. Kept separate from the
/// filtering above so the table styling can use it on unfiltered rows.
pub fn is_flagged(earning_per_km: f64, threshold: f64) -> bool {
    earning_per_km < threshold
}

// ---------------------------------------------------------------------------
// Search filter
// ---------------------------------------------------------------------------

/// Indices of records matching the live search queries.
///
/// The route query matches `ROUTE_NUMBER` or `ROUTE_NAME`, the branch query
/// matches `BRANCH`; both are case-insensitive substring matches, combined
/// with AND. An empty query places no constraint, so two empty queries
/// return every index.
pub fn search(dataset: &Dataset, route_query: &str, branch_query: &str) -> Vec<usize> {
    let route_q = route_query.trim().to_lowercase();
    let branch_q = branch_query.trim().to_lowercase();

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            let route_ok = route_q.is_empty()
                || r.route_number.to_lowercase().contains(&route_q)
                || r.route_name.to_lowercase().contains(&route_q);
            let branch_ok =
                branch_q.is_empty() || r.branch.to_lowercase().contains(&branch_q);
            route_ok && branch_ok
        })
        .map(|(i, _)| i)
        .collect()
}
