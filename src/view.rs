use crate::data::filter;
use crate::data::model::{Dataset, Record};
use crate::data::summary;

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Operator controls that shape the dashboard, captured per frame.
#[derive(Debug, Clone)]
pub struct Controls {
    pub threshold: f64,
    pub search_route: String,
    pub search_branch: String,
}

/// One table row ready for display: 1-based index, the record, and whether
/// its EPKM cell is flagged under the current threshold.
pub struct RowView<'a> {
    pub index: usize,
    pub record: &'a Record,
    pub flagged: bool,
}

/// Everything the dashboard page draws, derived synchronously from the
/// current dataset and controls. Rebuilt on every interaction; nothing is
/// cached between frames.
pub struct DashboardView<'a> {
    /// All records, display-indexed from 1.
    pub rows: Vec<RowView<'a>>,
    /// Records under the threshold, re-indexed from 1.
    pub below: Vec<RowView<'a>>,
    /// Branch → count of under-threshold records, encounter order.
    pub branch_counts: Vec<(String, usize)>,
    /// Live search results, re-indexed from 1.
    pub search_rows: Vec<RowView<'a>>,
}

impl<'a> DashboardView<'a> {
    pub fn build(dataset: &'a Dataset, controls: &Controls) -> Self {
        let threshold = controls.threshold;

        let rows = dataset
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| RowView {
                index: i + 1,
                record,
                flagged: filter::is_flagged(record.earning_per_km, threshold),
            })
            .collect();

        let below_indices = filter::below_threshold(dataset, threshold);
        let branch_counts = summary::branch_counts(dataset, &below_indices);
        let below = reindexed(dataset, &below_indices, threshold);

        let search_indices =
            filter::search(dataset, &controls.search_route, &controls.search_branch);
        let search_rows = reindexed(dataset, &search_indices, threshold);

        DashboardView {
            rows,
            below,
            branch_counts,
            search_rows,
        }
    }

    /// Whether the operator has an active search.
    pub fn searching(controls: &Controls) -> bool {
        !controls.search_route.trim().is_empty() || !controls.search_branch.trim().is_empty()
    }
}

fn reindexed<'a>(dataset: &'a Dataset, indices: &[usize], threshold: f64) -> Vec<RowView<'a>> {
    indices
        .iter()
        .enumerate()
        .map(|(display, &i)| {
            let record = &dataset.records[i];
            RowView {
                index: display + 1,
                record,
                flagged: filter::is_flagged(record.earning_per_km, threshold),
            }
        })
        .collect()
}
