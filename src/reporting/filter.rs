use tracing::{debug, warn};

use crate::models::{Document, ScanResult};

/// Counts gathered while filtering. Used for logging only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub results_seen: usize,
    pub results_kept: usize,
    pub controls_seen: usize,
    pub controls_kept: usize,
    /// Controls without a string `status.status`, kept as failing.
    pub controls_without_status: usize,
}

#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub results: Vec<ScanResult>,
    pub summary: FilterSummary,
}

pub fn filter_document(document: Document) -> FilterOutcome {
    filter_results(document.results)
}

/// Drops passed controls from every result, then drops results left with no
/// controls. Relative order of results and of controls is preserved.
pub fn filter_results(results: Vec<ScanResult>) -> FilterOutcome {
    let mut summary = FilterSummary::default();
    let mut kept = Vec::with_capacity(results.len());

    for mut result in results {
        summary.results_seen += 1;
        summary.controls_seen += result.controls.len();

        result.controls.retain(|control| {
            if control.status_label().is_none() {
                summary.controls_without_status += 1;
                warn!(
                    control_id = control.control_id().unwrap_or("unknown"),
                    "Control has no status, keeping it as failing"
                );
            }
            !control.is_passed()
        });

        if result.controls.is_empty() {
            debug!(
                resource_id = result.resource_id().unwrap_or("unknown"),
                "All controls passed, dropping result"
            );
            continue;
        }

        summary.controls_kept += result.controls.len();
        summary.results_kept += 1;
        kept.push(result);
    }

    FilterOutcome {
        results: kept,
        summary,
    }
}
