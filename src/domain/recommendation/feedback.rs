//! Selection feedback: chosen processes adjust the indicator profile.

use std::collections::BTreeSet;

use crate::domain::catalog::Catalog;
use crate::domain::profile::PreferenceIndicatorVector;

/// Applies the feedback deltas of every distinct selected process, once,
/// to `original`. The result is not fed back again.
pub fn apply_selection_deltas(
    catalog: &Catalog,
    original: &PreferenceIndicatorVector,
    selected_processes: &[String],
) -> PreferenceIndicatorVector {
    let mut adjusted = *original;
    let distinct: BTreeSet<&str> = selected_processes.iter().map(String::as_str).collect();

    for process_id in distinct {
        match catalog.feedback_for(process_id) {
            Some(deltas) => {
                for (indicator, delta) in deltas {
                    adjusted.apply(*indicator, *delta);
                }
            }
            None => tracing::warn!(process_id, "no feedback deltas for selected process"),
        }
    }

    adjusted
}
