//! Process-list reduction.

use serde::{Deserialize, Serialize};

use super::{ProcessClassification, ReductionPath};
use crate::domain::axes::{InterventionLevel, JudgmentAxes};
use crate::domain::catalog::Catalog;
use crate::domain::recommendation::{sort_by_rank, ProcessPriority, RecommendedProcess};

/// Cost sensitivity at or above which expensive processes are dropped.
pub const COST_SENSITIVE_AT: u8 = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionSummary {
    pub original_count: usize,
    pub reduced_count: usize,
    /// Labels of the processes that were removed.
    pub removed: Vec<String>,
    pub reason: String,
}

/// Reduces the recommended process list along the active path.
pub fn reduce_processes(
    catalog: &Catalog,
    processes: &[RecommendedProcess],
    axes: &JudgmentAxes,
    path: &ReductionPath,
) -> (Vec<RecommendedProcess>, ReductionSummary) {
    let (kept, reason) = match path {
        ReductionPath::ChoiceVariables { variables } => {
            let mut ranked = processes.to_vec();
            sort_by_rank(&mut ranked);
            ranked.truncate(variables.option_count.get());
            let reason = format!(
                "Reduced to {} processes from your judgment answers (lock strength {}).",
                variables.option_count.get(),
                variables.lock_strength
            );
            (ranked, reason)
        }
        ReductionPath::AxisDriven { level } => {
            let kept = reduce_by_axes(catalog, processes, axes, *level);
            let removed = processes.len() - kept.len();
            (kept, axis_reason(*level, axes, removed))
        }
    };

    let removed: Vec<String> = processes
        .iter()
        .filter(|p| !kept.iter().any(|k| k.id == p.id))
        .map(|p| p.label.clone())
        .collect();

    tracing::debug!(
        original = processes.len(),
        kept = kept.len(),
        removed = removed.len(),
        "process list reduced"
    );

    let summary = ReductionSummary {
        original_count: processes.len(),
        reduced_count: kept.len(),
        removed,
        reason,
    };
    (kept, summary)
}

fn reduce_by_axes(
    catalog: &Catalog,
    processes: &[RecommendedProcess],
    axes: &JudgmentAxes,
    level: InterventionLevel,
) -> Vec<RecommendedProcess> {
    let class = |p: &RecommendedProcess| catalog.classification_of(&p.id);
    let mut kept: Vec<RecommendedProcess> = processes.to_vec();

    match level {
        InterventionLevel::High => kept.retain(|p| class(p) != ProcessClassification::Later),
        InterventionLevel::Mid => kept.retain(|p| {
            !(class(p) == ProcessClassification::Later && p.priority == ProcessPriority::Optional)
        }),
        InterventionLevel::Low => {}
    }

    let narrow: Vec<&RecommendedProcess> = kept
        .iter()
        .filter(|p| class(p) == ProcessClassification::Narrow)
        .collect();

    let keep_narrow: Option<Vec<String>> = match level {
        InterventionLevel::High => {
            let essentials: Vec<String> = narrow
                .iter()
                .filter(|p| p.is_essential())
                .map(|p| p.id.clone())
                .collect();
            if !essentials.is_empty() {
                Some(essentials)
            } else {
                narrow
                    .iter()
                    .filter(|p| p.priority == ProcessPriority::Recommended)
                    .fold(None::<&&RecommendedProcess>, |best, p| match best {
                        Some(b) if b.score >= p.score => Some(b),
                        _ => Some(p),
                    })
                    .map(|top| vec![top.id.clone()])
            }
        }
        InterventionLevel::Mid => {
            let mut ranked: Vec<RecommendedProcess> = narrow.iter().map(|p| (*p).clone()).collect();
            sort_by_rank(&mut ranked);
            Some(ranked.into_iter().take(2).map(|p| p.id).collect())
        }
        InterventionLevel::Low => None,
    };

    if let Some(ids) = keep_narrow {
        kept.retain(|p| class(p) != ProcessClassification::Narrow || ids.contains(&p.id));
    }

    if axes.cost_sensitivity.value() >= COST_SENSITIVE_AT && level != InterventionLevel::Low {
        kept.retain(|p| {
            !p.cost_estimate
                .is_some_and(|cost| cost.exceeds(catalog.high_cost_threshold))
        });
    }

    kept
}

fn axis_reason(level: InterventionLevel, axes: &JudgmentAxes, removed: usize) -> String {
    if removed == 0 {
        return "All processes kept.".to_string();
    }
    let mut reasons: Vec<&str> = Vec::new();
    match level {
        InterventionLevel::High => reasons.push("high intervention"),
        InterventionLevel::Mid => reasons.push("moderate intervention"),
        InterventionLevel::Low => {}
    }
    if axes.cost_sensitivity.value() >= COST_SENSITIVE_AT {
        reasons.push("high cost sensitivity");
    }
    if axes.risk_aversion.value() >= 70 {
        reasons.push("high risk aversion");
    }
    format!("Choices narrowed ({}), {removed} removed.", reasons.join(", "))
}
