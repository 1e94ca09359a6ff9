//! Irreversibility detection and process warnings.

use serde::{Deserialize, Serialize};

use super::{ProcessClassification, COST_SENSITIVE_AT};
use crate::domain::axes::{InterventionLevel, JudgmentAxes};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::Score;
use crate::domain::recommendation::RecommendedProcess;

/// Soft locks can be overridden only below this lock strength.
pub const SOFT_LOCK_OVERRIDE_BELOW: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Irreversible,
    ChoiceReduction,
    CostHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Mid,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockLevel {
    Hard,
    Soft,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessWarning {
    pub process_id: String,
    pub process_label: String,
    pub kind: WarningKind,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_level: Option<LockLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_override: Option<bool>,
}

/// Result of the irreversibility detector for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockInfo {
    pub level: LockLevel,
    pub can_override: bool,
    pub reason: &'static str,
}

const DEMOLITION_REASON: &str = "This work cannot be changed once construction is done.";
const WATERPROOF_REASON: &str =
    "Waterproofing can't be redone after construction, so the standard plan is fixed.";
const ELECTRIC_REASON: &str = "Electrical work is limited by safety regulations once installed.";
const LOCK_REASON: &str =
    "This step is hard to change later. The most stable option is applied first.";

/// Hardcoded detector, checked in order: demolition, bathroom, electrical.
pub fn detect_lock(process: &RecommendedProcess, lock_strength: Option<Score>) -> Option<LockInfo> {
    let id = process.id.as_str();
    let category = process.category.as_str();

    if id.contains("demolition") || category == "demolition" {
        return Some(LockInfo {
            level: LockLevel::Hard,
            can_override: false,
            reason: DEMOLITION_REASON,
        });
    }

    if id.contains("bathroom") || id.contains("waterproof") || category == "bathroom" {
        return Some(LockInfo {
            level: LockLevel::Hard,
            can_override: false,
            reason: WATERPROOF_REASON,
        });
    }

    if id.contains("electric") || category == "electric" {
        let structural = ["circuit", "breaker", "wiring"]
            .iter()
            .any(|kw| id.contains(kw));
        return Some(if structural {
            LockInfo {
                level: LockLevel::Hard,
                can_override: false,
                reason: ELECTRIC_REASON,
            }
        } else {
            LockInfo {
                level: LockLevel::Soft,
                can_override: lock_strength.is_some_and(|s| s.value() < SOFT_LOCK_OVERRIDE_BELOW),
                reason: ELECTRIC_REASON,
            }
        });
    }

    None
}

/// Builds the warning list for the final process list.
pub fn generate_warnings(
    catalog: &Catalog,
    processes: &[RecommendedProcess],
    axes: &JudgmentAxes,
    level: InterventionLevel,
    lock_strength: Option<Score>,
) -> Vec<ProcessWarning> {
    let mut warnings = Vec::new();

    for process in processes {
        let classification = catalog.classification_of(&process.id);

        let lock = detect_lock(process, lock_strength).or_else(|| {
            (classification == ProcessClassification::Lock).then_some(LockInfo {
                level: LockLevel::Hard,
                can_override: false,
                reason: LOCK_REASON,
            })
        });
        if let Some(lock) = lock {
            warnings.push(ProcessWarning {
                process_id: process.id.clone(),
                process_label: process.label.clone(),
                kind: WarningKind::Irreversible,
                message: lock.reason.to_string(),
                severity: match lock.level {
                    LockLevel::Hard => Severity::High,
                    LockLevel::Soft => Severity::Mid,
                },
                lock_level: Some(lock.level),
                can_override: Some(lock.can_override),
            });
        }

        if classification == ProcessClassification::Narrow && level != InterventionLevel::Low {
            warnings.push(ProcessWarning {
                process_id: process.id.clone(),
                process_label: process.label.clone(),
                kind: WarningKind::ChoiceReduction,
                message: "Under these conditions a narrower range of choices is safer.".to_string(),
                severity: if level == InterventionLevel::High {
                    Severity::Mid
                } else {
                    Severity::Low
                },
                lock_level: None,
                can_override: None,
            });
        }

        let expensive = process
            .cost_estimate
            .is_some_and(|cost| cost.exceeds(catalog.high_cost_threshold));
        if axes.cost_sensitivity.value() >= COST_SENSITIVE_AT && expensive {
            warnings.push(ProcessWarning {
                process_id: process.id.clone(),
                process_label: process.label.clone(),
                kind: WarningKind::CostHigh,
                message: "This process is expensive. The decision can wait.".to_string(),
                severity: Severity::Mid,
                lock_level: None,
                can_override: None,
            });
        }
    }

    warnings
}
