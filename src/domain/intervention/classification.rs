//! Static reduction class per process.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a process is treated by choice reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessClassification {
    /// Always performed; only the standard option is shown.
    Base,
    /// Reducible according to the intervention level.
    #[default]
    Narrow,
    /// Irreversible once built; warning-gated.
    Lock,
    /// Can be deferred until after move-in.
    Later,
}

impl fmt::Display for ProcessClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProcessClassification::Base => "BASE",
            ProcessClassification::Narrow => "NARROW",
            ProcessClassification::Lock => "LOCK",
            ProcessClassification::Later => "LATER",
        };
        write!(f, "{}", s)
    }
}
