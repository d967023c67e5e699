//! Domain types shared by the registry client and the web front end.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Recognized registry codes
// ---------------------------------------------------------------------------

/// Overall-status codes understood by the registry, with display labels.
pub const VALID_STATUSES: &[(&str, &str)] = &[
    ("RECRUITING", "Recruiting"),
    ("NOT_YET_RECRUITING", "Not Yet Recruiting"),
    ("ACTIVE_NOT_RECRUITING", "Active, Not Recruiting"),
    ("COMPLETED", "Completed"),
    ("ENROLLING_BY_INVITATION", "Enrolling by Invitation"),
    ("SUSPENDED", "Suspended"),
    ("TERMINATED", "Terminated"),
    ("WITHDRAWN", "Withdrawn"),
];

/// Phase codes understood by the registry, with display labels.
pub const VALID_PHASES: &[(&str, &str)] = &[
    ("EARLY_PHASE1", "Early Phase 1"),
    ("PHASE1", "Phase 1"),
    ("PHASE2", "Phase 2"),
    ("PHASE3", "Phase 3"),
    ("PHASE4", "Phase 4"),
];

// ---------------------------------------------------------------------------
// Search criteria
// ---------------------------------------------------------------------------

/// What the user asked for. Codes are passed through to the registry verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub compound: Option<String>,
    pub condition: Option<String>,
    pub phases: Option<Vec<String>>,
    pub statuses: Option<Vec<String>>,
}

impl SearchCriteria {
    /// Build criteria from raw form input. Text fields are trimmed and blank
    /// values (or empty lists) become `None`.
    pub fn new(
        compound: &str,
        condition: &str,
        phases: Vec<String>,
        statuses: Vec<String>,
    ) -> Self {
        Self {
            compound: non_blank(compound),
            condition: non_blank(condition),
            phases: non_empty(phases),
            statuses: non_empty(statuses),
        }
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.compound.is_none()
            && self.condition.is_none()
            && self.phases.is_none()
            && self.statuses.is_none()
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn non_empty(v: Vec<String>) -> Option<Vec<String>> {
    (!v.is_empty()).then_some(v)
}

// ---------------------------------------------------------------------------
// Trial
// ---------------------------------------------------------------------------

/// One registry study, flattened for display and export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    pub nct_id: String,
    pub title: String,
    /// Comma-joined phase codes, or `"N/A"`.
    pub phase: String,
    pub status: String,
    pub sponsor: String,
    pub conditions: Vec<String>,
    pub interventions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Aggregated result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    /// Trials in registry order, at most the configured cap.
    pub trials: Vec<Trial>,
    /// Total reported by the registry; may exceed `trials.len()`.
    pub total_count: usize,
    /// The registry holds more matches than were returned.
    pub truncated: bool,
}
