//! trialscope-common - Shared types, errors, and the outbound HTTP client used
//! across all TrialScope crates.

pub mod error;
pub mod trial;
pub mod sandbox;

// Re-export commonly used types
pub use error::{Result, TrialScopeError};
pub use trial::{AggregatedResult, SearchCriteria, Trial, VALID_PHASES, VALID_STATUSES};
