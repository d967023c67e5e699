//! trialscope-web - Web front end for TrialScope
//! Provides:
//!   - Search form (compound, condition, phase, status)
//!   - Results table with truncation notice
//!   - CSV export of the same search

pub mod router;
pub mod handlers;
pub mod state;
pub mod templates;
pub mod export;
pub mod error;
