//! trialscope-registry - ClinicalTrials.gov search core.
//!
//! Flow for one search:
//!   1. `query`      - SearchCriteria → API query parameters
//!   2. `sources`    - one GET per page (pageSize / countTotal / pageToken)
//!   3. `parser`     - nested study JSON → flat Trial
//!   4. `aggregator` - page loop, result cap and truncation flag

pub mod query;
pub mod parser;
pub mod sources;
pub mod aggregator;

pub use aggregator::fetch_all;
pub use sources::{clinicaltrials::ClinicalTrialsClient, StudyPage, StudySource};
