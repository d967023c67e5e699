//! CSV rendering of search results.
//!
//! Output is CRLF-terminated with minimal quoting, one row per trial;
//! conditions and interventions are joined with "; " in a single field.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use trialscope_common::Trial;

pub const CSV_FILENAME: &str = "clinical_trials.csv";

pub const CSV_HEADER: [&str; 7] = [
    "NCT ID", "Title", "Phase", "Status", "Sponsor", "Conditions", "Interventions",
];

const MULTI_VALUE_SEPARATOR: &str = "; ";

pub fn trials_to_csv(trials: &[Trial]) -> std::io::Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for trial in trials {
        writer.write_record([
            trial.nct_id.as_str(),
            trial.title.as_str(),
            trial.phase.as_str(),
            trial.status.as_str(),
            trial.sponsor.as_str(),
            trial.conditions.join(MULTI_VALUE_SEPARATOR).as_str(),
            trial.interventions.join(MULTI_VALUE_SEPARATOR).as_str(),
        ])?;
    }

    writer.into_inner().map_err(|e| e.into_error())
}
