//! Study record → Trial.
//!
//! Every lookup goes through `serde_json::Value` indexing, which yields
//! `Null` for a missing key or a non-object parent, so each field falls
//! back to its default on its own and parsing never fails.

use serde_json::Value;
use trialscope_common::Trial;

/// Shown when a study lists no phases.
pub const NO_PHASE: &str = "N/A";

pub fn parse_study(study: &Value) -> Trial {
    let proto = &study["protocolSection"];
    let id_mod = &proto["identificationModule"];
    let design_mod = &proto["designModule"];
    let status_mod = &proto["statusModule"];
    let sponsor_mod = &proto["sponsorCollaboratorsModule"];
    let cond_mod = &proto["conditionsModule"];
    let interv_mod = &proto["armsInterventionsModule"];

    let phases = string_list(&design_mod["phases"]);
    let phase = if phases.is_empty() {
        NO_PHASE.to_string()
    } else {
        phases.join(", ")
    };

    // Interventions without a name are dropped
    let interventions = interv_mod["interventions"]
        .as_array()
        .map(|iv| {
            iv.iter()
                .filter_map(|v| v["name"].as_str())
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Trial {
        nct_id: text(&id_mod["nctId"]),
        title: text(&id_mod["briefTitle"]),
        phase,
        status: text(&status_mod["overallStatus"]),
        sponsor: text(&sponsor_mod["leadSponsor"]["name"]),
        conditions: string_list(&cond_mod["conditions"]),
        interventions,
    }
}

fn text(v: &Value) -> String {
    v.as_str().unwrap_or("").to_string()
}

fn string_list(v: &Value) -> Vec<String> {
    v.as_array()
        .map(|items| items.iter().filter_map(|s| s.as_str()).map(String::from).collect())
        .unwrap_or_default()
}
