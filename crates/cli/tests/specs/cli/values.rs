//! `mlws values` specs

use crate::prelude::*;

#[test]
fn state_values_in_declaration_order() {
    cli()
        .args(&["values", "state"])
        .passes()
        .stdout_eq("Deleted\nDisabled\nEnabled\nMigrated\nRegistered\nUnregistered\nUpdated\n");
}

#[test]
fn workspace_type_values_in_declaration_order() {
    cli()
        .args(&["values", "workspace-type"])
        .passes()
        .stdout_eq("Anonymous\nFree\nPaidPremium\nPaidStandard\nProduction\n");
}

#[test]
fn json_output_is_an_array() {
    let run = cli().args(&["values", "workspace-type", "-o", "json"]).passes();
    assert_eq!(
        run.stdout_json(),
        serde_json::json!(["Anonymous", "Free", "PaidPremium", "PaidStandard", "Production"])
    );
}

#[test]
fn output_format_from_environment() {
    let run = cli().args(&["values", "state"]).env("MLWS_OUTPUT", "json").passes();
    assert_eq!(run.stdout_json().as_array().map(Vec::len), Some(7));
}

#[test]
fn output_flag_overrides_environment() {
    cli()
        .args(&["values", "workspace-type", "--output", "text"])
        .env("MLWS_OUTPUT", "json")
        .passes()
        .stdout_has("PaidPremium\n");
}
