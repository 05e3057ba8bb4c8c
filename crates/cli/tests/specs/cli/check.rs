//! `mlws check` specs

use crate::prelude::*;

#[test]
fn valid_value_prints_label() {
    cli().args(&["check", "state", "Enabled"]).passes().stdout_eq("Enabled\n");
}

#[test]
fn matching_is_case_sensitive_by_default() {
    cli()
        .args(&["check", "state", "enabled"])
        .exits(1)
        .stdout_eq("")
        .stderr_has(r#"unknown state "enabled""#)
        .stderr_has("Unregistered");
}

#[test]
fn ignore_case_returns_canonical_label() {
    cli()
        .args(&["check", "workspace-type", "paidstandard", "--ignore-case"])
        .passes()
        .stdout_eq("PaidStandard\n");
}

#[test]
fn ignore_case_from_environment() {
    cli()
        .args(&["check", "workspace-type", "FREE"])
        .env("MLWS_IGNORE_CASE", "1")
        .passes()
        .stdout_eq("Free\n");
}

#[test]
fn strict_overrides_environment() {
    cli()
        .args(&["check", "workspace-type", "FREE", "--strict"])
        .env("MLWS_IGNORE_CASE", "1")
        .exits(1)
        .stderr_has(r#"unknown workspace type "FREE""#);
}

#[test]
fn json_report_on_rejection_still_exits_nonzero() {
    let run = cli().args(&["check", "state", "Suspended", "-o", "json"]).exits(1);
    assert_eq!(
        run.stdout_json(),
        serde_json::json!({
            "kind": "state",
            "value": "Suspended",
            "valid": false,
            "canonical": null,
        })
    );
}

#[test]
fn json_report_on_success() {
    let run = cli().args(&["check", "state", "Migrated", "--output", "json"]).passes();
    assert_eq!(run.stdout_json()["canonical"], "Migrated");
}

#[test]
fn value_from_the_other_enumeration_is_rejected() {
    cli().args(&["check", "state", "Production"]).exits(1);
}
