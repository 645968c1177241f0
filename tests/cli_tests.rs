//! Exit-status behavior of the exporter binary for startup errors.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn exporter() -> Command {
    cargo_bin_cmd!("postmark-exporter")
}

#[test]
fn missing_server_token_exits_with_status_one() {
    exporter()
        .env_remove("POSTMARK_SERVER_TOKEN")
        .env_remove("POSTMARK_POLLING_INTERVAL")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("POSTMARK_SERVER_TOKEN"));
}

#[test]
fn empty_server_token_exits_with_status_one() {
    exporter()
        .env("POSTMARK_SERVER_TOKEN", "")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("POSTMARK_SERVER_TOKEN"));
}

#[test]
fn malformed_polling_interval_exits_with_status_one() {
    exporter()
        .env("POSTMARK_SERVER_TOKEN", "test-token")
        .env("POSTMARK_POLLING_INTERVAL", "abc")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("POSTMARK_POLLING_INTERVAL"));
}
