//! CLI integration tests.

mod support;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

use support::files::Workspace;
use support::fixtures;

fn betsettle() -> Command {
    let mut cmd = cargo_bin_cmd!("betsettle");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    betsettle()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("settle"))
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn test_version() {
    betsettle()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("betsettle"));
}

#[test]
fn test_rules_lists_priorities() {
    betsettle()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("PLAYER_GOALS_LINE"))
        .stdout(predicate::str::contains("asian-handicap-first-half"))
        .stdout(predicate::str::contains("1000"));
}

#[test]
fn test_settle_table() {
    let workspace = Workspace::new();
    let bets = workspace.write("bets.json", fixtures::BETS);
    let result = workspace.write("match.json", fixtures::MATCH_RESULT);

    betsettle()
        .arg("settle")
        .arg("--bets")
        .arg(&bets)
        .arg("--result")
        .arg(&result)
        .assert()
        .success()
        .stdout(predicate::str::contains("ah-away"))
        .stdout(predicate::str::contains("147.5"))
        .stdout(predicate::str::contains("3 of 4 bets settled"));
}

#[test]
fn test_settle_json_lines() {
    let workspace = Workspace::new();
    let bets = workspace.write("bets.json", fixtures::BETS);
    let result = workspace.write("match.json", fixtures::MATCH_RESULT);

    let output = betsettle()
        .args(["--json", "settle", "--bets"])
        .arg(&bets)
        .arg("--result")
        .arg(&result)
        .output()
        .expect("run betsettle");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let settlements: Vec<Value> = stdout
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).expect("every line is JSON"))
        .filter(|line| line["type"] == "settlement")
        .map(|line| line["payload"].clone())
        .collect();

    assert_eq!(settlements.len(), 4);
    assert_eq!(settlements[0]["betId"], "ah-away");
    assert_eq!(settlements[0]["marketCode"], "ASIAN_HANDICAP");
    assert_eq!(settlements[0]["result"], "WON");
    assert_eq!(settlements[0]["payout"], "147.5");
    assert_eq!(settlements[3]["marketCode"], "UNKNOWN");
    assert!(settlements[3]["error"].is_string());
}

#[test]
fn test_classify_json() {
    let workspace = Workspace::new();
    let bets = workspace.write("bets.json", fixtures::BETS);

    betsettle()
        .args(["classify", "--json", "--bets"])
        .arg(&bets)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""marketCode":"PLAYER_TO_SCORE""#))
        .stdout(predicate::str::contains(r#""rule":"total-goals""#));
}

#[test]
fn test_settle_rejects_invalid_bet() {
    let workspace = Workspace::new();
    let bets = workspace.write(
        "bets.json",
        r#"[{"id":"b","marketName":"Full Time","selectionLabel":"1","stake":"0","odds":"2"}]"#,
    );
    let result = workspace.write("match.json", fixtures::MATCH_RESULT);

    betsettle()
        .arg("settle")
        .arg("--bets")
        .arg(&bets)
        .arg("--result")
        .arg(&result)
        .assert()
        .failure()
        .stderr(predicate::str::contains("stake"));
}

#[test]
fn test_check_config_valid() {
    let workspace = Workspace::new();
    let config = workspace.write("betsettle.toml", "[settlement]\nworkers = 2\n");

    betsettle()
        .args(["check", "config", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_check_config_invalid() {
    let workspace = Workspace::new();
    let config = workspace.write("betsettle.toml", "[logging]\nformat = \"xml\"\n");

    betsettle()
        .args(["check", "config", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for format"));
}
