//! Integration tests for the `qg` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn qg() -> Command {
    Command::cargo_bin("qg").unwrap()
}

// --- pillars ---

#[test]
fn pillars_resolve_founding_day() {
    qg()
        .args([
            "pillars",
            "己丑 癸酉 甲子 壬申",
            "--from",
            "1940",
            "--to",
            "1960",
            "--minute",
            "0",
            "--second",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1949-10-01 16:00:00"))
        .stdout(predicate::str::contains("candidates"));
}

#[test]
fn pillars_inconsistent_month_stem() {
    qg()
        .args(["pillars", "甲子 甲子 甲子 甲子", "--from", "1900", "--to", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Gregorian instant"));
}

#[test]
fn pillars_json() {
    qg()
        .args([
            "--json",
            "pillars",
            "己丑 癸酉 甲子 壬申",
            "--from",
            "1940",
            "--to",
            "1960",
            "--minute",
            "30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"candidates\""))
        .stdout(predicate::str::contains("1949-10-01T16:30:00"));
}

#[test]
fn pillars_bad_input() {
    qg()
        .args(["pillars", "甲子 乙丑"])
        .assert()
        .failure();
    qg()
        .args(["pillars", "己丑 癸酉 甲子 壬申", "--sect", "midnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zi sect"));
}

// --- conversions ---

#[test]
fn solar_describes_pillars() {
    qg()
        .args(["solar", "1949-10-01", "16:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("己丑年 癸酉月 甲子日 壬申时"))
        .stdout(predicate::str::contains("寒露"));
}

#[test]
fn solar_rejects_bad_date() {
    qg()
        .args(["solar", "2023-02-29"])
        .assert()
        .failure();
}

#[test]
fn lunar_new_year() {
    qg()
        .args(["lunar", "2024", "1", "1", "--hour", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-02-10 09:00:00"))
        .stdout(predicate::str::contains("甲辰年正月初一"));
}

#[test]
fn failures_are_logged_on_request() {
    qg()
        .env("RUST_LOG", "debug")
        .args(["solar", "2023-02-29"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("command failed"));
    qg()
        .env_remove("RUST_LOG")
        .args(["solar", "2023-02-29"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("command failed").not());
}

#[test]
fn lunar_missing_leap_month() {
    qg()
        .args(["lunar", "2024", "3", "1", "--leap"])
        .assert()
        .failure();
}

#[test]
fn terms_of_a_year() {
    qg()
        .args(["terms", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("立春"))
        .stdout(predicate::str::contains("2024-02-04"))
        .stdout(predicate::str::contains("冬至"));
}

#[test]
fn lunar_year_with_leap_month() {
    qg()
        .args(["year", "2023"])
        .assert()
        .success()
        .stdout(predicate::str::contains("闰二月"));
}

#[test]
fn cycle_lists_sixty() {
    qg()
        .arg("cycle")
        .assert()
        .success()
        .stdout(predicate::str::contains("甲子"))
        .stdout(predicate::str::contains("癸亥"));
}

// --- casting ---

#[test]
fn cast_numeric_codes() {
    qg()
        .args([
            "cast",
            "--protocol",
            "numeric",
            "--codes",
            "135,100,100,110,110,110",
            "--day-stem",
            "甲",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("地天泰"))
        .stdout(predicate::str::contains("地风升"))
        .stdout(predicate::str::contains("青龙"));
}

#[test]
fn cast_numeric_rejects_non_digits() {
    qg()
        .args([
            "cast",
            "--protocol",
            "numeric",
            "--codes",
            "1x5,100,100,110,110,110",
        ])
        .assert()
        .failure();
}

#[test]
fn cast_direct_lines() {
    qg()
        .args(["cast", "--protocol", "direct", "--lines", "777779"])
        .assert()
        .success()
        .stdout(predicate::str::contains("乾为天"))
        .stdout(predicate::str::contains("泽天夬"));
}

#[test]
fn cast_seeded_is_reproducible() {
    let first = qg()
        .args(["--json", "cast", "--seed", "42"])
        .output()
        .unwrap();
    let second = qg()
        .args(["--json", "cast", "--seed", "42"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains("\"primary\""));
}

#[test]
fn cast_sequential_prints_each_line() {
    qg()
        .args(["cast", "--protocol", "sequential", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("初爻"))
        .stdout(predicate::str::contains("本卦"));
}

#[test]
fn cast_unknown_protocol() {
    qg()
        .args(["cast", "--protocol", "yarrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown casting protocol"));
}

// --- session ---

#[test]
fn session_round() {
    qg()
        .args(["session", "--seed", "1", "--from", "1940", "--to", "1960"])
        .write_stdin(
            "date 1949-10-01 16:00\nprotocol numeric\ndigits 135100100110110110\nreading\nexport\nquit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("己丑年 癸酉月 甲子日 壬申时"))
        .stdout(predicate::str::contains("地天泰"))
        .stdout(predicate::str::contains("\"reading\""));
}

#[test]
fn session_reports_errors_and_continues() {
    qg()
        .arg("session")
        .write_stdin("dance\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: dance"))
        .stdout(predicate::str::contains("protocol"));
}
