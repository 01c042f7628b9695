use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn molweight() -> Command {
    Command::cargo_bin("molweight").unwrap()
}

#[test]
fn reads_formula_from_stdin() {
    molweight()
        .write_stdin("H2O\n")
        .assert()
        .success()
        .stdout("18.014\n")
        .stderr("");
}

#[test]
fn empty_stdin_fails_at_offset_zero() {
    molweight()
        .write_stdin("")
        .assert()
        .success()
        .stdout("")
        .stderr("Failed to parse \n                ^ from here\n");
}

#[test]
fn strict_mode_sets_exit_status() {
    molweight()
        .args(["--strict", "Xx"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("^ from here"));

    molweight()
        .args(["--strict", "NaCl"])
        .assert()
        .success()
        .stdout("58.44\n");
}

#[test]
fn digits_flag_controls_precision() {
    molweight()
        .args(["--digits", "3", "Mg(OH)2"])
        .assert()
        .success()
        .stdout("58.3\n");
}

#[test]
fn lists_elements_in_periodic_order() {
    molweight()
        .arg("--list-elements")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H  1.007\nHe 4.003\n"))
        .stdout(contains("Cn 285\n"));
}

#[test]
fn config_limits_are_applied() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[limits]\nmax_formula_length = 3").unwrap();

    molweight()
        .arg("--config")
        .arg(config.path())
        .arg("C6H6")
        .assert()
        .success()
        .stderr("Failed to parse C6H6\n                   ^ from here\n");
}

#[test]
fn malformed_config_is_an_error() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "this is not valid toml {{{{{{").unwrap();

    molweight()
        .arg("--config")
        .arg(config.path())
        .arg("H2O")
        .assert()
        .failure()
        .stderr(contains("failed to parse"));
}

#[test]
fn invalid_limits_are_an_error() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[limits]\nmax_count = 0").unwrap();

    molweight()
        .arg("--config")
        .arg(config.path())
        .arg("H2O")
        .assert()
        .failure()
        .stderr(contains("max_count"));
}
