use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::cargo_bin("charcmp").unwrap()
}

#[test]
fn compare_letters_prints_verdict() {
    cmd()
        .args(["compare", "a", "b"])
        .assert()
        .success()
        .stdout(contains("=== Letters Comparer ==="))
        .stdout(contains("Result: -1 - 'a' comes before 'b'"));
}

#[test]
fn compare_is_case_insensitive() {
    cmd()
        .args(["compare", "A", "a"])
        .assert()
        .success()
        .stdout(contains("Result: 0 - the values are the same"));
}

#[test]
fn compare_folds_accents() {
    cmd()
        .args(["compare", "á", "a"])
        .assert()
        .success()
        .stdout(contains("the values are the same"));
}

#[test]
fn compare_digits_uses_numbers_header() {
    cmd()
        .args(["compare", "9", "2"])
        .assert()
        .success()
        .stdout(contains("=== Numbers Comparer ==="))
        .stdout(contains("Result: 1 - '9' comes after '2'"));
}

#[test]
fn compare_json_envelope() {
    let assert = cmd()
        .args(["--json", "compare", "a", "b"])
        .assert()
        .success();
    let v: Value = serde_json::from_slice(&assert.get_output().stdout).expect("valid json");
    assert_eq!(v["ok"], Value::Bool(true));
    assert_eq!(v["data"]["result"], Value::from(-1));
    assert_eq!(v["data"]["category"], Value::from("letter"));
    assert_eq!(v["data"]["verdict"], Value::from("'a' comes before 'b'"));
}

#[test]
fn letter_digit_mix_fails_with_both_categories_named() {
    cmd()
        .args(["compare", "a", "5"])
        .assert()
        .code(2)
        .stdout(contains("'a' is a letter"))
        .stdout(contains("'5' is a number"));
}

#[test]
fn punctuation_is_rejected() {
    cmd()
        .args(["validate", "!", "a"])
        .assert()
        .code(2)
        .stdout(contains("'!' is neither a letter nor a digit"));
}

#[test]
fn validate_accepts_letter_pair() {
    cmd()
        .args(["validate", "a", "b"])
        .assert()
        .success()
        .stdout(contains("ok: 'a' and 'b' are both letters"));
}

#[test]
fn validate_json_failure_sets_ok_false() {
    let assert = cmd().args(["--json", "validate", "!", "a"]).assert().code(2);
    let v: Value = serde_json::from_slice(&assert.get_output().stdout).expect("valid json");
    assert_eq!(v["ok"], Value::Bool(false));
    assert!(v["data"]
        .as_str()
        .unwrap_or_default()
        .contains("neither a letter nor a digit"));
}

#[test]
fn multi_character_argument_is_a_usage_error() {
    cmd().args(["compare", "ab", "c"]).assert().failure();
}
