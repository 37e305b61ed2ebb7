use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn szflags(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_szflags"));
    cmd.current_dir(workdir.path()).env_remove("RUST_LOG");
    cmd
}

fn workdir() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn mask_prints_decimal_hex_and_display() {
    let dir = workdir();
    szflags(&dir)
        .args(["mask", "SZ_WITH_INFO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decimal: 4611686018427387904"))
        .stdout(predicate::str::contains("hex:     0x4000000000000000"))
        .stdout(predicate::str::contains("flags:   SZ_WITH_INFO [4000 0000 0000 0000]"));
}

#[test]
fn mask_rejects_unknown_flag() {
    let dir = workdir();
    szflags(&dir)
        .args(["mask", "SZ_WITH_INFO", "SZ_NOT_A_FLAG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SZ_NOT_A_FLAG"));
}

#[test]
fn decode_in_group_vocabulary() {
    let dir = workdir();
    szflags(&dir)
        .args(["decode", "0x21001", "--group", "SZ_ENTITY_FLAGS"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "SZ_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES | SZ_ENTITY_INCLUDE_ENTITY_NAME | \
             0x0000000000020000 [0000 0000 0002 1001]\n",
        ));
}

#[test]
fn decode_zero_in_group_is_none() {
    let dir = workdir();
    szflags(&dir)
        .args(["decode", "0", "-g", "SZ_SEARCH_FLAGS"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{ NONE } [0000 0000 0000 0000]\n"));
}

#[test]
fn decode_without_group_lists_base_flags_and_unknown_bits() {
    let dir = workdir();
    szflags(&dir)
        .args(["decode", "0b1000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SZ_ENTITY_INCLUDE_ENTITY_NAME"))
        .stdout(predicate::str::contains("unknown bits").not());

    szflags(&dir)
        .args(["decode", "131072"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown bits: 0x0000000000020000"));
}

#[test]
fn decode_rejects_bad_mask_and_group() {
    let dir = workdir();
    szflags(&dir)
        .args(["decode", "0xZZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mask '0xZZ'"));

    szflags(&dir)
        .args(["decode", "1", "--group", "SZ_NOWHERE_FLAGS"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SZ_NOWHERE_FLAGS"));
}

#[test]
fn list_filters_by_group_and_kind() {
    let dir = workdir();
    szflags(&dir)
        .args(["list", "--group", "SZ_ADD_RECORD_FLAGS"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SZ_WITH_INFO"))
        .stdout(predicate::str::contains("SZ_ADD_RECORD_ALL_FLAGS").not());

    szflags(&dir)
        .args(["list", "--group", "SZ_ADD_RECORD_FLAGS", "--aggregates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SZ_ADD_RECORD_ALL_FLAGS"))
        .stdout(predicate::str::contains("aggregate"));
}

#[test]
fn groups_lists_every_usage_group() {
    let dir = workdir();
    szflags(&dir)
        .arg("groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("SZ_ENTITY_FLAGS"))
        .stdout(predicate::str::contains("SZ_SEARCH_FLAGS"))
        .stdout(predicate::str::contains("0x4000000000000000"));
}

#[test]
fn validate_bundled_metadata_is_clean() {
    let dir = workdir();
    szflags(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: no discrepancies"));
}

#[test]
fn validate_reports_disagreeing_metadata_with_failure_status() {
    let dir = workdir();
    let path = dir.path().join("meta.json");
    fs::write(
        &path,
        r#"[{ "symbol": "SZ_WITH_INFO", "bits": [61], "value": "0x2000000000000000",
             "definition": "1 << 61", "groups": ["SZ_ADD_RECORD_FLAGS"] }]"#,
    )
    .unwrap();

    szflags(&dir)
        .args(["validate", "--metadata"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("discrepancies:"))
        .stdout(predicate::str::contains("SZ_WITH_INFO: metadata value 0x2000000000000000"))
        .stdout(predicate::str::contains("has no metadata record"));
}

#[test]
fn validate_missing_metadata_file_is_an_error() {
    let dir = workdir();
    szflags(&dir)
        .args(["validate", "--metadata", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot validate against"));
}

#[test]
fn config_file_and_environment_feed_validation_prefixes() {
    let dir = workdir();
    let config = dir.path().join("settings.toml");
    fs::write(&config, "[validation]\nsymbolic_prefix = \"ZZ_\"\n").unwrap();

    szflags(&dir)
        .args(["validate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("has no flag ZZ_WITH_INFO"));

    szflags(&dir)
        .arg("validate")
        .env("SZFLAGS__VALIDATION__LEGACY_PREFIX", "QQ_")
        .assert()
        .failure()
        .stdout(predicate::str::contains("has no constant QQ_WITH_INFO"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = workdir();
    szflags(&dir)
        .args(["groups", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
