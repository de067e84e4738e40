use assert_cmd::Command;

const BIN: &str = "navettectl";

#[test]
fn test_empty_args() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.assert().failure();
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-h").assert().success();
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-V").assert().success();
}

#[test]
fn test_bad_subcommand() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("bouh").assert().failure();
}

#[test]
fn test_completion() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["completion", "bash"]).assert().success();
}

#[test]
fn test_dist_all_methods() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["dist", "--", "50.06632", "-5.71475", "58.64402", "-3.07000"])
        .assert()
        .success();
}

#[test]
fn test_dist_one_method() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["dist", "-m", "haversine", "54.7", "6.2", "50.8", "4.4"])
        .assert()
        .success();
}

#[test]
fn test_dist_unknown_method() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["dist", "-m", "loxodrome", "--", "54.7", "-6.2", "50.8", "4.4"])
        .assert()
        .failure();
}

#[test]
fn test_info() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["info", "testdata/square.hcl"]).assert().success();
}

#[test]
fn test_info_json() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["info", "-j", "testdata/square.hcl"])
        .assert()
        .success();
}

#[test]
fn test_info_missing_file() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["info", "testdata/nowhere.hcl"]).assert().failure();
}

#[test]
fn test_play_a_few() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["play", "-n", "2", "-i", "0", "testdata/square.hcl"])
        .assert()
        .success();
}

#[test]
fn test_play_bad_rate() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["play", "-r=-1.0", "-n", "1", "testdata/square.hcl"])
        .assert()
        .failure();
}

#[test]
fn test_stages() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["stages", "-e", "19", "testdata/square.hcl"])
        .assert()
        .success();
}

#[test]
fn test_stages_not_divisible() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.args(["stages", "-e", "7", "testdata/square.hcl"])
        .assert()
        .failure();
}
