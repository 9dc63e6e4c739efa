use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use port_randomizer_core::{is_well_known, WELL_KNOWN_PORTS};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};

fn write_config(dir: &Path, config: Value) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    path
}

/// Run the binary against a config file that does not exist yet.
fn command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("port-randomizer").unwrap();
    cmd.arg("--config").arg(dir.path().join("config.json"));
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn randomize_silent_prints_a_dynamic_port() {
    let tmp = tempdir().unwrap();
    let stdout = stdout_of(command(&tmp).args(["randomize", "--silent"]));

    let port: u16 = stdout.trim().parse().unwrap();
    assert!(port >= 1024);
    assert!(!is_well_known(port));
}

#[test]
fn randomize_json_reports_protocol() {
    let tmp = tempdir().unwrap();
    let stdout = stdout_of(command(&tmp).args(["--json", "randomize", "--udp"]));

    let body: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(body["protocol"], "udp");
    assert!(body["port"].as_u64().unwrap() >= 1024);
}

#[test]
fn randomize_fails_when_range_is_all_well_known() {
    let tmp = tempdir().unwrap();
    let config = write_config(
        tmp.path(),
        json!({ "selection": { "minPort": 8080, "maxPort": 8080, "maxAttempts": 5 } }),
    );

    let mut cmd = Command::cargo_bin("port-randomizer").unwrap();
    cmd.arg("--config")
        .arg(config)
        .args(["randomize", "-s"])
        .assert()
        .failure();
}

#[test]
fn check_well_known_prints_a_reserved_port() {
    let tmp = tempdir().unwrap();
    let stdout = stdout_of(command(&tmp).arg("check-well-known"));

    let port: u16 = stdout
        .trim()
        .strip_prefix("Checking well-known port: ")
        .unwrap()
        .parse()
        .unwrap();
    assert!(WELL_KNOWN_PORTS.contains(&port));
}

#[test]
fn list_active_without_mode_prints_usage() {
    let tmp = tempdir().unwrap();
    let stdout = stdout_of(command(&tmp).arg("list-active"));
    assert!(stdout.contains("Please specify a flag"));
}

#[test]
fn list_active_with_two_modes_prints_usage() {
    let tmp = tempdir().unwrap();
    let stdout = stdout_of(command(&tmp).args(["list-active", "-t", "-u"]));
    assert!(stdout.contains("Please specify a flag"));
}

#[test]
fn invalid_config_is_reported() {
    let tmp = tempdir().unwrap();
    let config = write_config(tmp.path(), json!({ "selection": { "maxAttempts": 0 } }));

    let mut cmd = Command::cargo_bin("port-randomizer").unwrap();
    cmd.arg("--config")
        .arg(config)
        .arg("check-well-known")
        .assert()
        .failure();
}

#[cfg(unix)]
mod with_fake_enumerator {
    use super::*;

    const SS_OUTPUT: &str = "\
Netid State  Recv-Q Send-Q Local Address:Port Peer Address:Port Process
tcp   LISTEN 0      128    127.0.0.1:8080     0.0.0.0:*
udp   UNCONN 0      0      0.0.0.0:53         0.0.0.0:*
tcp   LISTEN 0      5      0.0.0.0:22         0.0.0.0:*
";

    fn fake_ss(dir: &Path, script: &str) -> PathBuf {
        write_config(
            dir,
            json!({ "enumerator": { "program": "sh", "args": ["-c", script] } }),
        )
    }

    fn printing_sample(dir: &Path) -> PathBuf {
        fake_ss(dir, &format!("printf '%s' '{}'", SS_OUTPUT))
    }

    #[test]
    fn list_tcp() {
        let tmp = tempdir().unwrap();
        let config = printing_sample(tmp.path());

        let mut cmd = Command::cargo_bin("port-randomizer").unwrap();
        let stdout = stdout_of(cmd.arg("--config").arg(config).args(["list-active", "--tcp"]));

        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines[0], "Listing used tcp ports:");
        assert_eq!(lines[1], "8080");
        assert_eq!(lines[2], "22");
        assert!(!stdout.contains("53"));
    }

    #[test]
    fn list_udp_json() {
        let tmp = tempdir().unwrap();
        let config = printing_sample(tmp.path());

        let mut cmd = Command::cargo_bin("port-randomizer").unwrap();
        let stdout = stdout_of(
            cmd.arg("--config")
                .arg(config)
                .args(["--json", "list-active", "-u"]),
        );

        let body: Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(body, json!({ "protocol": "udp", "ports": [53] }));
    }

    #[test]
    fn list_all_pads_columns() {
        let tmp = tempdir().unwrap();
        let config = printing_sample(tmp.path());

        let mut cmd = Command::cargo_bin("port-randomizer").unwrap();
        let stdout = stdout_of(cmd.arg("--config").arg(config).args(["list-active", "--all"]));

        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines[0], "Listing all used ports:");
        assert_eq!(lines[1], "TCP Ports\t\tUDP Ports:");
        assert_eq!(lines[2], "8080\t\t\t53");
        assert_eq!(lines[3], "22\t\t\t");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn enumeration_failure_exits_non_zero() {
        let tmp = tempdir().unwrap();
        let config = fake_ss(tmp.path(), "echo 'Cannot open netlink socket' >&2; exit 1");

        let mut cmd = Command::cargo_bin("port-randomizer").unwrap();
        let output = cmd
            .arg("--config")
            .arg(config)
            .args(["list-active", "-t"])
            .output()
            .unwrap();

        assert!(!output.status.success());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("Enumeration failed"));
    }
}
