//! Integration tests for tkn-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn tkn_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("tkn");
    cmd.env_remove("TKN_LOG");
    cmd
}

/// Kubeconfig pointing at a port nothing listens on.
fn unreachable_kubeconfig() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create kubeconfig");
    write!(
        file,
        r"apiVersion: v1
kind: Config
current-context: dead
clusters:
- name: dead
  cluster:
    server: http://127.0.0.1:1
contexts:
- name: dead
  context:
    cluster: dead
    user: dead
    namespace: team-a
users:
- name: dead
  user:
    token: abc
"
    )
    .expect("failed to write kubeconfig");
    file
}

#[test]
fn test_version_flag() {
    tkn_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tkn"));
}

#[test]
fn test_help_flag() {
    tkn_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("triggerbinding"))
        .stdout(predicate::str::contains("--kubeconfig"));
}

#[test]
fn test_list_help_shows_flags_and_example() {
    tkn_cmd()
        .args(["triggerbinding", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lists TriggerBindings in a namespace"))
        .stdout(predicate::str::contains("--all-namespaces"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("tkn tb ls -n bar"));
}

#[test]
fn test_list_aliases() {
    tkn_cmd()
        .args(["tb", "ls", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--all-namespaces"));
}

#[test]
fn test_list_rejects_positional_arguments() {
    tkn_cmd()
        .args(["tb", "ls", "extra"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_completion_bash() {
    tkn_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tkn"));
}

#[test]
fn test_missing_kubeconfig_fails() {
    tkn_cmd()
        .args(["tb", "ls", "--kubeconfig", "/nonexistent/tkn/kubeconfig"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("kubeconfig"));
}

#[test]
fn test_unreachable_cluster_reports_namespace() {
    let kubeconfig = unreachable_kubeconfig();

    tkn_cmd()
        .args(["tb", "ls", "-n", "bar", "--kubeconfig"])
        .arg(kubeconfig.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "failed to list TriggerBindings from bar namespace",
        ));
}

#[test]
fn test_unreachable_cluster_defaults_to_context_namespace() {
    let kubeconfig = unreachable_kubeconfig();

    tkn_cmd()
        .args(["tb", "ls", "-o", "name", "--kubeconfig"])
        .arg(kubeconfig.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to list TriggerBindings from team-a namespace",
        ));
}

#[test]
fn test_unreachable_cluster_all_namespaces() {
    let kubeconfig = unreachable_kubeconfig();

    tkn_cmd()
        .args(["tb", "ls", "-A", "--kubeconfig"])
        .arg(kubeconfig.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to list TriggerBindings from all namespaces",
        ));
}

#[test]
fn test_unreachable_cluster_reports_single_error_line() {
    let kubeconfig = unreachable_kubeconfig();

    let output = tkn_cmd()
        .args(["tb", "ls", "--kubeconfig"])
        .arg(kubeconfig.path())
        .output()
        .expect("failed to run tkn");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "unexpected stderr: {stderr}");
    assert!(stderr.starts_with("Error: failed to list TriggerBindings from team-a namespace"));
}
