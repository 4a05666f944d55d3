//! `RemoteSession` against real child processes
//!
//! The transport programs are replaced by small `sh` scripts: `ssh` runs its
//! command locally and `scp` prints the arguments it received.

#![cfg(unix)]

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use remoteops_core::{HostStyle, RemoteOpsError, RemoteSession, SessionConfig};
use tempfile::TempDir;

const FAKE_SSH: &str = r#"shift
exec /bin/sh -c "$1"
"#;

const FAKE_SCP: &str = r#"printf 'scp'
printf ' [%s]' "$@"
printf '\n'
case "$*" in
    *missing*) echo "no such file" >&2; exit 1 ;;
esac
"#;

/// Writes the fake transport scripts and returns a config that runs them
/// through `sh`, so nothing freshly written is ever exec'd directly.
fn fake_transport(dir: &Path) -> SessionConfig {
    let ssh = dir.join("fake_ssh.sh");
    let scp = dir.join("fake_scp.sh");
    fs::write(&ssh, FAKE_SSH).expect("write fake ssh");
    fs::write(&scp, FAKE_SCP).expect("write fake scp");

    SessionConfig::new("user@host")
        .with_host_style(HostStyle::Posix)
        .with_retries(0, Duration::ZERO)
        .with_programs("sh", "sh")
        .with_transport_options(vec![ssh.display().to_string()])
}

fn scp_config(dir: &Path) -> SessionConfig {
    let config = fake_transport(dir);
    let scp = dir.join("fake_scp.sh");
    config.with_transport_options(vec![scp.display().to_string()])
}

#[test]
fn test_unreachable_probe_waits_between_attempts() {
    let config = SessionConfig::new("user@unreachable")
        .with_programs("false", "false")
        .with_retries(2, Duration::from_secs(1));

    let start = Instant::now();
    let session = RemoteSession::connect(config);
    let elapsed = start.elapsed();

    assert!(!session.is_reachable());
    assert!(
        elapsed >= Duration::from_secs(2),
        "expected two 1s pauses, took {elapsed:?}"
    );
    assert_eq!(session.reachability_info().exit_code, 1);
}

#[test]
fn test_shell_runs_in_working_dir() {
    let dir = TempDir::new().expect("temp dir");
    let work = dir.path().join("work");
    fs::create_dir(&work).expect("work dir");
    fs::write(work.join("marker.txt"), "x").expect("marker");

    let session = RemoteSession::connect(fake_transport(dir.path()));
    assert!(session.is_reachable(), "{:?}", session.reachability_info());

    let result = session
        .shell(["ls"], Some(work.display().to_string().as_str()))
        .expect("shell");

    assert!(result.is_success());
    assert_eq!(result.output, "marker.txt\n");
}

#[test]
fn test_shell_propagates_remote_exit_code() {
    let dir = TempDir::new().expect("temp dir");
    let session = RemoteSession::connect(fake_transport(dir.path()));

    let result = session
        .shell(["echo before", "echo oops >&2", "exit 7"], None)
        .expect("shell");

    assert_eq!(result.exit_code, 7);
    assert_eq!(result.output, "before\noops\n");
}

#[test]
fn test_shell_mode_keeps_single_quotes() {
    let dir = TempDir::new().expect("temp dir");
    let session = RemoteSession::connect(fake_transport(dir.path()).with_shell(true));
    assert!(session.is_reachable());

    let result = session
        .shell(r#"printf '%s\n' "it's here""#, None)
        .expect("shell");

    assert!(result.is_success(), "{result:?}");
    assert_eq!(result.output, "it's here\n");
}

#[test]
fn test_copy_from_one_transfer_per_file() {
    let dir = TempDir::new().expect("temp dir");
    let dest = dir.path().join("dest");
    fs::create_dir(&dest).expect("dest dir");
    let dest = dest.display().to_string();

    // The probe runs `sh fake_scp.sh user@host date`, which prints and exits 0
    let session = RemoteSession::connect(scp_config(dir.path()));
    assert!(session.is_reachable());

    let result = session
        .copy_from(["a.log", "missing b.log", "c.log"], Some(dest.as_str()))
        .expect("copy_from");

    assert_eq!(result.exit_code, 1);
    let lines: Vec<&str> = result.output.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("scp [-r] [user@host:a.log] [{dest}]"),
            format!("scp [-r] [user@host:missing\\ b.log] [{dest}]"),
            "no such file".to_string(),
            format!("scp [-r] [user@host:c.log] [{dest}]"),
        ]
    );
}

#[test]
fn test_copy_from_missing_local_dir() {
    let dir = TempDir::new().expect("temp dir");
    let session = RemoteSession::connect(scp_config(dir.path()));

    let err = session
        .copy_from(["a"], Some(dir.path().join("nope").display().to_string().as_str()))
        .expect_err("missing dir must fail");

    assert!(matches!(err, RemoteOpsError::LocalDirectoryMissing(_)));
}

#[test]
fn test_copy_to_single_transfer() {
    let dir = TempDir::new().expect("temp dir");
    let session = RemoteSession::connect(scp_config(dir.path()));

    let result = session
        .copy_to("one.txt 'two words.txt'", Some("/srv/drop"))
        .expect("copy_to");

    assert!(result.is_success());
    assert_eq!(
        result.output,
        "scp [-r] [one.txt] [two words.txt] [user@host:/srv/drop]\n"
    );
}
