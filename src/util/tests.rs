#![cfg(test)]

use std::env;
use std::process::{Command, Output};

use super::*;

const CHILD_VAR: &str = "BUFFER_UTILS_FATAL_CHILD";

/// Only does anything when spawned by [`test_fatal_ends_process`], so that a failure can be
/// observed from outside the process.
#[test]
fn fatal_child() {
    if env::var_os(CHILD_VAR).is_some() {
        fatal("Invalid start index");
    }
}

fn run_child() -> Output {
    Command::new(env::current_exe().expect("test binary should have a path"))
        .args(["util::tests::fatal_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_VAR, "1")
        .output()
        .expect("test binary should be re-runnable")
}

#[test]
#[cfg(not(feature = "abort"))]
fn test_fatal_ends_process() {
    let output = run_child();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "fatal should fail the child.");
    assert!(
        output.status.code().is_some(),
        "An unwinding failure should let the harness exit normally."
    );
    assert!(stderr.contains("Invalid start index"), "The message should reach the panic hook.");
}

#[test]
#[cfg(all(unix, feature = "abort"))]
fn test_fatal_ends_process() {
    use std::os::unix::process::ExitStatusExt;

    const SIGABRT: i32 = 6;

    let output = run_child();
    assert_eq!(
        output.status.signal(),
        Some(SIGABRT),
        "With the abort feature, fatal should abort instead of unwinding."
    );
    assert!(
        !String::from_utf8_lossy(&output.stderr).contains("Invalid start index"),
        "An aborting failure shouldn't deliver the message."
    );
}

#[test]
#[cfg(not(feature = "abort"))]
fn test_fatal_unwinds() {
    let payload = std::panic::catch_unwind(|| fatal("Source container must be non-empty"))
        .expect_err("fatal should never return");
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("Source container must be non-empty")
    );
}
