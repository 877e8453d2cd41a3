//! Integration Test: Sleep Prohibition
//!
//! **Policy**: production code MUST NOT sleep. Frame pacing is a deadline
//! (`sleep_until`) raced against terminal input in `tokio::select!`, so a key
//! press is always handled immediately.

use architectural_enforcement::{assert_clean, crate_src, find_violations};

const SLEEP_CALLS: &[&str] = &["::sleep(", ".sleep(", "thread::sleep"];

#[test]
fn test_no_sleep_in_engine() {
    let violations = find_violations(&crate_src("engine"), SLEEP_CALLS);
    assert_clean("no sleep in the engine", &violations);
}

#[test]
fn test_no_sleep_in_tui() {
    let violations = find_violations(&crate_src("tui"), SLEEP_CALLS);
    assert_clean("no sleep in the TUI event loop", &violations);
}

#[test]
fn test_tui_paces_frames_with_deadline() {
    let deadline = find_violations(&crate_src("tui"), &["sleep_until("]);
    assert!(
        !deadline.is_empty(),
        "expected the tick scheduler to wait on a deadline"
    );
}
