//! Integration Test: Layering
//!
//! **Policy**: the engine is a pure state machine. It never touches the
//! terminal, never waits, and never writes to stdout; the TUI crate owns all
//! of that.

use architectural_enforcement::{assert_clean, crate_src, find_violations};

#[test]
fn test_engine_has_no_terminal_dependencies() {
    let violations = find_violations(&crate_src("engine"), &["crossterm", "ratatui", "tokio"]);
    assert_clean("engine must not depend on terminal or runtime crates", &violations);
}

#[test]
fn test_engine_does_not_write_to_stdout() {
    let violations = find_violations(
        &crate_src("engine"),
        &["print!(", "println!(", "stdout()", "stderr()"],
    );
    assert_clean("engine output goes through view() and Update", &violations);
}

#[test]
fn test_no_unwrap_in_production_code() {
    for name in ["engine", "tui"] {
        let violations = find_violations(&crate_src(name), &[".unwrap()", ".expect("]);
        assert_clean("production code propagates errors", &violations);
    }
}
