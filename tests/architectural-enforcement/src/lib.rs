//! Architectural Enforcement Integration Tests
//!
//! Source scans that keep the workspace layered:
//! - The engine stays headless (no terminal crates, no stdout, no async runtime)
//! - Nothing sleeps; frame delays are deadlines the event loop selects on
//! - Production code propagates errors instead of unwrapping
//!
//! Test modules (everything after `#[cfg(test)]`) are not scanned.

use std::fs;
use std::path::{Path, PathBuf};

/// A non-comment line of production code
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub path: PathBuf,
    pub number: usize,
    pub code: String,
}

impl std::fmt::Display for SourceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} - {}", self.path.display(), self.number, self.code.trim())
    }
}

/// Source directory of a workspace crate, e.g. `crate_src("engine")`
pub fn crate_src(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(name)
        .join("src")
}

/// Every production line under `dir`, comments stripped
///
/// Panics if `dir` does not exist so a moved crate can't make a scan pass
/// vacuously.
pub fn production_lines(dir: &Path) -> Vec<SourceLine> {
    assert!(dir.exists(), "source directory missing: {}", dir.display());

    let mut lines = Vec::new();
    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(path) else {
            continue;
        };

        for (idx, line) in content.lines().enumerate() {
            if line.trim_start().starts_with("#[cfg(test)]") {
                break;
            }
            let code = line.split("//").next().unwrap_or(line);
            if code.trim().is_empty() {
                continue;
            }
            lines.push(SourceLine {
                path: path.to_path_buf(),
                number: idx + 1,
                code: code.to_string(),
            });
        }
    }
    lines
}

/// Lines under `dir` containing any of `patterns`
pub fn find_violations(dir: &Path, patterns: &[&str]) -> Vec<SourceLine> {
    production_lines(dir)
        .into_iter()
        .filter(|line| patterns.iter().any(|p| line.code.contains(p)))
        .collect()
}

/// Panic with a readable report when `violations` is non-empty
pub fn assert_clean(rule: &str, violations: &[SourceLine]) {
    if violations.is_empty() {
        return;
    }
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }
    panic!("\nFound {} violation(s) of: {rule}", violations.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_test_modules_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sample.rs"),
            "fn a() {} // println!\n/// println!\nfn b() { println!(\"x\"); }\n#[cfg(test)]\nmod tests { fn c() { println!(\"y\"); } }\n",
        )
        .unwrap();

        let found = find_violations(dir.path(), &["println!"]);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].number, 3);
    }
}
