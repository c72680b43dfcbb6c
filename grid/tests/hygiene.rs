//! Hygiene: source-level budgets for the table engine.
//!
//! The engine does no I/O and must never abort a render, so anything that can
//! panic or silently swallow a value is budgeted at zero. Budgets only go
//! down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    label: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, label: "unwrap" },
    Budget { pattern: ".expect(", max: 0, label: "expect" },
    Budget { pattern: "panic!(", max: 0, label: "panic!" },
    Budget { pattern: "unreachable!(", max: 0, label: "unreachable!" },
    Budget { pattern: "todo!(", max: 0, label: "todo!" },
    Budget { pattern: "unimplemented!(", max: 0, label: "unimplemented!" },
    Budget { pattern: "let _ =", max: 0, label: "silent discard" },
    Budget { pattern: ".ok()", max: 0, label: ".ok()" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, label: "allow(dead_code)" },
];

/// Production sources under `src/`; `*_test.rs` files are skipped.
fn sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(files: &[(String, String)], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("table.rs")), "scan found no engine sources");
}

#[test]
fn budgets_hold() {
    let mut files = Vec::new();
    sources(Path::new("src"), &mut files);

    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail: Vec<String> = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!("  {} budget exceeded: found {count}, max {}\n{}", budget.label, budget.max, detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
