//! Hygiene: enforces coding standards at test time
//!
//! These tests scan `src/` for antipatterns that violate project standards.
//! Each has a budget (ideally zero). If you must add one, you have to fix an
//! existing one first; the budget never grows.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics: these crash the page.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate with ? instead" },
    Budget { pattern: ".expect(", max: 0, why: "propagate with ? instead" },
    Budget { pattern: "panic!(", max: 0, why: "return an EditorError" },
    Budget { pattern: "unreachable!(", max: 0, why: "make the state unrepresentable" },
    Budget { pattern: "todo!(", max: 0, why: "finish the stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" },
    // Silent loss: discards errors without inspecting.
    Budget { pattern: "let _ =", max: 0, why: "handle or log the result" },
    Budget { pattern: ".ok()", max: 0, why: "handle or log the error" },
    // Output goes through `log`, which reaches the console via console_log.
    Budget { pattern: "println!(", max: 0, why: "use log::info!/debug!" },
    Budget { pattern: "eprintln!(", max: 0, why: "use log::warn!/error!" },
    Budget { pattern: "dbg!(", max: 0, why: "remove debugging output" },
    // Style / structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the dead code" },
];

/// Modules allowed to touch `web_sys`; everything else is tested natively.
const BROWSER_EDGE: &[&str] = &["engine.rs", "error.rs", "surface.rs", "wasm.rs"];

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    fn file_name(&self) -> &str {
        Path::new(&self.path).file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    fn count(&self, pattern: &str) -> usize {
        self.content.lines().filter(|line| line.contains(pattern)).count()
    }
}

/// Collect production `.rs` files from `src/`, excluding `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn format_hits(hits: &[(&str, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.file_name() == "lib.rs"), "run from the crate root");
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();

    for budget in BUDGETS {
        let hits: Vec<(&str, usize)> = files
            .iter()
            .map(|f| (f.path.as_str(), f.count(budget.pattern)))
            .filter(|(_, count)| *count > 0)
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();
        if total > budget.max {
            failures.push(format!(
                "{} budget exceeded: found {total}, max {} ({}).\n{}",
                budget.pattern,
                budget.max,
                budget.why,
                format_hits(&hits)
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n\n"));
}

#[test]
fn browser_types_stay_at_the_edge() {
    let files = source_files();
    let hits: Vec<(&str, usize)> = files
        .iter()
        .filter(|f| !BROWSER_EDGE.contains(&f.file_name()))
        .map(|f| (f.path.as_str(), f.count("web_sys")))
        .filter(|(_, count)| *count > 0)
        .collect();

    assert!(
        hits.is_empty(),
        "web_sys used outside {BROWSER_EDGE:?}; keep core modules browser-agnostic.\n{}",
        format_hits(&hits)
    );
}
