//! Architecture enforcement lint - keeps the navigation core free of UI and
//! browser dependencies.
//!
//! `src/nav/` is a pure state machine: it is driven by events and returns
//! effects, so it must build and test natively without Dioxus or web-sys.
//! Browser access goes through the adapter modules listed in
//! `BROWSER_ADAPTERS`.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Crate paths the navigation core must not reference
const UI_CRATES: &[&str] = &["dioxus", "web_sys", "wasm_bindgen", "js_sys"];

/// Files allowed to touch `web_sys` directly
const BROWSER_ADAPTERS: &[&str] = &["app/dom.rs", "app/api.rs"];

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Lines (1-based) that reference `krate` as a path, ignoring comments
fn references(content: &str, krate: &str) -> Vec<usize> {
    let use_stmt = format!("use {}", krate);
    let path_expr = format!("{}::", krate);

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let code = line.trim_start();
            !code.starts_with("//") && (code.contains(&use_stmt) || code.contains(&path_expr))
        })
        .map(|(i, _)| i + 1)
        .collect()
}

fn relative(path: &Path) -> String {
    path.strip_prefix(src_dir())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[test]
fn nav_core_is_browser_independent() {
    let mut violations = Vec::new();

    for path in rust_files(&src_dir().join("nav")) {
        let content = fs::read_to_string(&path).expect("read source");
        for krate in UI_CRATES {
            for line in references(&content, krate) {
                violations.push(format!("  src/{}:{} uses {}", relative(&path), line, krate));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "\n\nARCHITECTURE VIOLATION: src/nav must not depend on UI or browser crates.\n\
         Feed it NavEvents and execute its NavEffects from src/app instead.\n\n{}\n",
        violations.join("\n")
    );
}

#[test]
fn web_sys_confined_to_browser_adapters() {
    let mut violations = Vec::new();

    for path in rust_files(&src_dir()) {
        let rel = relative(&path);
        if BROWSER_ADAPTERS.contains(&rel.as_str()) {
            continue;
        }
        let content = fs::read_to_string(&path).expect("read source");
        for line in references(&content, "web_sys") {
            violations.push(format!("  src/{}:{}", rel, line));
        }
    }

    assert!(
        violations.is_empty(),
        "\n\nARCHITECTURE VIOLATION: web_sys used outside the browser adapters.\n\
         Move DOM access into one of {:?}.\n\n{}\n",
        BROWSER_ADAPTERS,
        violations.join("\n")
    );
}

#[test]
fn scroll_listener_is_released_on_drop() {
    let dom = fs::read_to_string(src_dir().join("app").join("dom.rs")).expect("read dom.rs");

    assert!(
        dom.contains("impl Drop for ScrollListener"),
        "ScrollListener must detach its window listener on Drop"
    );
    assert!(
        dom.contains("remove_event_listener_with_callback(\"scroll\""),
        "ScrollListener::drop must remove the scroll listener"
    );
}
