//! Shared helpers for the unit tests.

use crate::check::analyze_file;
use crate::diagnostic::Diagnostic;
use crate::syntax;

/// Run the whole pipeline on in-memory source, as `test.py`.
pub(crate) fn analyze_source(source: &str) -> Vec<Diagnostic> {
    let lines: Vec<String> = source.lines().map(str::to_string).collect();
    let tree = syntax::parse(source).expect("test source should parse");
    analyze_file("test.py", &lines, &tree)
}

/// Assert that the source produces no diagnostics at all.
pub(crate) fn expect_clean(source: &str) {
    let diagnostics = analyze_source(source);
    assert!(
        diagnostics.is_empty(),
        "expected no diagnostics, got: {diagnostics:?}"
    );
}

/// The report as it would be printed, one line per diagnostic.
pub(crate) fn rendered(source: &str) -> String {
    colored::control::set_override(false);
    analyze_source(source)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
