//! Per-file check pipeline: scan the raw lines, walk the parsed tree, merge
//! both diagnostic streams into one ordered report.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::codes::Code;
use crate::diagnostic::Diagnostic;
use crate::error::{InputError, ParseError};
use crate::line_rules::{check_line, BlankRun};
use crate::syntax::{self, Module};
use crate::tree_rules::{self, TreeEntry};

/// Per-line accumulation of both diagnostic streams: the textual codes in
/// evaluation order, then the tree entries in visitation order.
#[derive(Debug, Default)]
struct LineRecord {
    codes: Vec<Code>,
    entries: Vec<TreeEntry>,
}

/// The outcome of checking one file.
///
/// `error` is set when the file could not be read (no diagnostics at all) or
/// could not be parsed (the line diagnostics are still reported).
#[derive(Debug)]
pub struct FileReport {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
    pub error: Option<anyhow::Error>,
}

/// Check one file on disk.
pub fn check_file(path: &Path) -> FileReport {
    let file = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) => {
            return FileReport {
                file,
                diagnostics: Vec::new(),
                error: Some(
                    InputError {
                        path: path.to_path_buf(),
                        source,
                    }
                    .into(),
                ),
            };
        }
    };
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    match syntax::parse(&contents) {
        Ok(tree) => FileReport {
            diagnostics: analyze_file(&file, &lines, &tree),
            file,
            error: None,
        },
        Err(err) => FileReport {
            // The textual checks do not need a valid parse.
            diagnostics: analyze_lines(&file, &lines),
            file,
            error: Some(
                ParseError {
                    path: path.to_path_buf(),
                    line: err.line,
                    message: err.message,
                }
                .into(),
            ),
        },
    }
}

/// Check one already-read, already-parsed file. Pure: identical inputs
/// produce an identical report.
pub fn analyze_file(file_name: &str, lines: &[String], tree: &Module) -> Vec<Diagnostic> {
    merge(file_name, scan_lines(lines), tree_rules::check_module(tree))
}

/// The line-track half of [`analyze_file`], used on its own when the file
/// does not parse.
pub fn analyze_lines(file_name: &str, lines: &[String]) -> Vec<Diagnostic> {
    merge(file_name, scan_lines(lines), BTreeMap::new())
}

/// Run the textual checks over every physical line, threading the blank-run
/// state through the scan. Lines without findings get no entry.
fn scan_lines(lines: &[String]) -> BTreeMap<usize, Vec<Code>> {
    let mut map = BTreeMap::new();
    let mut run = BlankRun::default();
    for (index, line) in lines.iter().enumerate() {
        let (codes, next) = check_line(line, run);
        run = next;
        if !codes.is_empty() {
            map.insert(index + 1, codes);
        }
    }
    map
}

/// Union the two per-line maps into one ordered report: lines ascending, and
/// within a line all textual codes before all tree entries, each in the
/// order they were produced. Lines present in neither map are omitted.
fn merge(
    file_name: &str,
    line_codes: BTreeMap<usize, Vec<Code>>,
    tree_entries: BTreeMap<usize, Vec<TreeEntry>>,
) -> Vec<Diagnostic> {
    let mut records: BTreeMap<usize, LineRecord> = BTreeMap::new();
    for (line, codes) in line_codes {
        records.entry(line).or_default().codes = codes;
    }
    for (line, entries) in tree_entries {
        records.entry(line).or_default().entries = entries;
    }

    let mut report = Vec::new();
    for (line, record) in records {
        for code in record.codes {
            report.push(Diagnostic::new(file_name, line, code));
        }
        for entry in record.entries {
            report.push(Diagnostic::with_evidence(
                file_name, line, entry.code, entry.name,
            ));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils_test::{analyze_source, expect_clean, rendered};

    #[test]
    fn test_inline_todo_after_one_space() {
        let source = "x=[1]\ny=[2]\nx = []; # TODO fix\n";
        let diagnostics = analyze_source(source);
        let found: Vec<(usize, Code)> =
            diagnostics.iter().map(|d| (d.line, d.code)).collect();
        assert_eq!(
            found,
            vec![(3, Code::S003), (3, Code::S004), (3, Code::S005)]
        );
    }

    #[test]
    fn test_line_codes_come_before_tree_codes() {
        // The header is both too long and badly named: S001 first, then the
        // naming codes in visitation order.
        let padding = "x".repeat(60);
        let source = format!("def CamelFunc(ArgA, b, c, {padding}=0):\n    pass\n");
        let diagnostics = analyze_source(&source);
        let found: Vec<Code> = diagnostics.iter().map(|d| d.code).collect();
        assert_eq!(found, vec![Code::S001, Code::S009, Code::S010]);
    }

    #[test]
    fn test_idempotent() {
        let source = "class lowercase_cls:\n    def F(self, ArgA=[]):\n        V = 1;\n";
        assert_eq!(analyze_source(source), analyze_source(source));
    }

    #[test]
    fn test_clean_file_yields_empty_report() {
        expect_clean("def foo(a, b, c):\n    pass\n");
        expect_clean("");
    }

    #[test]
    fn test_blank_run_fires_on_following_code_line_only() {
        let source = "x=1\n\n\n\n\n\ny=2\n";
        let diagnostics = analyze_source(source);
        let found: Vec<(usize, Code)> =
            diagnostics.iter().map(|d| (d.line, d.code)).collect();
        assert_eq!(found, vec![(7, Code::S006)]);
    }

    #[test]
    fn test_rendered_report() {
        let source = "class user:\n    def Login(self, Token=[]):\n        pass\n";
        insta::assert_snapshot!(rendered(source), @r"
        test.py: line 1: S002 Indentation is not a multiple of four
        test.py: line 1: S008 Class name user should be written in CamelCase
        test.py: line 2: S002 Indentation is not a multiple of four
        test.py: line 2: S009 Function name Login should be written in snake_case
        test.py: line 2: S010 Argument name Token should be written in snake_case
        test.py: line 2: S012 The default argument value [] is mutable
        ");
    }

    #[test]
    fn test_state_does_not_leak_between_calls() {
        // Four blank lines at the end of one file must not make the first
        // line of the next one report S006.
        let trailing_blanks = "x=1\n\n\n\n\n";
        let _ = analyze_source(trailing_blanks);
        expect_clean("y=2\n");
    }
}
