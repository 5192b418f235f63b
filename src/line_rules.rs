use crate::codes::Code;

/// Maximum accepted line length, in characters.
pub const MAX_LINE: usize = 79;

/// Maximum accepted number of consecutive blank lines before a code line.
const MAX_BLANK_RUN: usize = 3;

const INDENT_UNIT: usize = 4;

/// Number of consecutive blank lines seen immediately before (and including)
/// the last scanned line.
///
/// The counter is scoped to one file: directory mode starts each file from
/// `BlankRun::default()` and the state is threaded through [`check_line`]
/// rather than kept anywhere global.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlankRun(usize);

/// Evaluate one physical line against the seven textual checks.
///
/// Returns the codes that fired, in fixed S001 to S007 order, together with
/// the blank-run state to carry into the next line. `line` may or may not
/// still have its trailing newline.
pub fn check_line(line: &str, carried: BlankRun) -> (Vec<Code>, BlankRun) {
    let text = line.strip_suffix('\n').unwrap_or(line);
    let text = text.strip_suffix('\r').unwrap_or(text);
    let blank = text.trim().is_empty();

    let mut codes = Vec::new();
    if line_too_long(text) {
        codes.push(Code::S001);
    }
    if uneven_indentation(text) {
        codes.push(Code::S002);
    }
    if stray_semicolon(text) {
        codes.push(Code::S003);
    }
    if comment_spacing(text) {
        codes.push(Code::S004);
    }
    if todo_comment(text) {
        codes.push(Code::S005);
    }
    if !blank && carried.0 > MAX_BLANK_RUN {
        codes.push(Code::S006);
    }
    if construct_spacing(text) {
        codes.push(Code::S007);
    }

    let next = if blank { BlankRun(carried.0 + 1) } else { BlankRun(0) };
    (codes, next)
}

fn line_too_long(text: &str) -> bool {
    text.chars().count() > MAX_LINE
}

/// The space count of the line is not a multiple of four. Lines carrying a
/// `#` are exempt, matching historical PEP-style tooling.
fn uneven_indentation(text: &str) -> bool {
    if text.contains('#') {
        return false;
    }
    let spaces = text.chars().filter(|&c| c == ' ').count();
    spaces % INDENT_UNIT != 0
}

/// The first `;` of the line is not its final non-whitespace character, so
/// it separates two statements instead of terminating one.
fn stray_semicolon(text: &str) -> bool {
    let trimmed = text.trim_end();
    match trimmed.find(';') {
        Some(position) => position + 1 != trimmed.len(),
        None => false,
    }
}

/// The run of spaces immediately before the first `#` is not exactly two.
fn comment_spacing(text: &str) -> bool {
    match text.find('#') {
        Some(hash) => {
            let run = text[..hash].chars().rev().take_while(|&c| c == ' ').count();
            run != 2
        }
        None => false,
    }
}

/// The comment text after the first `#` contains `TODO`, in any case.
fn todo_comment(text: &str) -> bool {
    match text.find('#') {
        Some(hash) => text[hash + 1..].to_ascii_lowercase().contains("todo"),
        None => false,
    }
}

/// A `def` or `class` header holding a run of two or more spaces anywhere.
/// Only checked on unindented headers: the line is right-trimmed, never
/// left-trimmed.
fn construct_spacing(text: &str) -> bool {
    let trimmed = text.trim_end();
    (trimmed.starts_with("def") || trimmed.starts_with("class")) && trimmed.contains("  ")
}
