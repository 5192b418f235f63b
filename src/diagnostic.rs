use std::fmt;

use colored::Colorize;

use crate::codes::Code;

/// The object that is eventually reported and printed in the console.
///
/// One per violation, keyed by the 1-based line the violation was found on.
/// `evidence` carries the offending identifier for the naming codes and is
/// `None` for the purely textual ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub line: usize,
    pub code: Code,
    pub evidence: Option<String>,
}

impl Diagnostic {
    pub fn new(file: &str, line: usize, code: Code) -> Self {
        Self {
            file: file.to_string(),
            line,
            code,
            evidence: None,
        }
    }

    pub fn with_evidence(file: &str, line: usize, code: Code, evidence: String) -> Self {
        Self {
            file: file.to_string(),
            line,
            code,
            evidence: Some(evidence),
        }
    }
}

/// Strip the noise an identifier can pick up from a construct header: the
/// surrounding whitespace and the trailing `:`.
fn clean_evidence(evidence: &str) -> &str {
    evidence.trim().trim_end_matches(':')
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = self
            .code
            .message(self.evidence.as_deref().map(clean_evidence));
        write!(
            f,
            "{}: line {}: {} {}",
            self.file,
            self.line,
            self.code.as_str().red(),
            message
        )
    }
}

impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare first by file, then by line, then by code
        (&self.file, self.line, self.code).cmp(&(&other.file, other.line, other.code))
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain_code() {
        colored::control::set_override(false);
        let diagnostic = Diagnostic::new("test.py", 3, Code::S003);
        assert_eq!(
            diagnostic.to_string(),
            "test.py: line 3: S003 Unnecessary semicolon"
        );
    }

    #[test]
    fn test_display_substitutes_evidence() {
        colored::control::set_override(false);
        let diagnostic =
            Diagnostic::with_evidence("test.py", 1, Code::S008, "lowercase_cls:".to_string());
        assert_eq!(
            diagnostic.to_string(),
            "test.py: line 1: S008 Class name lowercase_cls should be written in CamelCase"
        );
    }
}
