use std::fmt;

/// The twelve style codes, each bound to a fixed message. S001 to S007 come
/// from the line checks, S008 to S012 from the tree checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Code {
    S001,
    S002,
    S003,
    S004,
    S005,
    S006,
    S007,
    S008,
    S009,
    S010,
    S011,
    S012,
}

impl Code {
    pub fn as_str(self) -> &'static str {
        match self {
            Code::S001 => "S001",
            Code::S002 => "S002",
            Code::S003 => "S003",
            Code::S004 => "S004",
            Code::S005 => "S005",
            Code::S006 => "S006",
            Code::S007 => "S007",
            Code::S008 => "S008",
            Code::S009 => "S009",
            Code::S010 => "S010",
            Code::S011 => "S011",
            Code::S012 => "S012",
        }
    }

    /// Whether the message takes the offending identifier.
    pub fn takes_name(self) -> bool {
        matches!(
            self,
            Code::S008 | Code::S009 | Code::S010 | Code::S011 | Code::S012
        )
    }

    /// Render the message for this code, substituting `name` into the codes
    /// that report an offending identifier.
    pub fn message(self, name: Option<&str>) -> String {
        let name = name.unwrap_or_default();
        match self {
            Code::S001 => "Too Long".to_string(),
            Code::S002 => "Indentation is not a multiple of four".to_string(),
            Code::S003 => "Unnecessary semicolon".to_string(),
            Code::S004 => "At least two spaces required before inline comments".to_string(),
            Code::S005 => "TODO Found".to_string(),
            Code::S006 => "More than two blank lines used before this line".to_string(),
            Code::S007 => "Too many spaces after construction_name (def or class)".to_string(),
            Code::S008 => format!("Class name {name} should be written in CamelCase"),
            Code::S009 => format!("Function name {name} should be written in snake_case"),
            Code::S010 => format!("Argument name {name} should be written in snake_case"),
            Code::S011 => format!("Variable {name} should be written in snake_case"),
            Code::S012 => format!("The default argument value {name} is mutable"),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_ordering() {
        assert!(Code::S001 < Code::S007);
        assert!(Code::S007 < Code::S008);
        assert!(Code::S008 < Code::S012);
    }

    #[test]
    fn test_message_substitution() {
        assert_eq!(
            Code::S008.message(Some("my_class")),
            "Class name my_class should be written in CamelCase"
        );
        assert_eq!(
            Code::S012.message(Some("[]")),
            "The default argument value [] is mutable"
        );
        assert_eq!(Code::S005.message(None), "TODO Found");
    }

    #[test]
    fn test_takes_name() {
        assert!(!Code::S007.takes_name());
        assert!(Code::S008.takes_name());
        assert!(Code::S012.takes_name());
    }
}
