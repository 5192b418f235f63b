//! The five structural checks, produced by one pre-order traversal of the
//! syntax tree.
//!
//! Each statement kind of interest has its own match arm; everything else is
//! only recursed into. A rule that fails on an unexpected node shape is
//! logged and skipped, never aborting the traversal.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::codes::Code;
use crate::syntax::ast::{Expr, Module, Param, Stmt};

/// One structural diagnostic: the offending identifier and its code. The
/// line it belongs to is the key of the map entries are collected in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub code: Code,
    pub name: String,
}

impl TreeEntry {
    fn new(code: Code, name: &str) -> Self {
        Self {
            code,
            name: name.to_string(),
        }
    }
}

/// Walk the whole tree and collect entries per line, in visitation order.
pub fn check_module(tree: &Module) -> BTreeMap<usize, Vec<TreeEntry>> {
    let mut checker = TreeChecker::default();
    for stmt in &tree.body {
        checker.check_stmt(stmt);
    }
    checker.entries
}

#[derive(Debug, Default)]
struct TreeChecker {
    entries: BTreeMap<usize, Vec<TreeEntry>>,
}

impl TreeChecker {
    // Each rule reports Some(entry) or None; an Err means the node had a
    // shape the rule cannot evaluate, which skips the node and keeps going.
    fn report(&mut self, line: usize, result: Result<Option<TreeEntry>>) {
        match result {
            Ok(Some(entry)) => self.entries.entry(line).or_default().push(entry),
            Ok(None) => {}
            Err(err) => tracing::warn!("skipping check at line {line}: {err}"),
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::ClassDef { name, body, line, .. } => {
                self.report(*line, class_name(name));
                for stmt in body {
                    self.check_stmt(stmt);
                }
            }
            Stmt::FunctionDef {
                name,
                params,
                body,
                line,
            } => {
                self.report(*line, function_name(name));
                for param in params {
                    self.check_param(param);
                }
                for stmt in body {
                    self.check_stmt(stmt);
                }
            }
            Stmt::Assign { targets, .. } => {
                for target in targets {
                    self.check_target(target);
                }
            }
            Stmt::AugAssign { target, .. } => self.check_target(target),
            Stmt::For {
                target,
                body,
                orelse,
                ..
            } => {
                self.check_target(target);
                for stmt in body.iter().chain(orelse) {
                    self.check_stmt(stmt);
                }
            }
            Stmt::If { body, orelse, .. } | Stmt::While { body, orelse, .. } => {
                for stmt in body.iter().chain(orelse) {
                    self.check_stmt(stmt);
                }
            }
            Stmt::Return { .. }
            | Stmt::Global { .. }
            | Stmt::Import { .. }
            | Stmt::Expr { .. }
            | Stmt::Pass { .. }
            | Stmt::Break { .. }
            | Stmt::Continue { .. } => {}
        }
    }

    fn check_param(&mut self, param: &Param) {
        self.report(param.line, argument_name(&param.name));
        if let Some(default) = &param.default {
            if let Some(line) = first_empty_list(default) {
                self.report(line, Ok(Some(TreeEntry::new(Code::S012, "[]"))));
            }
        }
    }

    /// An identifier in binding position. Tuple and list patterns are
    /// unpacked; attribute and subscript targets only read their base and
    /// are left alone.
    fn check_target(&mut self, target: &Expr) {
        match target {
            Expr::Name { id, line } => self.report(*line, variable_name(id)),
            Expr::Tuple { elts, .. } | Expr::List { elts, .. } => {
                for elt in elts {
                    self.check_target(elt);
                }
            }
            _ => {}
        }
    }
}

fn has_uppercase(name: &str) -> bool {
    name.chars().any(|c| c.is_uppercase())
}

/// A class name must be CamelCase: first character uppercase, no
/// underscores.
fn class_name(name: &str) -> Result<Option<TreeEntry>> {
    let Some(first) = name.chars().next() else {
        anyhow::bail!("class definition with an empty name");
    };
    if !first.is_uppercase() || name.contains('_') {
        return Ok(Some(TreeEntry::new(Code::S008, name)));
    }
    Ok(None)
}

/// A function name must be snake_case, whether it is a free function or a
/// method of an arbitrarily nested class.
fn function_name(name: &str) -> Result<Option<TreeEntry>> {
    if has_uppercase(name) {
        return Ok(Some(TreeEntry::new(Code::S009, name)));
    }
    Ok(None)
}

fn argument_name(name: &str) -> Result<Option<TreeEntry>> {
    if has_uppercase(name) {
        return Ok(Some(TreeEntry::new(Code::S010, name)));
    }
    Ok(None)
}

/// A bound variable must be snake_case. The literal name `TODO` is exempt.
fn variable_name(name: &str) -> Result<Option<TreeEntry>> {
    if has_uppercase(name) && name != "TODO" {
        return Ok(Some(TreeEntry::new(Code::S011, name)));
    }
    Ok(None)
}

/// Pre-order search for the first empty list literal in a default value
/// subtree. Reporting stops at the first hit per default.
fn first_empty_list(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::List { elts, line } if elts.is_empty() => Some(*line),
        Expr::List { elts, .. } | Expr::Tuple { elts, .. } | Expr::Set { elts, .. } => {
            elts.iter().find_map(first_empty_list)
        }
        Expr::Dict { keys, values, .. } => {
            keys.iter().chain(values).find_map(first_empty_list)
        }
        Expr::Call { func, args, .. } => {
            first_empty_list(func).or_else(|| args.iter().find_map(first_empty_list))
        }
        Expr::Attribute { value, .. } => first_empty_list(value),
        Expr::Subscript { value, index, .. } => {
            first_empty_list(value).or_else(|| index.iter().find_map(first_empty_list))
        }
        Expr::Unary { operand, .. } => first_empty_list(operand),
        Expr::Binary { left, right, .. } => {
            first_empty_list(left).or_else(|| first_empty_list(right))
        }
        Expr::IfExp {
            body, test, orelse, ..
        } => first_empty_list(body)
            .or_else(|| first_empty_list(test))
            .or_else(|| first_empty_list(orelse)),
        Expr::Name { .. } | Expr::Constant { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;

    fn entries(source: &str) -> Vec<(usize, Code, String)> {
        let tree = parse(source).expect("test source should parse");
        check_module(&tree)
            .into_iter()
            .flat_map(|(line, entries)| {
                entries.into_iter().map(move |e| (line, e.code, e.name))
            })
            .collect()
    }

    #[test]
    fn test_camel_case_function_and_argument() {
        assert_eq!(
            entries("def CamelFunc(ArgA):\n    pass\n"),
            vec![
                (1, Code::S009, "CamelFunc".to_string()),
                (1, Code::S010, "ArgA".to_string()),
            ]
        );
    }

    #[test]
    fn test_snake_case_class() {
        assert_eq!(
            entries("class lowercase_cls:\n    pass\n"),
            vec![(1, Code::S008, "lowercase_cls".to_string())]
        );
    }

    #[test]
    fn test_class_first_char_must_be_uppercase() {
        assert_eq!(
            entries("class point:\n    pass\n"),
            vec![(1, Code::S008, "point".to_string())]
        );
        // An underscore alone is enough to flag, even with a leading capital.
        assert_eq!(
            entries("class My_Class:\n    pass\n"),
            vec![(1, Code::S008, "My_Class".to_string())]
        );
        assert!(entries("class Point:\n    pass\n").is_empty());
    }

    #[test]
    fn test_nested_method_checked() {
        let found = entries(
            "class Outer:\n    class inner_cls:\n        def BadMethod(self):\n            pass\n",
        );
        assert_eq!(
            found,
            vec![
                (2, Code::S008, "inner_cls".to_string()),
                (3, Code::S009, "BadMethod".to_string()),
            ]
        );
    }

    #[test]
    fn test_variable_binding_positions() {
        assert_eq!(
            entries("MyVar = 1\n"),
            vec![(1, Code::S011, "MyVar".to_string())]
        );
        assert_eq!(
            entries("a, BadName = 1, 2\n"),
            vec![(1, Code::S011, "BadName".to_string())]
        );
        assert_eq!(
            entries("for Index in range(3):\n    pass\n"),
            vec![(1, Code::S011, "Index".to_string())]
        );
        // Reads are not bindings.
        assert!(entries("x = MyVar\n").is_empty());
        // Attribute targets only read their base.
        assert!(entries("obj.Field = 1\n").is_empty());
    }

    #[test]
    fn test_todo_name_is_exempt() {
        assert!(entries("TODO = 'later'\n").is_empty());
        assert_eq!(
            entries("TODOS = []\n"),
            vec![(1, Code::S011, "TODOS".to_string())]
        );
    }

    #[test]
    fn test_mutable_default() {
        assert_eq!(
            entries("def f(x=[]):\n    pass\n"),
            vec![(1, Code::S012, "[]".to_string())]
        );
        assert!(entries("def f(x=[1]):\n    pass\n").is_empty());
        // Only defaults are inspected, not other empty lists.
        assert!(entries("def f(x):\n    y = x + len([])\n    return y\n").is_empty());
    }

    #[test]
    fn test_mutable_default_first_hit_only() {
        // One entry per default subtree, even with several empty lists.
        assert_eq!(
            entries("def f(x=[[], []]):\n    pass\n"),
            vec![(1, Code::S012, "[]".to_string())]
        );
        // Two defaults report independently.
        assert_eq!(
            entries("def f(x=[], y=[]):\n    pass\n"),
            vec![
                (1, Code::S012, "[]".to_string()),
                (1, Code::S012, "[]".to_string()),
            ]
        );
    }

    #[test]
    fn test_mutable_default_nested_in_call() {
        assert_eq!(
            entries("def f(x=dict(items=[])):\n    pass\n"),
            vec![(1, Code::S012, "[]".to_string())]
        );
    }
}
