//! Recursive descent parser from the token stream to a [`Module`].
//!
//! There is no error recovery: the first syntax error aborts the parse and
//! is fatal for the file's tree checks.

use std::fmt;

use crate::syntax::ast::*;
use crate::syntax::lexer::Lexer;
use crate::syntax::token::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Parse a whole source file.
pub fn parse(source: &str) -> Result<Module, SyntaxError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser { tokens, current: 0 }.parse_module()
}

struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    fn parse_module(mut self) -> Result<Module, SyntaxError> {
        let mut body = Vec::new();
        loop {
            if self.eat(&TokenKind::Newline) {
                continue;
            }
            if self.check(&TokenKind::Eof) {
                break;
            }
            body.extend(self.parse_statement()?);
        }
        Ok(Module { body })
    }

    // ---- statements ----

    fn parse_statement(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        if self.check(&TokenKind::Def) {
            Ok(vec![self.parse_function_def()?])
        } else if self.check(&TokenKind::Class) {
            Ok(vec![self.parse_class_def()?])
        } else if self.check(&TokenKind::If) {
            Ok(vec![self.parse_if()?])
        } else if self.check(&TokenKind::While) {
            Ok(vec![self.parse_while()?])
        } else if self.check(&TokenKind::For) {
            Ok(vec![self.parse_for()?])
        } else if self.check(&TokenKind::At) {
            self.parse_decorated()
        } else {
            self.parse_simple_stmt()
        }
    }

    fn parse_decorated(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        while self.eat(&TokenKind::At) {
            // Decorator expressions are accepted and dropped.
            self.parse_test()?;
            self.expect(&TokenKind::Newline, "end of decorator line")?;
        }
        if self.check(&TokenKind::Def) {
            Ok(vec![self.parse_function_def()?])
        } else if self.check(&TokenKind::Class) {
            Ok(vec![self.parse_class_def()?])
        } else {
            Err(self.unexpected("`def` or `class` after decorators"))
        }
    }

    fn parse_function_def(&mut self) -> Result<Stmt, SyntaxError> {
        let line = self.expect(&TokenKind::Def, "`def`")?.line;
        let (name, _) = self.expect_name("function name")?;
        self.expect(&TokenKind::LParen, "`(`")?;
        let params = self.parse_params()?;
        self.expect(&TokenKind::RParen, "`)`")?;
        if self.eat(&TokenKind::Arrow) {
            // Return annotation, dropped.
            self.parse_test()?;
        }
        self.expect(&TokenKind::Colon, "`:`")?;
        let body = self.parse_suite()?;
        Ok(Stmt::FunctionDef {
            name,
            params,
            body,
            line,
        })
    }

    fn parse_params(&mut self) -> Result<Vec<Param>, SyntaxError> {
        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) {
            if self.eat(&TokenKind::Star) {
                // A bare `*` only separates keyword-only parameters.
                if matches!(self.peek().kind, TokenKind::Name(_)) {
                    let (name, line) = self.expect_name("parameter name")?;
                    params.push(Param {
                        name,
                        line,
                        default: None,
                    });
                }
            } else if self.eat(&TokenKind::DoubleStar) {
                let (name, line) = self.expect_name("parameter name")?;
                params.push(Param {
                    name,
                    line,
                    default: None,
                });
            } else {
                let (name, line) = self.expect_name("parameter name")?;
                if self.eat(&TokenKind::Colon) {
                    // Annotation, dropped.
                    self.parse_test()?;
                }
                let default = if self.eat(&TokenKind::Assign) {
                    Some(self.parse_test()?)
                } else {
                    None
                };
                params.push(Param {
                    name,
                    line,
                    default,
                });
            }
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(params)
    }

    fn parse_class_def(&mut self) -> Result<Stmt, SyntaxError> {
        let line = self.expect(&TokenKind::Class, "`class`")?.line;
        let (name, _) = self.expect_name("class name")?;
        let mut bases = Vec::new();
        if self.eat(&TokenKind::LParen) {
            while !self.check(&TokenKind::RParen) {
                bases.push(self.parse_argument()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RParen, "`)`")?;
        }
        self.expect(&TokenKind::Colon, "`:`")?;
        let body = self.parse_suite()?;
        Ok(Stmt::ClassDef {
            name,
            bases,
            body,
            line,
        })
    }

    fn parse_suite(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        if self.eat(&TokenKind::Newline) {
            self.expect(&TokenKind::Indent, "an indented block")?;
            let mut body = Vec::new();
            while !self.check(&TokenKind::Dedent) {
                if self.check(&TokenKind::Eof) {
                    return Err(self.unexpected("a statement"));
                }
                if self.eat(&TokenKind::Newline) {
                    continue;
                }
                body.extend(self.parse_statement()?);
            }
            self.advance();
            Ok(body)
        } else {
            self.parse_simple_stmt()
        }
    }

    fn parse_if(&mut self) -> Result<Stmt, SyntaxError> {
        let line = self.expect(&TokenKind::If, "`if`")?.line;
        let test = self.parse_test()?;
        self.expect(&TokenKind::Colon, "`:`")?;
        let body = self.parse_suite()?;
        let orelse = self.parse_else_clause()?;
        Ok(Stmt::If {
            test,
            body,
            orelse,
            line,
        })
    }

    fn parse_else_clause(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        if self.check(&TokenKind::Elif) {
            // `elif` is a nested `if` in the else branch.
            let line = self.advance().line;
            let test = self.parse_test()?;
            self.expect(&TokenKind::Colon, "`:`")?;
            let body = self.parse_suite()?;
            let orelse = self.parse_else_clause()?;
            Ok(vec![Stmt::If {
                test,
                body,
                orelse,
                line,
            }])
        } else if self.eat(&TokenKind::Else) {
            self.expect(&TokenKind::Colon, "`:`")?;
            self.parse_suite()
        } else {
            Ok(Vec::new())
        }
    }

    fn parse_while(&mut self) -> Result<Stmt, SyntaxError> {
        let line = self.expect(&TokenKind::While, "`while`")?.line;
        let test = self.parse_test()?;
        self.expect(&TokenKind::Colon, "`:`")?;
        let body = self.parse_suite()?;
        let orelse = if self.eat(&TokenKind::Else) {
            self.expect(&TokenKind::Colon, "`:`")?;
            self.parse_suite()?
        } else {
            Vec::new()
        };
        Ok(Stmt::While {
            test,
            body,
            orelse,
            line,
        })
    }

    fn parse_for(&mut self) -> Result<Stmt, SyntaxError> {
        let line = self.expect(&TokenKind::For, "`for`")?.line;
        let target = self.parse_target_list()?;
        self.expect(&TokenKind::In, "`in`")?;
        let iter = self.parse_testlist()?;
        self.expect(&TokenKind::Colon, "`:`")?;
        let body = self.parse_suite()?;
        let orelse = if self.eat(&TokenKind::Else) {
            self.expect(&TokenKind::Colon, "`:`")?;
            self.parse_suite()?
        } else {
            Vec::new()
        };
        Ok(Stmt::For {
            target,
            iter,
            body,
            orelse,
            line,
        })
    }

    fn parse_simple_stmt(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        let mut stmts = vec![self.parse_small_stmt()?];
        while self.eat(&TokenKind::Semicolon) {
            if self.check(&TokenKind::Newline) || self.check(&TokenKind::Eof) {
                break;
            }
            stmts.push(self.parse_small_stmt()?);
        }
        self.expect(&TokenKind::Newline, "end of statement")?;
        Ok(stmts)
    }

    fn parse_small_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let line = self.line();
        if self.eat(&TokenKind::Pass) {
            return Ok(Stmt::Pass { line });
        }
        if self.eat(&TokenKind::Break) {
            return Ok(Stmt::Break { line });
        }
        if self.eat(&TokenKind::Continue) {
            return Ok(Stmt::Continue { line });
        }
        if self.eat(&TokenKind::Return) {
            let value = if self.statement_ends() {
                None
            } else {
                Some(self.parse_testlist()?)
            };
            return Ok(Stmt::Return { value, line });
        }
        if self.eat(&TokenKind::Global) {
            let mut names = vec![self.expect_name("name after `global`")?.0];
            while self.eat(&TokenKind::Comma) {
                names.push(self.expect_name("name after `global`")?.0);
            }
            return Ok(Stmt::Global { names, line });
        }
        if self.check(&TokenKind::Import) || self.check(&TokenKind::From) {
            // Imports bind module aliases, which none of the checks inspect.
            while !self.statement_ends() {
                self.advance();
            }
            return Ok(Stmt::Import { line });
        }
        self.parse_expr_stmt()
    }

    fn statement_ends(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Newline | TokenKind::Semicolon | TokenKind::Eof
        )
    }

    fn parse_expr_stmt(&mut self) -> Result<Stmt, SyntaxError> {
        let line = self.line();
        let first = self.parse_testlist()?;
        if self.check(&TokenKind::Assign) {
            let mut exprs = vec![first];
            while self.eat(&TokenKind::Assign) {
                exprs.push(self.parse_testlist()?);
            }
            let Some(value) = exprs.pop() else {
                return Err(self.unexpected("assignment value"));
            };
            return Ok(Stmt::Assign {
                targets: exprs,
                value,
                line,
            });
        }
        if self.peek().kind.is_aug_assign() {
            self.advance();
            let value = self.parse_testlist()?;
            return Ok(Stmt::AugAssign {
                target: first,
                value,
                line,
            });
        }
        if self.eat(&TokenKind::Colon) {
            // Annotated assignment; the annotation is dropped.
            self.parse_test()?;
            if self.eat(&TokenKind::Assign) {
                let value = self.parse_testlist()?;
                return Ok(Stmt::Assign {
                    targets: vec![first],
                    value,
                    line,
                });
            }
            return Ok(Stmt::Expr { value: first, line });
        }
        Ok(Stmt::Expr { value: first, line })
    }

    // ---- expressions ----

    fn parse_target_list(&mut self) -> Result<Expr, SyntaxError> {
        let line = self.line();
        let mut elts = vec![self.parse_postfix()?];
        while self.eat(&TokenKind::Comma) {
            if !self.at_test_start() {
                break;
            }
            elts.push(self.parse_postfix()?);
        }
        if elts.len() == 1 {
            return Ok(elts.remove(0));
        }
        Ok(Expr::Tuple { elts, line })
    }

    fn parse_testlist(&mut self) -> Result<Expr, SyntaxError> {
        let line = self.line();
        let mut elts = vec![self.parse_test()?];
        let mut tuple = false;
        while self.eat(&TokenKind::Comma) {
            tuple = true;
            if !self.at_test_start() {
                break;
            }
            elts.push(self.parse_test()?);
        }
        if !tuple {
            return Ok(elts.remove(0));
        }
        Ok(Expr::Tuple { elts, line })
    }

    fn at_test_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Name(_)
                | TokenKind::Number(_)
                | TokenKind::Str(_)
                | TokenKind::NoneLit
                | TokenKind::TrueLit
                | TokenKind::FalseLit
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::Not
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Tilde
        )
    }

    fn parse_test(&mut self) -> Result<Expr, SyntaxError> {
        let body = self.parse_or()?;
        if self.check(&TokenKind::If) {
            let line = self.advance().line;
            let test = self.parse_or()?;
            self.expect(&TokenKind::Else, "`else`")?;
            let orelse = self.parse_test()?;
            return Ok(Expr::IfExp {
                body: Box::new(body),
                test: Box::new(test),
                orelse: Box::new(orelse),
                line,
            });
        }
        Ok(body)
    }

    fn parse_or(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_and()?;
        while self.check(&TokenKind::Or) {
            let line = self.advance().line;
            let right = self.parse_and()?;
            left = binary(BinOp::Or, left, right, line);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_not()?;
        while self.check(&TokenKind::And) {
            let line = self.advance().line;
            let right = self.parse_not()?;
            left = binary(BinOp::And, left, right, line);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, SyntaxError> {
        if self.check(&TokenKind::Not) {
            let line = self.advance().line;
            let operand = self.parse_not()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Not,
                operand: Box::new(operand),
                line,
            });
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_bitor()?;
        loop {
            let line = self.line();
            let op = if self.eat(&TokenKind::Eq) {
                BinOp::Eq
            } else if self.eat(&TokenKind::NotEq) {
                BinOp::NotEq
            } else if self.eat(&TokenKind::Le) {
                BinOp::Le
            } else if self.eat(&TokenKind::Ge) {
                BinOp::Ge
            } else if self.eat(&TokenKind::Lt) {
                BinOp::Lt
            } else if self.eat(&TokenKind::Gt) {
                BinOp::Gt
            } else if self.eat(&TokenKind::In) {
                BinOp::In
            } else if self.check(&TokenKind::Is) {
                self.advance();
                if self.eat(&TokenKind::Not) {
                    BinOp::IsNot
                } else {
                    BinOp::Is
                }
            } else if self.check(&TokenKind::Not) {
                self.advance();
                self.expect(&TokenKind::In, "`in` after `not`")?;
                BinOp::NotIn
            } else {
                break;
            };
            let right = self.parse_bitor()?;
            left = binary(op, left, right, line);
        }
        Ok(left)
    }

    fn parse_bitor(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_bitxor()?;
        while self.check(&TokenKind::Pipe) {
            let line = self.advance().line;
            let right = self.parse_bitxor()?;
            left = binary(BinOp::BitOr, left, right, line);
        }
        Ok(left)
    }

    fn parse_bitxor(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_bitand()?;
        while self.check(&TokenKind::Caret) {
            let line = self.advance().line;
            let right = self.parse_bitand()?;
            left = binary(BinOp::BitXor, left, right, line);
        }
        Ok(left)
    }

    fn parse_bitand(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_shift()?;
        while self.check(&TokenKind::Amp) {
            let line = self.advance().line;
            let right = self.parse_shift()?;
            left = binary(BinOp::BitAnd, left, right, line);
        }
        Ok(left)
    }

    fn parse_shift(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_arith()?;
        loop {
            let op = if self.check(&TokenKind::Shl) {
                BinOp::Shl
            } else if self.check(&TokenKind::Shr) {
                BinOp::Shr
            } else {
                break;
            };
            let line = self.advance().line;
            let right = self.parse_arith()?;
            left = binary(op, left, right, line);
        }
        Ok(left)
    }

    fn parse_arith(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_term()?;
        loop {
            let op = if self.check(&TokenKind::Plus) {
                BinOp::Add
            } else if self.check(&TokenKind::Minus) {
                BinOp::Sub
            } else {
                break;
            };
            let line = self.advance().line;
            let right = self.parse_term()?;
            left = binary(op, left, right, line);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_factor()?;
        loop {
            let op = if self.check(&TokenKind::Star) {
                BinOp::Mul
            } else if self.check(&TokenKind::Slash) {
                BinOp::Div
            } else if self.check(&TokenKind::DoubleSlash) {
                BinOp::FloorDiv
            } else if self.check(&TokenKind::Percent) {
                BinOp::Mod
            } else {
                break;
            };
            let line = self.advance().line;
            let right = self.parse_factor()?;
            left = binary(op, left, right, line);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, SyntaxError> {
        let op = if self.check(&TokenKind::Plus) {
            Some(UnaryOp::Pos)
        } else if self.check(&TokenKind::Minus) {
            Some(UnaryOp::Neg)
        } else if self.check(&TokenKind::Tilde) {
            Some(UnaryOp::Invert)
        } else {
            None
        };
        if let Some(op) = op {
            let line = self.advance().line;
            let operand = self.parse_factor()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
                line,
            });
        }
        self.parse_power()
    }

    fn parse_power(&mut self) -> Result<Expr, SyntaxError> {
        let base = self.parse_postfix()?;
        if self.check(&TokenKind::DoubleStar) {
            let line = self.advance().line;
            let exponent = self.parse_factor()?;
            return Ok(binary(BinOp::Pow, base, exponent, line));
        }
        Ok(base)
    }

    fn parse_postfix(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.parse_atom()?;
        loop {
            if self.check(&TokenKind::LParen) {
                let line = self.advance().line;
                let mut args = Vec::new();
                while !self.check(&TokenKind::RParen) {
                    args.push(self.parse_argument()?);
                    if !self.eat(&TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(&TokenKind::RParen, "`)`")?;
                expr = Expr::Call {
                    func: Box::new(expr),
                    args,
                    line,
                };
            } else if self.check(&TokenKind::LBracket) {
                let line = self.advance().line;
                let index = self.parse_subscript()?;
                self.expect(&TokenKind::RBracket, "`]`")?;
                expr = Expr::Subscript {
                    value: Box::new(expr),
                    index,
                    line,
                };
            } else if self.check(&TokenKind::Dot) {
                let line = self.advance().line;
                let (attr, _) = self.expect_name("attribute name")?;
                expr = Expr::Attribute {
                    value: Box::new(expr),
                    attr,
                    line,
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// One call or base-class argument. Keyword names and `*`/`**` markers
    /// are dropped, the value expression is kept.
    fn parse_argument(&mut self) -> Result<Expr, SyntaxError> {
        if self.eat(&TokenKind::Star) || self.eat(&TokenKind::DoubleStar) {
            return self.parse_test();
        }
        let value = self.parse_test()?;
        if matches!(value, Expr::Name { .. }) && self.eat(&TokenKind::Assign) {
            return self.parse_test();
        }
        Ok(value)
    }

    /// The components of a subscript, covering plain indexes and slice
    /// forms like `a[1:2]` or `a[:, 0]`.
    fn parse_subscript(&mut self) -> Result<Vec<Expr>, SyntaxError> {
        let mut parts = Vec::new();
        loop {
            if self.at_test_start() {
                parts.push(self.parse_test()?);
            }
            if self.eat(&TokenKind::Colon) || self.eat(&TokenKind::Comma) {
                continue;
            }
            break;
        }
        Ok(parts)
    }

    fn parse_atom(&mut self) -> Result<Expr, SyntaxError> {
        let line = self.line();
        if let TokenKind::Name(name) = &self.peek().kind {
            let id = name.clone();
            self.advance();
            return Ok(Expr::Name { id, line });
        }
        if matches!(self.peek().kind, TokenKind::Number(_)) {
            self.advance();
            return Ok(Expr::Constant { line });
        }
        if matches!(self.peek().kind, TokenKind::Str(_)) {
            self.advance();
            // Implicit concatenation of adjacent literals.
            while matches!(self.peek().kind, TokenKind::Str(_)) {
                self.advance();
            }
            return Ok(Expr::Constant { line });
        }
        if self.eat(&TokenKind::NoneLit)
            || self.eat(&TokenKind::TrueLit)
            || self.eat(&TokenKind::FalseLit)
        {
            return Ok(Expr::Constant { line });
        }
        if self.eat(&TokenKind::LParen) {
            if self.eat(&TokenKind::RParen) {
                return Ok(Expr::Tuple {
                    elts: Vec::new(),
                    line,
                });
            }
            let inner = self.parse_testlist()?;
            self.expect(&TokenKind::RParen, "`)`")?;
            return Ok(inner);
        }
        if self.eat(&TokenKind::LBracket) {
            let mut elts = Vec::new();
            while !self.check(&TokenKind::RBracket) {
                elts.push(self.parse_test()?);
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RBracket, "`]`")?;
            return Ok(Expr::List { elts, line });
        }
        if self.eat(&TokenKind::LBrace) {
            return self.parse_brace_display(line);
        }
        Err(self.unexpected("an expression"))
    }

    /// `{}` is an empty dict; `{a: b}` a dict; `{a, b}` a set.
    fn parse_brace_display(&mut self, line: usize) -> Result<Expr, SyntaxError> {
        if self.eat(&TokenKind::RBrace) {
            return Ok(Expr::Dict {
                keys: Vec::new(),
                values: Vec::new(),
                line,
            });
        }
        let first = self.parse_test()?;
        if self.eat(&TokenKind::Colon) {
            let mut keys = vec![first];
            let mut values = vec![self.parse_test()?];
            while self.eat(&TokenKind::Comma) {
                if !self.at_test_start() {
                    break;
                }
                keys.push(self.parse_test()?);
                self.expect(&TokenKind::Colon, "`:`")?;
                values.push(self.parse_test()?);
            }
            self.expect(&TokenKind::RBrace, "`}`")?;
            return Ok(Expr::Dict { keys, values, line });
        }
        let mut elts = vec![first];
        while self.eat(&TokenKind::Comma) {
            if !self.at_test_start() {
                break;
            }
            elts.push(self.parse_test()?);
        }
        self.expect(&TokenKind::RBrace, "`}`")?;
        Ok(Expr::Set { elts, line })
    }

    // ---- token helpers ----

    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.current.min(last)]
    }

    fn line(&self) -> usize {
        self.peek().line
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek().kind == *kind
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.current < self.tokens.len() - 1 {
            self.current += 1;
        }
        token
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_name(&mut self, what: &str) -> Result<(String, usize), SyntaxError> {
        if let TokenKind::Name(name) = &self.peek().kind {
            let name = name.clone();
            let line = self.peek().line;
            self.advance();
            Ok((name, line))
        } else {
            Err(self.unexpected(what))
        }
    }

    fn unexpected(&self, what: &str) -> SyntaxError {
        SyntaxError::new(
            format!("expected {what}, found {}", describe(&self.peek().kind)),
            self.peek().line,
        )
    }
}

fn binary(op: BinOp, left: Expr, right: Expr, line: usize) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
        line,
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Name(name) => format!("name `{name}`"),
        TokenKind::Number(text) => format!("number `{text}`"),
        TokenKind::Str(_) => "string literal".to_string(),
        TokenKind::Newline => "end of line".to_string(),
        TokenKind::Indent => "indent".to_string(),
        TokenKind::Dedent => "dedent".to_string(),
        TokenKind::Eof => "end of file".to_string(),
        other => format!("`{other:?}`"),
    }
}
