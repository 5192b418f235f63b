//! Hand-written lexer for the analyzed language.
//!
//! Produces an indentation-aware token stream: leading whitespace of each
//! logical line is translated into `Indent`/`Dedent` tokens, newlines inside
//! brackets are suppressed, and blank or comment-only lines produce no
//! tokens at all.

use crate::syntax::parser::SyntaxError;
use crate::syntax::token::{Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    /// Indentation stack, in leading-space counts. Always starts with 0.
    indents: Vec<usize>,
    /// Nesting depth of `()`, `[]` and `{}`.
    paren_depth: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            indents: vec![0],
            paren_depth: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source, returning all tokens or the first error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut at_line_start = true;
        loop {
            if at_line_start && self.paren_depth == 0 {
                self.handle_indentation()?;
                at_line_start = false;
            }
            let Some(c) = self.peek() else { break };
            match c {
                ' ' | '\t' | '\r' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                    if self.paren_depth == 0 {
                        self.push(TokenKind::Newline, self.line - 1);
                        at_line_start = true;
                    }
                }
                '\\' => self.line_continuation()?,
                '#' => self.skip_comment(),
                '\'' | '"' => self.lex_string()?,
                c if c.is_ascii_digit() => self.lex_number(),
                c if is_name_start(c) => self.lex_name()?,
                _ => self.lex_operator()?,
            }
        }

        // Close the last logical line and any open blocks.
        let mid_line = !matches!(
            self.tokens.last().map(|t| &t.kind),
            None | Some(TokenKind::Newline) | Some(TokenKind::Dedent)
        );
        if mid_line {
            self.push(TokenKind::Newline, self.line);
        }
        while self.indents.len() > 1 {
            self.indents.pop();
            self.push(TokenKind::Dedent, self.line);
        }
        self.push(TokenKind::Eof, self.line);
        Ok(self.tokens)
    }

    /// Measure the indentation of the next logical line, skipping blank and
    /// comment-only lines, and emit `Indent`/`Dedent` tokens as needed.
    fn handle_indentation(&mut self) -> Result<(), SyntaxError> {
        loop {
            let mut width = 0usize;
            loop {
                match self.peek() {
                    Some(' ') => {
                        self.advance();
                        width += 1;
                    }
                    Some('\t') => {
                        return Err(SyntaxError::new("tab character in indentation", self.line));
                    }
                    _ => break,
                }
            }
            match self.peek() {
                None => return Ok(()),
                Some('\r') => {
                    self.advance();
                }
                Some('\n') => {
                    self.advance();
                    self.line += 1;
                }
                Some('#') => self.skip_comment(),
                Some(_) => {
                    self.apply_indent(width)?;
                    return Ok(());
                }
            }
        }
    }

    fn apply_indent(&mut self, width: usize) -> Result<(), SyntaxError> {
        let current = self.indents.last().copied().unwrap_or(0);
        if width > current {
            self.indents.push(width);
            self.push(TokenKind::Indent, self.line);
        } else if width < current {
            while let Some(&top) = self.indents.last() {
                if top <= width {
                    break;
                }
                self.indents.pop();
                self.push(TokenKind::Dedent, self.line);
            }
            if self.indents.last().copied().unwrap_or(0) != width {
                return Err(SyntaxError::new(
                    "unindent does not match any outer indentation level",
                    self.line,
                ));
            }
        }
        Ok(())
    }

    fn line_continuation(&mut self) -> Result<(), SyntaxError> {
        self.advance();
        if self.peek() == Some('\r') {
            self.advance();
        }
        match self.peek() {
            Some('\n') => {
                self.advance();
                self.line += 1;
                Ok(())
            }
            _ => Err(SyntaxError::new(
                "unexpected character after line continuation",
                self.line,
            )),
        }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn lex_string(&mut self) -> Result<(), SyntaxError> {
        let start_line = self.line;
        let quote = match self.peek() {
            Some(q) => q,
            None => return Err(SyntaxError::new("unterminated string literal", start_line)),
        };
        self.advance();
        let triple = self.peek() == Some(quote) && self.peek_at(1) == Some(quote);
        let mut value = String::new();
        if triple {
            self.advance();
            self.advance();
            loop {
                match self.peek() {
                    None => {
                        return Err(SyntaxError::new("unterminated string literal", start_line));
                    }
                    Some(c)
                        if c == quote
                            && self.peek_at(1) == Some(quote)
                            && self.peek_at(2) == Some(quote) =>
                    {
                        self.advance();
                        self.advance();
                        self.advance();
                        break;
                    }
                    Some('\\') => {
                        self.advance();
                        if let Some(escaped) = self.peek() {
                            if escaped == '\n' {
                                self.line += 1;
                            }
                            value.push(escaped);
                            self.advance();
                        }
                    }
                    Some('\n') => {
                        value.push('\n');
                        self.line += 1;
                        self.advance();
                    }
                    Some(c) => {
                        value.push(c);
                        self.advance();
                    }
                }
            }
        } else {
            loop {
                match self.peek() {
                    None | Some('\n') => {
                        return Err(SyntaxError::new("unterminated string literal", start_line));
                    }
                    Some(c) if c == quote => {
                        self.advance();
                        break;
                    }
                    Some('\\') => {
                        self.advance();
                        match self.peek() {
                            Some('\n') => {
                                self.line += 1;
                                self.advance();
                            }
                            Some(escaped) => {
                                value.push(escaped);
                                self.advance();
                            }
                            None => {
                                return Err(SyntaxError::new(
                                    "unterminated string literal",
                                    start_line,
                                ));
                            }
                        }
                    }
                    Some(c) => {
                        value.push(c);
                        self.advance();
                    }
                }
            }
        }
        self.push(TokenKind::Str(value), start_line);
        Ok(())
    }

    fn lex_number(&mut self) {
        let start_line = self.line;
        let mut text = String::new();
        let mut saw_dot = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                text.push(c);
                self.advance();
            } else if c == '.'
                && !saw_dot
                && self.peek_at(1).is_some_and(|d| d.is_ascii_digit())
            {
                saw_dot = true;
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        self.push(TokenKind::Number(text), start_line);
    }

    fn lex_name(&mut self) -> Result<(), SyntaxError> {
        let start_line = self.line;
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if is_name_continue(c) {
                word.push(c);
                self.advance();
            } else {
                break;
            }
        }
        // Prefixed string literals such as r"..." or f'...'
        if matches!(self.peek(), Some('\'') | Some('"')) && is_string_prefix(&word) {
            return self.lex_string();
        }
        match TokenKind::keyword(&word) {
            Some(kind) => self.push(kind, start_line),
            None => self.push(TokenKind::Name(word), start_line),
        }
        Ok(())
    }

    fn lex_operator(&mut self) -> Result<(), SyntaxError> {
        let line = self.line;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(()),
        };
        self.advance();
        let kind = match c {
            '(' => {
                self.paren_depth += 1;
                TokenKind::LParen
            }
            ')' => {
                self.paren_depth = self.paren_depth.saturating_sub(1);
                TokenKind::RParen
            }
            '[' => {
                self.paren_depth += 1;
                TokenKind::LBracket
            }
            ']' => {
                self.paren_depth = self.paren_depth.saturating_sub(1);
                TokenKind::RBracket
            }
            '{' => {
                self.paren_depth += 1;
                TokenKind::LBrace
            }
            '}' => {
                self.paren_depth = self.paren_depth.saturating_sub(1);
                TokenKind::RBrace
            }
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '@' => TokenKind::At,
            '~' => TokenKind::Tilde,
            '+' => {
                if self.eat('=') {
                    TokenKind::PlusAssign
                } else {
                    TokenKind::Plus
                }
            }
            '-' => {
                if self.eat('=') {
                    TokenKind::MinusAssign
                } else if self.eat('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '*' => {
                if self.eat('*') {
                    TokenKind::DoubleStar
                } else if self.eat('=') {
                    TokenKind::StarAssign
                } else {
                    TokenKind::Star
                }
            }
            '/' => {
                if self.eat('/') {
                    if self.eat('=') {
                        TokenKind::DoubleSlashAssign
                    } else {
                        TokenKind::DoubleSlash
                    }
                } else if self.eat('=') {
                    TokenKind::SlashAssign
                } else {
                    TokenKind::Slash
                }
            }
            '%' => {
                if self.eat('=') {
                    TokenKind::PercentAssign
                } else {
                    TokenKind::Percent
                }
            }
            '&' => {
                if self.eat('=') {
                    TokenKind::AmpAssign
                } else {
                    TokenKind::Amp
                }
            }
            '|' => {
                if self.eat('=') {
                    TokenKind::PipeAssign
                } else {
                    TokenKind::Pipe
                }
            }
            '^' => {
                if self.eat('=') {
                    TokenKind::CaretAssign
                } else {
                    TokenKind::Caret
                }
            }
            '=' => {
                if self.eat('=') {
                    TokenKind::Eq
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                if self.eat('=') {
                    TokenKind::NotEq
                } else {
                    return Err(SyntaxError::new("unexpected character `!`", line));
                }
            }
            '<' => {
                if self.eat('=') {
                    TokenKind::Le
                } else if self.eat('<') {
                    TokenKind::Shl
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.eat('=') {
                    TokenKind::Ge
                } else if self.eat('>') {
                    TokenKind::Shr
                } else {
                    TokenKind::Gt
                }
            }
            other => {
                return Err(SyntaxError::new(
                    format!("unexpected character `{other}`"),
                    line,
                ));
            }
        };
        self.push(kind, line);
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, line: usize) {
        self.tokens.push(Token::new(kind, line));
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }
}

fn is_name_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_name_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn is_string_prefix(word: &str) -> bool {
    matches!(
        word.to_ascii_lowercase().as_str(),
        "r" | "b" | "u" | "f" | "rb" | "br" | "fr" | "rf"
    )
}
