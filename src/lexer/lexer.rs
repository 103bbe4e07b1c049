use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_SINGLE_CHAR_HANDLER, MK_TOKEN,
};

use super::tokens::{
    is_delimiter, is_operator_symbol, is_whitespace, Token, TokenKind, RESERVED_KEYWORDS,
    VALID_OPERATORS,
};

lazy_static! {
    static ref IDENTIFIER_RUN: Regex = Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap();
    static ref DIGIT_RUN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref OPERATOR_RUN: Regex = Regex::new("^[-+*/=<>!]+").unwrap();
}

pub type ScanHandler = for<'src> fn(&mut Lexer<'src>);

/// One entry of the dispatch table: the first rule whose `accepts` holds for
/// the character under the cursor runs its handler.
#[derive(Clone, Copy)]
pub struct ScanRule {
    accepts: fn(char) -> bool,
    handler: ScanHandler,
}

static SCAN_RULES: [ScanRule; 8] = [
    ScanRule { accepts: is_whitespace, handler: skip_handler },
    ScanRule { accepts: is_ascii_letter, handler: symbol_handler },
    ScanRule { accepts: is_nonzero_digit, handler: number_handler },
    ScanRule { accepts: is_operator_symbol, handler: operator_handler },
    ScanRule { accepts: is_backslash, handler: comment_handler },
    ScanRule { accepts: is_delimiter, handler: delimiter_handler },
    ScanRule { accepts: is_semicolon, handler: semicolon_handler },
    ScanRule { accepts: is_quote, handler: string_handler },
];

fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

// A lone '0' never starts a number; it falls through to the fallback.
fn is_nonzero_digit(ch: char) -> bool {
    ch.is_ascii_digit() && ch != '0'
}

fn is_backslash(ch: char) -> bool {
    ch == '\\'
}

fn is_semicolon(ch: char) -> bool {
    ch == ';'
}

fn is_quote(ch: char) -> bool {
    ch == '"'
}

/// Tokens produced by one scan, with a diagnostic for every `Error` token.
#[derive(Debug, Clone)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

impl Scanned {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Fails with the first diagnostic if any token is an `Error`.
    pub fn into_result(self) -> Result<Vec<Token>, Error> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}

/// Scan state. The cursor is a byte offset that always sits on a char
/// boundary and never moves backwards.
#[derive(Clone)]
pub struct Lexer<'src> {
    rules: &'static [ScanRule],
    tokens: Vec<Token>,
    errors: Vec<Error>,
    source: &'src str,
    pos: usize,
    file: Rc<String>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Lexer<'src> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            rules: &SCAN_RULES,
            tokens: vec![],
            errors: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Steps over the current character. Does nothing at the end of input.
    pub fn bump(&mut self) {
        if let Some(ch) = self.at() {
            self.pos += ch.len_utf8();
        }
    }

    /// Consumes the match of an anchored pattern and returns its length.
    fn eat_run(&mut self, pattern: &Regex) -> usize {
        let len = pattern.find(self.remainder()).map_or(0, |m| m.end());
        self.pos += len;
        len
    }

    fn at_matches(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.at().is_some_and(predicate)
    }

    fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Rc::clone(&self.file))
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: self.position(start),
            end: self.position(end),
        }
    }

    /// Emits a token over `start..pos`.
    pub fn push(&mut self, kind: TokenKind, start: usize) {
        self.push_span(kind, start, self.pos);
    }

    fn push_span(&mut self, kind: TokenKind, start: usize, end: usize) {
        let value = String::from(&self.source[start..end]);
        let span = self.span(start, end);
        self.tokens.push(MK_TOKEN!(kind, value, span));
    }

    /// Emits an `Error` token over `start..end` and records why.
    fn push_error_span(
        &mut self,
        start: usize,
        end: usize,
        cause: impl FnOnce(String) -> ErrorImpl,
    ) {
        let error_impl = cause(String::from(&self.source[start..end]));
        tracing::trace!(offset = start, error = %error_impl, "lexical error");
        self.errors.push(Error::new(error_impl, self.position(start)));
        self.push_span(TokenKind::Error, start, end);
    }

    fn push_error(&mut self, start: usize, cause: impl FnOnce(String) -> ErrorImpl) {
        self.push_error_span(start, self.pos, cause);
    }

    /// Consumes the whole buffer.
    pub fn scan(mut self) -> Scanned {
        while let Some(ch) = self.at() {
            let before = self.pos;

            match self.rules.iter().find(|rule| (rule.accepts)(ch)).copied() {
                Some(rule) => (rule.handler)(&mut self),
                None => unrecognised_handler(&mut self),
            }

            debug_assert!(self.pos > before, "scan handler did not advance at {}", before);
        }

        Scanned {
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}

fn skip_handler(lexer: &mut Lexer<'_>) {
    lexer.bump();
}

fn symbol_handler(lexer: &mut Lexer<'_>) {
    let start = lexer.pos;
    lexer.eat_run(&IDENTIFIER_RUN);

    if RESERVED_KEYWORDS.contains(&lexer.source[start..lexer.pos]) {
        lexer.push(TokenKind::Keyword, start);
    } else {
        lexer.push(TokenKind::Identifier, start);
    }
}

// Digits running into letters report only the digits; the letters are
// scanned again as an identifier.
fn number_handler(lexer: &mut Lexer<'_>) {
    let start = lexer.pos;
    lexer.eat_run(&DIGIT_RUN);

    if lexer.at_matches(|c| c.is_ascii_alphabetic()) {
        lexer.push_error(start, |token| ErrorImpl::MalformedNumber { token });
        return;
    }

    if lexer.at() != Some('.') {
        lexer.push(TokenKind::Int, start);
        return;
    }

    lexer.bump();
    if lexer.at_matches(|c| !c.is_ascii_digit()) {
        lexer.push_error(start, |token| ErrorImpl::MalformedNumber { token });
        return;
    }

    lexer.eat_run(&DIGIT_RUN);
    if lexer.at_matches(|c| c.is_ascii_alphabetic()) {
        lexer.push_error(start, |token| ErrorImpl::MalformedNumber { token });
        return;
    }

    lexer.push(TokenKind::Double, start);
}

fn operator_handler(lexer: &mut Lexer<'_>) {
    let start = lexer.pos;
    lexer.eat_run(&OPERATOR_RUN);

    if VALID_OPERATORS.contains(&lexer.source[start..lexer.pos]) {
        lexer.push(TokenKind::Operator, start);
    } else {
        lexer.push_error(start, |token| ErrorImpl::InvalidOperator { token });
    }
}

// After a '*' that is not closed by a backslash, the loop steps over the
// following character before it looks for the next '*'.
fn comment_handler(lexer: &mut Lexer<'_>) {
    let start = lexer.pos;
    lexer.bump();

    if lexer.at() != Some('*') {
        // The character after the stray backslash is consumed but not reported.
        lexer.bump();
        lexer.push_error_span(start, start + 1, |token| ErrorImpl::MalformedComment { token });
        return;
    }

    while !lexer.at_eof() {
        lexer.bump();
        if lexer.at() == Some('*') {
            lexer.bump();
            if lexer.at() == Some('\\') {
                lexer.bump();
                tracing::trace!(start, end = lexer.pos, "discarded comment");
                return;
            }
        }
    }

    lexer.push_error(start, |token| ErrorImpl::UnterminatedComment { token });
}

MK_SINGLE_CHAR_HANDLER!(delimiter_handler, TokenKind::Delimiter);
MK_SINGLE_CHAR_HANDLER!(semicolon_handler, TokenKind::Semicolon);

// No escapes: a backslash inside a string is an ordinary character.
fn string_handler(lexer: &mut Lexer<'_>) {
    let start = lexer.pos;
    lexer.bump();

    if lexer.at_eof() {
        lexer.push_error(start, |token| ErrorImpl::UnterminatedString { token });
        return;
    }

    while lexer.at() != Some('"') {
        lexer.bump();
        if lexer.at_eof() {
            lexer.push_error(start, |token| ErrorImpl::UnterminatedString { token });
            return;
        }
    }
    lexer.bump();

    lexer.push(TokenKind::String, start);
}

fn unrecognised_handler(lexer: &mut Lexer<'_>) {
    let start = lexer.pos;
    lexer.bump();
    lexer.push_error(start, |token| ErrorImpl::UnrecognisedCharacter { token });
}

/// Scans `source` into tokens plus one diagnostic per `Error` token.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn scan(source: &str, file: Option<String>) -> Scanned {
    let scanned = Lexer::new(source, file).scan();
    tracing::debug!(
        tokens = scanned.tokens.len(),
        errors = scanned.errors.len(),
        "tokenized"
    );
    scanned
}

/// Every token in source order. Malformed spans show up as `Error` tokens;
/// comments and whitespace produce nothing.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    scan(source, file).tokens
}

/// Like `tokenize`, but any `Error` token fails the whole input.
pub fn tokenize_checked(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    scan(source, file).into_result()
}
