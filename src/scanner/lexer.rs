//! Character-level scanner for C-like source
//!
//! Turns raw source text into the gap-free [`Element`] sequence consumed by
//! the phrase classifier. Unlike a conventional C lexer nothing is dropped:
//! whitespace, line breaks and comments all become elements so that the
//! emitter can reproduce the input byte for byte.
//!
//! # Indentation region
//!
//! A line starts in the *indentation region*. Whitespace and block comments
//! keep the scanner in it, a line break re-enters it, and most other
//! elements leave it. Inside the region `*` is the public marker and `#`
//! starts a preprocessor directive; outside it both are ordinary token
//! characters. The marker itself does not leave the region, so `*#include`
//! is a public directive.
//!
//! # Groups
//!
//! `(`, `[` and `{` open a balanced group. The scanner keeps scanning
//! elements after the opener until the matching closer and returns the whole
//! group as a single element. Nested openers go on a stack owned by the
//! group scan, and the region flag lives in the [`Scanner`] value, so there
//! is no process-wide state.

use super::element::{Element, ElementKind, ElementList};
use std::fmt;

/// What went wrong while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    UnterminatedString,
    UnterminatedChar,
    UnterminatedBlockComment,
    UnterminatedBraces,
    MismatchedBraces,
}

impl ScanErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            ScanErrorKind::UnterminatedString => "unterminated string literal",
            ScanErrorKind::UnterminatedChar => "unterminated character literal",
            ScanErrorKind::UnterminatedBlockComment => "unterminated block comment",
            ScanErrorKind::UnterminatedBraces => "unterminated braces",
            ScanErrorKind::MismatchedBraces => "braces do not match",
        }
    }
}

/// Scanner error type
///
/// `offset` is the byte position the error is reported at: the opening
/// quote, comment or brace for unterminated constructs, the offending closer
/// for mismatched braces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub offset: usize,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for ScanError {}

/// Scanner for one source unit
pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    /// Are we in the indentation region at the beginning of a line?
    indent: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of a line.
    pub fn new(source: &'a str) -> Self {
        Self::with_indentation(source, true)
    }

    /// Create a scanner with an explicit indentation-region state.
    pub fn with_indentation(source: &'a str, indent: bool) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            indent,
        }
    }

    /// Scan the whole source into an element list ending with end-of-source.
    pub fn scan_all(&mut self) -> Result<ElementList<'a>, ScanError> {
        self.indent = true;
        let mut elements = Vec::new();
        let mut position = 0;

        loop {
            let element = self.scan_one(position)?;
            elements.push(element);
            if element.kind == ElementKind::EndOfSource {
                break;
            }
            position = element.end;
        }

        Ok(ElementList::new(self.source, elements))
    }

    /// Scan the single element starting exactly at `start`.
    ///
    /// The next element starts at the returned element's `end`.
    pub fn scan_one(&mut self, start: usize) -> Result<Element, ScanError> {
        let Some(c) = self.byte_at(start) else {
            let end = start.min(self.bytes.len());
            return Ok(Element::new(ElementKind::EndOfSource, end, end));
        };
        let next = start + 1;

        match c {
            b'\n' => {
                self.indent = true;
                Ok(Element::new(ElementKind::LineBreak, start, next))
            }
            b'*' => {
                let kind = if self.indent {
                    ElementKind::Public
                } else {
                    ElementKind::Token
                };
                Ok(Element::new(kind, start, next))
            }
            b';' => {
                self.indent = false;
                Ok(Element::new(ElementKind::Semicolon, start, next))
            }
            b'=' => {
                self.indent = false;
                Ok(Element::new(ElementKind::Assign, start, next))
            }
            b'#' => {
                if !self.indent {
                    return Ok(Element::new(ElementKind::Token, start, next));
                }
                self.indent = false;
                Ok(self.directive(start))
            }
            // The region state does not change for whitespace
            b' ' | b'\t' | b'\r' => Ok(self.whitespace(start)),
            b'"' => {
                self.indent = false;
                self.quoted(start, b'"', ScanErrorKind::UnterminatedString)
            }
            b'\'' => {
                self.indent = false;
                self.quoted(start, b'\'', ScanErrorKind::UnterminatedChar)
            }
            b'/' => match self.byte_at(next) {
                Some(b'/') => {
                    self.indent = false;
                    Ok(self.line_comment(start))
                }
                // The region state does not change for block comments
                Some(b'*') => self.block_comment(start),
                _ => {
                    self.indent = false;
                    Ok(Element::new(ElementKind::Token, start, next))
                }
            },
            b'(' | b'{' | b'[' => {
                self.indent = false;
                self.group(start, c)
            }
            b')' | b'}' | b']' => {
                self.indent = false;
                Ok(Element::new(ElementKind::Closing, start, next))
            }
            _ => {
                self.indent = false;
                Ok(self.token(start))
            }
        }
    }

    /// `#...` up to the next line break that is not escaped by a backslash.
    fn directive(&self, start: usize) -> Element {
        let mut pos = start + 1;
        while let Some(c) = self.byte_at(pos) {
            if let Some(len) = self.continuation_len(pos) {
                pos += len;
                continue;
            }
            if c == b'\n' {
                break;
            }
            pos += 1;
        }
        Element::new(ElementKind::Directive, start, pos)
    }

    fn whitespace(&self, start: usize) -> Element {
        let mut pos = start + 1;
        while let Some(c) = self.byte_at(pos) {
            if let Some(len) = self.continuation_len(pos) {
                pos += len;
                continue;
            }
            if !is_space(c) {
                break;
            }
            pos += 1;
        }
        Element::new(ElementKind::Whitespace, start, pos)
    }

    /// String and character literals. Both become a single token.
    fn quoted(
        &self,
        start: usize,
        delimiter: u8,
        unterminated: ScanErrorKind,
    ) -> Result<Element, ScanError> {
        let mut escape = false;
        let mut pos = start + 1;

        while let Some(c) = self.byte_at(pos) {
            if !escape && c == delimiter {
                return Ok(Element::new(ElementKind::Token, start, pos + 1));
            }
            escape = c == b'\\' && !escape;
            pos += 1;
        }

        Err(ScanError::new(unterminated, start))
    }

    /// `// ...` up to (not including) the line break. No continuations.
    fn line_comment(&self, start: usize) -> Element {
        let mut pos = start + 2;
        while let Some(c) = self.byte_at(pos) {
            if c == b'\n' {
                break;
            }
            pos += 1;
        }
        Element::new(ElementKind::LineComment, start, pos)
    }

    fn block_comment(&self, start: usize) -> Result<Element, ScanError> {
        let mut pos = start + 2;
        while let Some(c) = self.byte_at(pos) {
            if c == b'*' && self.byte_at(pos + 1) == Some(b'/') {
                return Ok(Element::new(ElementKind::BlockComment, start, pos + 2));
            }
            pos += 1;
        }
        Err(ScanError::new(ScanErrorKind::UnterminatedBlockComment, start))
    }

    /// Balanced group starting with `open` at `start`.
    ///
    /// Nested groups are tracked on an explicit stack of `(opener, offset)`
    /// pairs, so nesting depth is bounded by memory only.
    fn group(&mut self, start: usize, open: u8) -> Result<Element, ScanError> {
        let mut open_groups = vec![(open, start)];
        let mut pos = start + 1;

        while let Some(&(innermost, innermost_at)) = open_groups.last() {
            match self.byte_at(pos) {
                None => {
                    return Err(ScanError::new(
                        ScanErrorKind::UnterminatedBraces,
                        innermost_at,
                    ))
                }
                Some(c @ (b'(' | b'{' | b'[')) => {
                    self.indent = false;
                    open_groups.push((c, pos));
                    pos += 1;
                }
                Some(c @ (b')' | b'}' | b']')) => {
                    self.indent = false;
                    if !braces_match(innermost, c) {
                        return Err(ScanError::new(ScanErrorKind::MismatchedBraces, pos));
                    }
                    open_groups.pop();
                    pos += 1;
                }
                Some(_) => pos = self.scan_one(pos)?.end,
            }
        }

        let kind = match open {
            b'(' => ElementKind::Parens,
            b'{' => ElementKind::Braces,
            _ => ElementKind::Brackets,
        };
        Ok(Element::new(kind, start, pos))
    }

    /// Anything else, up to the first character that starts another element.
    fn token(&self, start: usize) -> Element {
        let mut pos = start + 1;
        while let Some(c) = self.byte_at(pos) {
            if ends_token(c) {
                break;
            }
            pos += 1;
        }
        Element::new(ElementKind::Token, start, pos)
    }

    /// Length of a backslash immediately followed by a line break (`\n` or
    /// `\r\n`) at `pos`.
    fn continuation_len(&self, pos: usize) -> Option<usize> {
        if self.byte_at(pos) != Some(b'\\') {
            return None;
        }
        match (self.byte_at(pos + 1), self.byte_at(pos + 2)) {
            (Some(b'\n'), _) => Some(2),
            (Some(b'\r'), Some(b'\n')) => Some(3),
            _ => None,
        }
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }
}

/// Scan `source` from the beginning.
pub fn scan(source: &str) -> Result<ElementList<'_>, ScanError> {
    Scanner::new(source).scan_all()
}

/// Checks whether `open` is an opening brace and `close` the matching closer.
pub fn braces_match(open: u8, close: u8) -> bool {
    matches!((open, close), (b'(', b')') | (b'{', b'}') | (b'[', b']'))
}

fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r')
}

// Every byte here is ASCII, so a token never ends inside a UTF-8 sequence.
fn ends_token(c: u8) -> bool {
    matches!(
        c,
        b' ' | b'\t'
            | b'\r'
            | b'\n'
            | b';'
            | b'='
            | b'/'
            | b'\\'
            | b'"'
            | b'\''
            | b'('
            | b'{'
            | b'['
            | b')'
            | b'}'
            | b']'
    )
}
