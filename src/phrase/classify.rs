//! Phrase classifier
//!
//! Groups consecutive elements into one top-level [`Phrase`] using a small
//! deterministic automaton. The automaton reads the *kind* of each
//! significant element (whitespace and line breaks are always skipped) and
//! the whole transition table lives in [`transition`].
//!
//! # Grammar
//!
//! ```text
//! phrase        ::= ["*"] (preproc | line_comment | block_comment
//!                         | aggregate | typedef | declaration)
//! aggregate     ::= ("struct" | "union" | "enum") {any} ";"
//! typedef       ::= "typedef" {any} ";"
//! declaration   ::= tok {tok} ( ";"                      var_dec
//!                             | "(...)" ";"              fun_dec
//!                             | "(...)" "{...}"          fun_def
//!                             | "=" {any} ";"            var_def
//!                             | "[...]" {"[...]"} ";"    arr_dec
//!                             | "[...]" {"[...]"} "=" {any} ";" )   arr_def
//! ```
//!
//! Comments are transparent inside a declaration, but a comment that starts
//! a phrase is a phrase of its own.

use super::types::{Phrase, PhraseKind};
use crate::scanner::{ElementKind, ElementList};

/// Automaton state: what has been read so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    /// Read the public marker
    Public,
    /// Read one or more tokens
    Tokens,
    /// tokens `(...)`
    TokensParens,
    /// tokens `=`
    TokensAssign,
    /// tokens `[...]`
    TokensBrackets,
    /// tokens `[...]` `=`
    TokensBracketsAssign,
    /// `struct`, `union` or `enum`
    Aggregate,
    /// `typedef`
    Typedef,
}

/// Outcome of feeding one element to the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move on to the next significant element in the given state
    Continue(State),
    /// The current element completes a phrase of this kind
    Accept(PhraseKind),
    /// The current element does not fit any phrase shape
    Reject,
}

/// Keyword class of a token; only the first token of a phrase looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    None,
    /// `struct`, `union` or `enum`
    Aggregate,
    Typedef,
}

impl Keyword {
    fn of(elements: &ElementList<'_>, index: usize) -> Self {
        if elements.is_aggregate_keyword(index) {
            Keyword::Aggregate
        } else if elements.is_typedef_keyword(index) {
            Keyword::Typedef
        } else {
            Keyword::None
        }
    }
}

/// The transition table.
pub fn transition(state: State, kind: ElementKind, keyword: Keyword) -> Step {
    use ElementKind as K;
    use PhraseKind as P;
    use State as S;

    match (state, kind) {
        (S::Start, K::Public) => Step::Continue(S::Public),
        (S::Public, K::Public) => Step::Reject,
        (S::Start | S::Public, K::Token) => match keyword {
            Keyword::Aggregate => Step::Continue(S::Aggregate),
            Keyword::Typedef => Step::Continue(S::Typedef),
            Keyword::None => Step::Continue(S::Tokens),
        },
        (S::Start | S::Public, K::Directive) => Step::Accept(P::Preprocessor),
        (S::Start | S::Public, K::LineComment) => Step::Accept(P::LineComment),
        (S::Start | S::Public, K::BlockComment) => Step::Accept(P::BlockComment),
        (S::Start | S::Public, _) => Step::Reject,

        // Nothing is completed by running out of input
        (_, K::EndOfSource) => Step::Reject,

        (S::Tokens, K::Token) => Step::Continue(S::Tokens),
        (S::Tokens, K::Semicolon) => Step::Accept(P::VariableDeclaration),
        (S::Tokens, K::Parens) => Step::Continue(S::TokensParens),
        (S::Tokens, K::Assign) => Step::Continue(S::TokensAssign),
        (S::Tokens, K::Brackets) => Step::Continue(S::TokensBrackets),

        (S::TokensParens, K::Semicolon) => Step::Accept(P::FunctionDeclaration),
        (S::TokensParens, K::Braces) => Step::Accept(P::FunctionDefinition),

        (S::TokensBrackets, K::Semicolon) => Step::Accept(P::ArrayDeclaration),
        (S::TokensBrackets, K::Brackets) => Step::Continue(S::TokensBrackets),
        (S::TokensBrackets, K::Assign) => Step::Continue(S::TokensBracketsAssign),

        (S::Tokens | S::TokensParens | S::TokensBrackets, k) if k.is_comment() => {
            Step::Continue(state)
        }
        (S::Tokens | S::TokensParens | S::TokensBrackets, _) => Step::Reject,

        (S::TokensAssign, K::Semicolon) => Step::Accept(P::VariableDefinition),
        (S::TokensBracketsAssign, K::Semicolon) => Step::Accept(P::ArrayDefinition),
        (S::Aggregate, K::Semicolon) => Step::Accept(P::StructUnionEnum),
        (S::Typedef, K::Semicolon) => Step::Accept(P::TypeDefinition),

        // Opaque runs up to the terminating semicolon
        (S::TokensAssign | S::TokensBracketsAssign | S::Aggregate | S::Typedef, _) => {
            Step::Continue(state)
        }
    }
}

/// Classify the phrase starting at `start`.
///
/// Leading whitespace and line breaks are skipped. The returned phrase
/// starts at the first significant element and ends at the element that
/// completed (or broke) recognition.
pub fn classify_phrase(elements: &ElementList<'_>, start: usize) -> Phrase {
    let first = elements.skip_blank(start);
    let mut index = first;
    let mut state = State::Start;
    let mut is_public = false;

    loop {
        let kind = elements.kind(index);
        match transition(state, kind, Keyword::of(elements, index)) {
            Step::Continue(next) => {
                if next == State::Public {
                    is_public = true;
                }
                state = next;
                index = elements.next_significant(index);
            }
            Step::Accept(kind) => {
                return Phrase {
                    kind,
                    is_public,
                    first,
                    last: index,
                };
            }
            Step::Reject => {
                return Phrase {
                    kind: PhraseKind::Error,
                    is_public,
                    first,
                    last: index,
                };
            }
        }
    }
}

/// Human-readable reason for an error phrase, based on the element that
/// broke recognition.
pub fn error_message(elements: &ElementList<'_>, phrase: &Phrase) -> String {
    match elements.kind(phrase.last) {
        // A second marker right after the first one
        ElementKind::Public
            if phrase.is_public && phrase.last == elements.next_significant(phrase.first) =>
        {
            "duplicate public marker".to_string()
        }
        ElementKind::Token => format!("unexpected token '{}'", elements.text(phrase.last)),
        kind => format!("unexpected {}", kind),
    }
}

/// Iterator over the phrases of an element list, in source order.
///
/// Separators (whitespace, line breaks, stray semicolons) between phrases are
/// skipped. Each phrase is classified on demand starting after the previous
/// one; an error phrase is yielded like any other.
pub struct Phrases<'l, 'a> {
    elements: &'l ElementList<'a>,
    next: usize,
}

impl<'l, 'a> Phrases<'l, 'a> {
    pub fn new(elements: &'l ElementList<'a>) -> Self {
        Self { elements, next: 0 }
    }
}

impl<'l, 'a> Iterator for Phrases<'l, 'a> {
    type Item = Phrase;

    fn next(&mut self) -> Option<Phrase> {
        let start = self.elements.skip_separators(self.next);
        if self.elements.kind(start) == ElementKind::EndOfSource {
            self.next = start;
            return None;
        }
        let phrase = classify_phrase(self.elements, start);
        self.next = phrase.last + 1;
        Some(phrase)
    }
}
