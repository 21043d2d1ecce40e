//! Element stream utilities
//!
//! Predicates and skip functions the classifier and emitter use to walk an
//! [`ElementList`] without caring about layout elements.

use super::element::{ElementKind, ElementList};

impl<'a> ElementList<'a> {
    /// Index of the first element at or after `index` that is neither
    /// whitespace nor a line break.
    pub fn skip_blank(&self, index: usize) -> usize {
        self.skip_while(index, |kind| kind.is_blank())
    }

    /// Like [`skip_blank`](Self::skip_blank), but also skips semicolons.
    /// Used between phrases, where stray `;` carry no meaning.
    pub fn skip_separators(&self, index: usize) -> usize {
        self.skip_while(index, |kind| {
            kind.is_blank() || kind == ElementKind::Semicolon
        })
    }

    /// Index of the next significant element after `index`.
    pub fn next_significant(&self, index: usize) -> usize {
        self.skip_blank(index + 1)
    }

    /// Is the element at `index` the token `word`?
    pub fn is_word(&self, index: usize, word: &str) -> bool {
        self.kind(index) == ElementKind::Token && self.text(index) == word
    }

    /// Is the element at `index` one of the `struct`, `union` or `enum`
    /// keywords?
    pub fn is_aggregate_keyword(&self, index: usize) -> bool {
        ["struct", "union", "enum"]
            .iter()
            .any(|word| self.is_word(index, word))
    }

    pub fn is_typedef_keyword(&self, index: usize) -> bool {
        self.is_word(index, "typedef")
    }

    /// First index in `first..=last` whose kind is `kind`.
    pub fn find_kind(&self, first: usize, last: usize, kind: ElementKind) -> Option<usize> {
        (first..=last.min(self.last_index())).find(|&i| self.kind(i) == kind)
    }

    /// Walks back from `before` (exclusive) to the last element that is not
    /// blank or a comment. Returns `None` if there is none at or after
    /// `first`.
    pub fn last_code_before(&self, first: usize, before: usize) -> Option<usize> {
        (first..before.min(self.len()))
            .rev()
            .find(|&i| !self.kind(i).is_blank() && !self.kind(i).is_comment())
    }

    /// Number of line breaks inside the text of elements `first..=last`.
    pub fn count_line_breaks(&self, first: usize, last: usize) -> usize {
        count_line_breaks(self.span_text(first, last))
    }

    fn skip_while(&self, mut index: usize, skip: impl Fn(ElementKind) -> bool) -> usize {
        while index < self.last_index() && skip(self.kind(index)) {
            index += 1;
        }
        index.min(self.last_index())
    }
}

/// Counts the `\n` characters in `text`.
pub fn count_line_breaks(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
