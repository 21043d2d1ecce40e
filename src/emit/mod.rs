//! Output builders
//!
//! Both builders walk the same phrase sequence from start to end:
//! - [`header`]: public phrases only, reduced to declarations and wrapped in
//!   an include guard
//! - [`implementation`]: every phrase in source order with the text between
//!   phrases preserved, private functions and variables made `static`
//!
//! An error phrase aborts either pass.

pub mod header;
pub mod implementation;

pub use header::build_header;
pub use implementation::build_implementation;

use crate::config::GUARD_SUFFIX;
use crate::phrase::Phrase;
use crate::scanner::{ElementKind, ElementList};

/// Include guard macro for `unit`: uppercased, every character that cannot
/// appear in an identifier replaced by `_`.
pub fn include_guard(unit: &str) -> String {
    let mut guard: String = unit
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if guard.starts_with(|c: char| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }
    guard.push_str(GUARD_SUFFIX);
    guard
}

/// Name of a declared or defined function: the last token before the
/// parameter list.
pub fn function_name<'a>(elements: &ElementList<'a>, phrase: &Phrase) -> Option<&'a str> {
    let first = phrase.body_start();
    let params = elements.find_kind(first, phrase.last, ElementKind::Parens)?;
    (first..params)
        .rev()
        .find(|&i| elements.kind(i) == ElementKind::Token)
        .map(|i| elements.text(i))
}

/// Text of the phrase from `first` up to the first element of kind `stop`,
/// with trailing whitespace, line breaks and comments dropped.
fn prefix_before<'a>(
    elements: &ElementList<'a>,
    first: usize,
    last: usize,
    stop: ElementKind,
) -> &'a str {
    let stop = elements.find_kind(first, last, stop).unwrap_or(last);
    match elements.last_code_before(first, stop) {
        Some(end) => elements.span_text(first, end),
        None => "",
    }
}
