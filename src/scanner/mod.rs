//! Source scanner
//!
//! This module turns C-like source text into a flat, gap-free element
//! sequence:
//! - [`element`]: Element kinds, spans and the [`ElementList`] container
//! - [`lexer`]: The character-level [`Scanner`] (source text → elements)
//! - [`stream`]: Skip functions and predicates over an element list
//!
//! The scanner is not a C tokenizer. It only recognises the handful of
//! shapes the phrase classifier needs (groups, comments, directives, `;`,
//! `=`, the public marker) and folds everything else into tokens.

pub mod element;
pub mod lexer;
pub mod stream;

pub use element::{Element, ElementKind, ElementList};
pub use lexer::{scan, ScanError, ScanErrorKind, Scanner};
