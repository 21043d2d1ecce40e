//! Phrase classification
//!
//! - [`types`]: [`Phrase`] and [`PhraseKind`]
//! - [`classify`]: The state machine that recognises one phrase at a time,
//!   and the [`Phrases`] iterator that walks a whole element list
//!
//! This is not a C parser. Declarations are recognised by the *shape* of
//! their element sequence (tokens, then a group, then `;` or a body), so
//! `int i, j;` is one variable declaration and function-pointer declarations
//! are whatever their outer shape says.

pub mod classify;
pub mod types;

pub use classify::{classify_phrase, error_message, Phrases};
pub use types::{Phrase, PhraseKind};
