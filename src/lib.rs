//! # Introduction
//!
//! headify splits a single C source unit into a public header and an
//! implementation file. Instead of maintaining a header by hand, the author
//! marks exported declarations with a `*` in the indentation region of the
//! line:
//!
//! ```text
//! *int add(int a, int b) { return a + b; }   // exported
//! int counter = 0;                           // private, becomes static
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Elements → Phrase classifier → Phrases → Emitter
//!                                                     ├→ header
//!                                                     └→ implementation
//! ```
//!
//! 1. [`scanner`] splits the source into a gap-free sequence of typed
//!    spans (tokens, groups, comments, directives, markers).
//! 2. [`phrase`] groups elements into top-level declarations and tags
//!    each as public or private.
//! 3. [`emit`] builds the header (public declarations inside an include
//!    guard) and the implementation (everything, private symbols made
//!    `static`, line numbers unchanged).
//!
//! [`headify`] runs the whole pipeline on one unit. Either both outputs are
//! produced or a [`HeadifyError`] says where the input went wrong.

pub mod config;
pub mod emit;
pub mod error;
pub mod phrase;
pub mod scanner;
pub mod unit;

pub use config::Options;
pub use error::{HeadifyError, SourceLocation};

use log::debug;
use phrase::{PhraseKind, Phrases};
use rustc_hash::FxHashMap;
use scanner::ElementList;

/// Generated header and implementation text for one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub header: String,
    pub implementation: String,
}

/// Run the full pipeline on `source`.
///
/// `unit` is the unit name used for the include guard.
pub fn headify(unit: &str, source: &str, options: &Options) -> Result<Output, HeadifyError> {
    let elements = scanner::scan(source)?;
    build_output(unit, &elements, options)
}

/// Build both outputs from an already scanned unit.
pub fn build_output(
    unit: &str,
    elements: &ElementList<'_>,
    options: &Options,
) -> Result<Output, HeadifyError> {
    debug!("{}: {} elements", unit, elements.len());

    let header = emit::build_header(unit, elements)?;
    let implementation = emit::build_implementation(unit, elements, options)?;

    Ok(Output {
        header,
        implementation,
    })
}

/// Number of phrases of each kind, public and private together.
pub fn phrase_summary(elements: &ElementList<'_>) -> FxHashMap<PhraseKind, usize> {
    let mut counts = FxHashMap::default();
    for phrase in Phrases::new(elements) {
        *counts.entry(phrase.kind).or_insert(0) += 1;
    }
    counts
}

/// One line per element, `<kind>: <text>`.
pub fn element_listing(elements: &ElementList<'_>) -> String {
    let source = elements.source();
    elements
        .iter()
        .map(|e| format!("{}: {}\n", e.kind.short_name(), e.text(source)))
        .collect()
}

/// One line per phrase, `[*kind:text]`. Stops after the first error phrase.
pub fn phrase_listing(elements: &ElementList<'_>) -> String {
    let mut listing = String::new();
    for phrase in Phrases::new(elements) {
        listing.push_str(&phrase.describe(elements));
        listing.push('\n');
        if phrase.kind == PhraseKind::Error {
            break;
        }
    }
    listing
}
