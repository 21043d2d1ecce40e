// Implementation builder: every phrase, line numbers preserved

use super::function_name;
use crate::config::Options;
use crate::error::HeadifyError;
use crate::phrase::{Phrase, PhraseKind, Phrases};
use crate::scanner::stream::count_line_breaks;
use crate::scanner::ElementList;
use log::{debug, trace};

/// Build the implementation text for `unit`.
///
/// Text between phrases is copied unchanged, so every line of the output
/// lines up with the same line of the input.
/// - public phrases are copied without their marker, except public
///   struct/union/enum definitions, type definitions and preprocessor
///   directives, which live in the header and are replaced by as many line
///   breaks as they span
/// - private functions (other than the entry point) and private variables
///   and arrays get a `static` prefix
/// - everything else is copied as written
pub fn build_implementation(
    unit: &str,
    elements: &ElementList<'_>,
    options: &Options,
) -> Result<String, HeadifyError> {
    debug!("building implementation for {}", unit);
    let source = elements.source();
    let mut out = String::with_capacity(source.len() + 256);
    // Byte offset up to which the source has been emitted
    let mut cursor = 0;

    for phrase in Phrases::new(elements) {
        if phrase.kind == PhraseKind::Error {
            return Err(HeadifyError::from_phrase(elements, &phrase));
        }
        trace!("implementation: {}", phrase.describe(elements));

        out.push_str(&source[cursor..elements.get(phrase.first).begin]);
        cursor = elements.get(phrase.last).end;

        if phrase.is_public {
            let body = elements.span_text(phrase.body_start(), phrase.last);
            match phrase.kind {
                PhraseKind::StructUnionEnum
                | PhraseKind::TypeDefinition
                | PhraseKind::Preprocessor => {
                    out.extend(std::iter::repeat('\n').take(count_line_breaks(body)));
                }
                _ => out.push_str(body),
            }
        } else {
            if needs_static(elements, &phrase, options) {
                out.push_str("static ");
            }
            out.push_str(phrase.text(elements));
        }
    }

    out.push_str(&source[cursor..]);
    Ok(out)
}

/// Private functions and variables get internal linkage, except the entry
/// point and phrases that already say `static`.
fn needs_static(elements: &ElementList<'_>, phrase: &Phrase, options: &Options) -> bool {
    if !phrase.kind.has_linkage() || elements.is_word(phrase.first, "static") {
        return false;
    }
    if phrase.kind.is_function() {
        return function_name(elements, phrase) != Some(options.entry_point.as_str());
    }
    true
}
