// Header builder: public declarations only

use super::{include_guard, prefix_before};
use crate::error::HeadifyError;
use crate::phrase::{PhraseKind, Phrases};
use crate::scanner::{ElementKind, ElementList};
use log::trace;
use std::fmt::Write;

/// Build the header text for `unit`.
///
/// Every public phrase contributes one line, in source order:
/// - variable and array declarations get an `extern` prefix
/// - function definitions are cut before the body and end with `;`
/// - variable and array definitions lose their initializer and become
///   `extern` declarations
/// - everything else is copied as written
pub fn build_header(unit: &str, elements: &ElementList<'_>) -> Result<String, HeadifyError> {
    let guard = include_guard(unit);
    let mut head = String::with_capacity(1024);
    // Writing to a String cannot fail
    let _ = write!(head, "#ifndef {guard}\n#define {guard}\n");

    for phrase in Phrases::new(elements) {
        if phrase.kind != PhraseKind::Error && !phrase.is_public {
            continue;
        }
        trace!("header: {}", phrase.describe(elements));

        // The marker and any layout right after it stay out of the header
        let first = elements.skip_blank(phrase.body_start());
        let last = phrase.last;

        match phrase.kind {
            PhraseKind::Error => return Err(HeadifyError::from_phrase(elements, &phrase)),
            PhraseKind::VariableDeclaration | PhraseKind::ArrayDeclaration => {
                push_extern(&mut head, elements, first);
                head.push_str(elements.span_text(first, last));
                head.push('\n');
            }
            PhraseKind::VariableDefinition | PhraseKind::ArrayDefinition => {
                push_extern(&mut head, elements, first);
                head.push_str(prefix_before(elements, first, last, ElementKind::Assign));
                head.push_str(";\n");
            }
            PhraseKind::FunctionDefinition => {
                head.push_str(prefix_before(elements, first, last, ElementKind::Braces));
                head.push_str(";\n");
            }
            PhraseKind::FunctionDeclaration
            | PhraseKind::Preprocessor
            | PhraseKind::StructUnionEnum
            | PhraseKind::TypeDefinition
            | PhraseKind::LineComment
            | PhraseKind::BlockComment => {
                head.push_str(elements.span_text(first, last));
                head.push('\n');
            }
        }
    }

    head.push_str("#endif\n");
    Ok(head)
}

fn push_extern(head: &mut String, elements: &ElementList<'_>, first: usize) {
    if !elements.is_word(first, "extern") {
        head.push_str("extern ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;
    use pretty_assertions::assert_eq;

    fn header(source: &str) -> String {
        let elements = scan(source).unwrap();
        build_header("demo", &elements).unwrap()
    }

    /// Header body without the include guard lines.
    fn body(source: &str) -> String {
        let text = header(source);
        let lines: Vec<&str> = text.lines().collect();
        lines[2..lines.len() - 1].join("\n")
    }

    #[test]
    fn test_include_guard_wraps_output() {
        assert_eq!(
            header(""),
            "#ifndef DEMO_H_INCLUDED\n#define DEMO_H_INCLUDED\n#endif\n"
        );
    }

    #[test]
    fn test_function_definition_becomes_prototype() {
        assert_eq!(
            body("*int f(int a, int b) { return a + b; }"),
            "int f(int a, int b);"
        );
        assert_eq!(
            body("*int\nf(void) // doc\n{\n  return 1;\n}\n"),
            "int\nf(void);"
        );
    }

    #[test]
    fn test_declarations_get_extern() {
        assert_eq!(body("*int x;"), "extern int x;");
        assert_eq!(body("*int apub[10]; // line comment"), "extern int apub[10];");
        assert_eq!(body("*extern int y;"), "extern int y;");
    }

    #[test]
    fn test_definitions_lose_initializer() {
        assert_eq!(body("*char* hello = \"hello\";"), "extern char* hello;");
        assert_eq!(
            body("*int b[2][3] = {{1, 2, 3}, {4, 5, 6}};"),
            "extern int b[2][3];"
        );
    }

    #[test]
    fn test_verbatim_phrases() {
        assert_eq!(
            body("*struct Point { int x; int y; };"),
            "struct Point { int x; int y; };"
        );
        assert_eq!(
            body("*typedef void (*MyFuncType)(void);"),
            "typedef void (*MyFuncType)(void);"
        );
        assert_eq!(body("*int ff(int a, int b);"), "int ff(int a, int b);");
        assert_eq!(body("*#include \"util.h\"\n"), "#include \"util.h\"");
        assert_eq!(body("*/* doc */\n*int g(void);"), "/* doc */\nint g(void);");
        assert_eq!(body(" * // note\n"), "// note");
    }

    #[test]
    fn test_private_phrases_are_skipped() {
        assert_eq!(
            header("int x = 5;\nstatic int f(void) { return 0; }\n// c\n#define N 3\n"),
            "#ifndef DEMO_H_INCLUDED\n#define DEMO_H_INCLUDED\n#endif\n"
        );
    }

    #[test]
    fn test_source_order() {
        let source = "*int a;\nint hidden;\n*int b(void);\n*struct S;\n";
        assert_eq!(body(source), "extern int a;\nint b(void);\nstruct S;");
    }

    #[test]
    fn test_error_aborts() {
        let source = "*int a;\n\nint f(x) y;\n";
        let elements = scan(source).unwrap();
        let err = build_header("demo", &elements).unwrap_err();
        assert_eq!(err.report("demo", source), "demo:3: unexpected token 'y'");
    }

    #[test]
    fn test_private_error_aborts_too() {
        let elements = scan("int x = 1").unwrap();
        assert!(build_header("demo", &elements).is_err());
    }
}
