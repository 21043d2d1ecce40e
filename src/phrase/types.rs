// Phrase definitions

use crate::scanner::ElementList;
use std::fmt;

/// Top-level construct recognised by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseKind {
    Error,
    FunctionDeclaration,
    FunctionDefinition,
    VariableDeclaration,
    VariableDefinition,
    ArrayDeclaration,
    ArrayDefinition,
    /// `struct`, `union` or `enum` up to the terminating `;`
    StructUnionEnum,
    TypeDefinition,
    Preprocessor,
    LineComment,
    BlockComment,
}

impl PhraseKind {
    /// Kinds whose private form gets a `static` prefix in the implementation.
    pub fn has_linkage(self) -> bool {
        self.is_function() || self.is_variable()
    }

    pub fn is_function(self) -> bool {
        matches!(
            self,
            PhraseKind::FunctionDeclaration | PhraseKind::FunctionDefinition
        )
    }

    /// Variables and arrays, declared or defined.
    pub fn is_variable(self) -> bool {
        matches!(
            self,
            PhraseKind::VariableDeclaration
                | PhraseKind::VariableDefinition
                | PhraseKind::ArrayDeclaration
                | PhraseKind::ArrayDefinition
        )
    }

    pub fn short_name(self) -> &'static str {
        match self {
            PhraseKind::Error => "error",
            PhraseKind::FunctionDeclaration => "fun_dec",
            PhraseKind::FunctionDefinition => "fun_def",
            PhraseKind::VariableDeclaration => "var_dec",
            PhraseKind::VariableDefinition => "var_def",
            PhraseKind::ArrayDeclaration => "arr_dec",
            PhraseKind::ArrayDefinition => "arr_def",
            PhraseKind::StructUnionEnum => "struct_union_enum_def",
            PhraseKind::TypeDefinition => "type_def",
            PhraseKind::Preprocessor => "preproc",
            PhraseKind::LineComment => "line_comment",
            PhraseKind::BlockComment => "block_comment",
        }
    }
}

impl fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A run of consecutive elements forming one top-level construct.
///
/// `first` and `last` are inclusive indices into the [`ElementList`] the
/// phrase was classified from. If the phrase is public, `first` is the
/// public marker. For an error phrase `last` is the offending element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase {
    pub kind: PhraseKind,
    pub is_public: bool,
    pub first: usize,
    pub last: usize,
}

impl Phrase {
    /// Index of the first element after the public marker, or `first` for a
    /// private phrase.
    pub fn body_start(&self) -> usize {
        if self.is_public {
            self.first + 1
        } else {
            self.first
        }
    }

    /// Full source text of the phrase, marker included.
    pub fn text<'a>(&self, elements: &ElementList<'a>) -> &'a str {
        elements.span_text(self.first, self.last)
    }

    /// Listing form `[*kind:text]`, `*` only for public phrases.
    pub fn describe(&self, elements: &ElementList<'_>) -> String {
        format!(
            "[{}{}:{}]",
            if self.is_public { "*" } else { "" },
            self.kind,
            self.text(elements)
        )
    }
}
