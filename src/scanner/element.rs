//! Element definitions
//!
//! An [`Element`] is a typed, non-overlapping byte span over the source text.
//! The scanner produces them in source order and the concatenation of all
//! spans reproduces the input exactly, so every later stage can copy text
//! back out without losing a single character.

use std::fmt;

/// The closed set of element kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Run of spaces and tabs (line continuations included)
    Whitespace,
    /// Identifier, literal, operator, string or character literal
    Token,
    /// `#...` in the indentation region, up to the next unescaped line break
    Directive,
    /// `// ...` up to the line break
    LineComment,
    /// `/* ... */`
    BlockComment,
    Semicolon,
    LineBreak,
    /// Balanced `( ... )`
    Parens,
    /// Balanced `[ ... ]`
    Brackets,
    /// Balanced `{ ... }`
    Braces,
    /// A lone `)`, `]` or `}`; only seen while scanning a group
    Closing,
    /// `=`
    Assign,
    /// `*` in the indentation region of a line
    Public,
    EndOfSource,
}

impl ElementKind {
    /// Short name used by the element listing.
    pub fn short_name(self) -> &'static str {
        match self {
            ElementKind::Whitespace => "whi",
            ElementKind::Token => "tok",
            ElementKind::Directive => "pre",
            ElementKind::LineComment => "lco",
            ElementKind::BlockComment => "bco",
            ElementKind::Semicolon => "sem",
            ElementKind::LineBreak => "lbr",
            ElementKind::Parens => "par",
            ElementKind::Brackets => "bra",
            ElementKind::Braces => "cur",
            ElementKind::Closing => "clo",
            ElementKind::Assign => "asg",
            ElementKind::Public => "pub",
            ElementKind::EndOfSource => "eos",
        }
    }

    /// Whitespace and line breaks are skipped between all classifier steps.
    pub fn is_blank(self) -> bool {
        matches!(self, ElementKind::Whitespace | ElementKind::LineBreak)
    }

    pub fn is_comment(self) -> bool {
        matches!(self, ElementKind::LineComment | ElementKind::BlockComment)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Whitespace => write!(f, "whitespace"),
            ElementKind::Token => write!(f, "token"),
            ElementKind::Directive => write!(f, "preprocessor directive"),
            ElementKind::LineComment => write!(f, "line comment"),
            ElementKind::BlockComment => write!(f, "block comment"),
            ElementKind::Semicolon => write!(f, "';'"),
            ElementKind::LineBreak => write!(f, "line break"),
            ElementKind::Parens => write!(f, "'(...)'"),
            ElementKind::Brackets => write!(f, "'[...]'"),
            ElementKind::Braces => write!(f, "'{{...}}'"),
            ElementKind::Closing => write!(f, "closing brace"),
            ElementKind::Assign => write!(f, "'='"),
            ElementKind::Public => write!(f, "public marker"),
            ElementKind::EndOfSource => write!(f, "end of source"),
        }
    }
}

/// A span of source text. `begin` is inclusive, `end` exclusive, both byte
/// offsets into the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub begin: usize,
    pub end: usize,
}

impl Element {
    pub fn new(kind: ElementKind, begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end, "element ends before it begins");
        Self { kind, begin, end }
    }

    /// The text this element covers.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.begin..self.end]
    }
}

/// The complete, gap-free element sequence of one source unit.
///
/// The last element is always [`ElementKind::EndOfSource`], so every index
/// returned by the stream utilities is valid.
#[derive(Debug, Clone)]
pub struct ElementList<'a> {
    source: &'a str,
    elements: Vec<Element>,
}

impl<'a> ElementList<'a> {
    /// Wraps scanned elements. A trailing end-of-source element is appended
    /// if the caller did not include one.
    pub fn new(source: &'a str, mut elements: Vec<Element>) -> Self {
        if elements.last().map(|e| e.kind) != Some(ElementKind::EndOfSource) {
            let len = source.len();
            elements.push(Element::new(ElementKind::EndOfSource, len, len));
        }
        Self { source, elements }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Number of elements, end-of-source included.
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Index of the end-of-source element.
    pub fn last_index(&self) -> usize {
        self.elements.len() - 1
    }

    /// Element at `index`, clamped to the end-of-source element.
    pub fn get(&self, index: usize) -> &Element {
        &self.elements[index.min(self.last_index())]
    }

    pub fn kind(&self, index: usize) -> ElementKind {
        self.get(index).kind
    }

    pub fn text(&self, index: usize) -> &'a str {
        self.get(index).text(self.source)
    }

    /// Source text from the start of element `first` to the end of `last`.
    pub fn span_text(&self, first: usize, last: usize) -> &'a str {
        &self.source[self.get(first).begin..self.get(last).end]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }
}

impl<'l, 'a> IntoIterator for &'l ElementList<'a> {
    type Item = &'l Element;
    type IntoIter = std::slice::Iter<'l, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
