// Configuration for headify

/// Function that is never made `static`, even without the public marker
pub const DEFAULT_ENTRY_POINT: &str = "main";

/// Suffix appended to the unit name for units without the `.hy` marker
pub const DEFAULT_SUFFIX: &str = "_generated";

/// Secondary extension that marks a unit as the source of `<name>.h` and
/// `<name>.c` (for example `vector.hy.c`)
pub const SOURCE_MARKER: &str = ".hy";

/// Appended to the sanitized unit name to form the include guard macro
pub const GUARD_SUFFIX: &str = "_H_INCLUDED";

/// Options for one headify run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Name of the entry-point function
    pub entry_point: String,

    /// Output file suffix for units without the `.hy` marker
    pub suffix: String,
}

impl Options {
    pub fn with_entry_point(mut self, name: impl Into<String>) -> Self {
        self.entry_point = name.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}
