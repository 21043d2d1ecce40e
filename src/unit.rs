//! Unit naming
//!
//! Derives the unit name and the two output paths from the path of a source
//! unit. The unit name is the file name without its last extension. A unit
//! whose name then ends in `.hy` (for example `vector.hy.c`) is the source
//! of plain `vector.h` / `vector.c`; any other unit gets a suffix so the
//! generated files never overwrite the input (`account.c` →
//! `account_generated.h` / `account_generated.c`).

use crate::config::SOURCE_MARKER;
use std::fmt;
use std::path::{Path, PathBuf};

/// The unit name and where its outputs go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPaths {
    pub unit: String,
    pub header: PathBuf,
    pub implementation: PathBuf,
}

impl UnitPaths {
    /// Derive the unit paths for `source`.
    ///
    /// Outputs go to `out_dir` if given, otherwise next to the source.
    pub fn from_source_path(
        source: &Path,
        out_dir: Option<&Path>,
        suffix: &str,
    ) -> Result<Self, UnitNameError> {
        let file_name = source
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| UnitNameError::new(source))?;

        let stem = match file_name.rfind('.') {
            Some(dot) => &file_name[..dot],
            None => file_name,
        };
        let (unit, marked) = match stem.strip_suffix(SOURCE_MARKER) {
            Some(unit) => (unit, true),
            None => (stem, false),
        };
        if unit.is_empty() {
            return Err(UnitNameError::new(source));
        }

        let dir = out_dir
            .map(Path::to_path_buf)
            .or_else(|| source.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        let base = if marked {
            unit.to_string()
        } else {
            format!("{}{}", unit, suffix)
        };

        Ok(Self {
            unit: unit.to_string(),
            header: dir.join(format!("{}.h", base)),
            implementation: dir.join(format!("{}.c", base)),
        })
    }
}

/// The source path has no usable unit name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitNameError {
    pub path: PathBuf,
}

impl UnitNameError {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl fmt::Display for UnitNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot derive a unit name from '{}'",
            self.path.display()
        )
    }
}

impl std::error::Error for UnitNameError {}
