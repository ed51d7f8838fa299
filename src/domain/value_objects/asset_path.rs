//! Asset Path Value Object
//!
//! A relative path to an audited asset. Guarantees:
//! - Path is relative (no leading /, no drive prefix)
//! - No traversal components (..)
//! - Non-empty
//!
//! Stored with forward slashes so it doubles as a stable archive entry name.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Error when asset path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path contains traversal components (..)
    ContainsTraversal,
    /// Path is absolute when relative is required
    AbsoluteNotAllowed,
    /// Path is empty
    Empty,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::ContainsTraversal => write!(f, "path contains traversal components (..)"),
            PathError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            PathError::Empty => write!(f, "path is empty"),
        }
    }
}

impl std::error::Error for PathError {}

/// A validated, root-relative asset path
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetPath(String);

impl AssetPath {
    /// Validate and normalize a relative path
    pub fn new(path: &str) -> Result<Self, PathError> {
        let normalized = path.replace('\\', "/");
        let trimmed = normalized.trim_start_matches("./");
        if trimmed.is_empty() {
            return Err(PathError::Empty);
        }

        let as_path = Path::new(trimmed);
        if as_path.is_absolute() || trimmed.starts_with('/') {
            return Err(PathError::AbsoluteNotAllowed);
        }

        for component in as_path.components() {
            match component {
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::Prefix(_) | Component::RootDir => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
                _ => {}
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Forward-slash form, used for display and archive entry names
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against the audit root
    pub fn under(&self, root: &Path) -> PathBuf {
        self.0.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
