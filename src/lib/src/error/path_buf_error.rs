//! # PathBufError
//!
//! Wrapper so a path can ride along as the payload of an
//! [`crate::error::AnchorError`] variant.
//!

use std::fmt;
use std::path::{Path, PathBuf};

pub struct PathBufError(PathBuf);

impl PathBufError {
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl From<&Path> for PathBufError {
    fn from(path: &Path) -> Self {
        PathBufError(path.to_path_buf())
    }
}

impl From<PathBuf> for PathBufError {
    fn from(path: PathBuf) -> Self {
        PathBufError(path)
    }
}

impl std::fmt::Display for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl std::fmt::Debug for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl std::error::Error for PathBufError {}
