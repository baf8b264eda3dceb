//! Host collaborator interfaces
//!
//! The content-management host supplies ancestry traversal, node persistence,
//! and logical-to-physical path mapping. All three are injected; the core
//! holds no ambient context and registers no global hooks.

use crate::error::{RelocationError, SyncError};
use crate::node::MediaNode;
use std::path::{Path, PathBuf};

/// Content-tree host interface
pub trait MediaHost {
    /// Parent of a node, or `None` at the tree root.
    ///
    /// Precondition: parent links must be acyclic. A cyclic ancestry is a
    /// host bug and is not guarded against here.
    fn parent_of(&self, node: &MediaNode) -> Option<MediaNode>;

    /// Durably save the node's updated attributes.
    fn persist(&mut self, node: &MediaNode) -> Result<(), SyncError>;
}

/// Maps store-relative paths to absolute filesystem locations.
pub trait PathMapper {
    fn to_absolute(&self, store_relative: &str) -> Result<PathBuf, RelocationError>;
}

/// Mapper anchoring store-relative paths under a fixed filesystem root.
#[derive(Debug, Clone)]
pub struct StoreRootMapper {
    root: PathBuf,
}

impl StoreRootMapper {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StoreRootMapper {
            root: dunce::simplified(&root.into()).to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathMapper for StoreRootMapper {
    fn to_absolute(&self, store_relative: &str) -> Result<PathBuf, RelocationError> {
        let trimmed = store_relative.trim_start_matches(['/', '\\']);
        if trimmed.is_empty() {
            return Err(RelocationError::PathMapping {
                path: store_relative.to_string(),
                reason: "store path has no file component".to_string(),
            });
        }
        let mut absolute = self.root.clone();
        for segment in trimmed.split(['/', '\\']) {
            if segment == ".." {
                return Err(RelocationError::PathMapping {
                    path: store_relative.to_string(),
                    reason: "store path escapes the store root".to_string(),
                });
            }
            if !segment.is_empty() && segment != "." {
                absolute.push(segment);
            }
        }
        Ok(absolute)
    }
}
