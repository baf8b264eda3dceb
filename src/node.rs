//! Media node representation

use crate::types::NodeId;

/// A node in the content tree with an (optional) backing file.
///
/// The host owns identity and persistence; the core only reads the ancestry
/// and file reference and writes back an updated reference. The secondary
/// `local_path` attribute, when present, mirrors the primary reference and is
/// updated identically on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaNode {
    pub id: NodeId,
    pub name: String,
    file: Option<String>,
    local_path: Option<String>,
}

impl MediaNode {
    /// Create a node with no backing file.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        MediaNode {
            id,
            name: name.into(),
            file: None,
            local_path: None,
        }
    }

    /// Create a node with a store-relative file reference.
    pub fn with_file(id: NodeId, name: impl Into<String>, file: impl Into<String>) -> Self {
        MediaNode {
            id,
            name: name.into(),
            file: Some(file.into()),
            local_path: None,
        }
    }

    /// Enable the mirrored local-path attribute, seeded from the primary
    /// reference.
    pub fn with_local_path_mirror(mut self) -> Self {
        self.local_path = self.file.clone();
        self
    }

    /// The node's primary file reference, if any. Blank references count as
    /// absent.
    pub fn file_reference(&self) -> Option<&str> {
        match self.file.as_deref() {
            Some(f) if !f.trim().is_empty() => Some(f),
            _ => None,
        }
    }

    /// Write the primary file reference, updating the mirrored attribute when
    /// present.
    pub fn set_file_reference(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.local_path.is_some() {
            self.local_path = Some(path.clone());
        }
        self.file = Some(path);
    }

    /// The mirrored secondary path attribute, if enabled.
    pub fn local_path(&self) -> Option<&str> {
        self.local_path.as_deref()
    }
}
