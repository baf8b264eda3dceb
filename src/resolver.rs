//! Canonical path resolution
//!
//! Computes the store-relative path a node's file should occupy, derived from
//! the node's ancestor names. Pure string work; the only collaborator is the
//! host's `parent_of` for the ancestry walk.

use crate::host::MediaHost;
use crate::node::MediaNode;

/// Ordered ancestor display names, tree root (exclusive) down to the node's
/// immediate parent.
///
/// Walks leaf-to-root over `parent_of`, prepending at each step. Terminates
/// when the host reports no parent; a cyclic ancestry is a host precondition
/// violation and loops.
pub fn ancestor_chain(host: &dyn MediaHost, node: &MediaNode) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = node.clone();
    while let Some(parent) = host.parent_of(&current) {
        chain.insert(0, parent.name.clone());
        current = parent;
    }
    chain
}

/// Canonical store-relative path for a file reference under an ancestor chain.
///
/// `/<root_segment>/<ancestors joined by '/'>/<basename>`, separators
/// normalized to forward slashes. Only the basename of the existing reference
/// is kept; the directory prefix is recomputed from the chain. An empty chain
/// yields `/<root_segment>/<basename>`.
pub fn canonical_path(root_segment: &str, chain: &[String], file_reference: &str) -> String {
    let mut segments = Vec::with_capacity(chain.len() + 2);
    segments.push(root_segment);
    segments.extend(chain.iter().map(String::as_str));
    segments.push(basename(file_reference));
    format!("/{}", segments.join("/"))
}

/// Whether the recorded reference disagrees with the canonical path.
///
/// Comparison is case-insensitive on every platform, so a case-only rename
/// never triggers a relocation. Hosts on case-sensitive filesystems that want
/// different semantics should adjust here.
pub fn needs_relocation(canonical: &str, current: &str) -> bool {
    canonical.to_lowercase() != current.to_lowercase()
}

/// Filename component of a store path, tolerating either separator.
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
