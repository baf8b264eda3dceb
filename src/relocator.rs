//! Physical file relocation
//!
//! Moves a file from its previously recorded store path to its canonical
//! path: create destination parents, overwrite any existing destination,
//! copy-then-delete the source, and clean up the source directory once it no
//! longer holds any files. A wrapper repeats the move for each configured
//! artifact variant.

use crate::error::RelocationError;
use crate::host::PathMapper;
use crate::variant::variant_path;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Outcome of a single file relocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelocationResult {
    /// Source existed and now lives at the destination.
    Moved,
    /// Nothing on disk at the source; skipped without error.
    SourceMissing,
}

/// Executes relocations against the filesystem through a `PathMapper`.
pub struct Relocator<M: PathMapper> {
    mapper: M,
}

impl<M: PathMapper> Relocator<M> {
    pub fn new(mapper: M) -> Self {
        Relocator { mapper }
    }

    /// Relocate one file from `old` to `new` (store-relative paths).
    ///
    /// Overwrite semantics: an existing destination file is deleted first,
    /// last write wins. A missing source is a soft skip, not an error. After
    /// the move the source's containing directory is deleted if no files
    /// remain anywhere beneath it.
    pub fn relocate(&self, old: &str, new: &str) -> Result<RelocationResult, RelocationError> {
        let old_abs = self.mapper.to_absolute(old)?;
        let new_abs = self.mapper.to_absolute(new)?;

        if let Some(parent) = new_abs.parent() {
            fs::create_dir_all(parent)?;
        }
        if new_abs.is_file() {
            debug!(destination = %new, "overwriting existing destination file");
            fs::remove_file(&new_abs)?;
        }

        let result = if old_abs.is_file() {
            fs::copy(&old_abs, &new_abs)?;
            fs::remove_file(&old_abs)?;
            info!(from = %old, to = %new, "relocated file");
            RelocationResult::Moved
        } else {
            debug!(source = %old, "no file at source, skipping");
            RelocationResult::SourceMissing
        };

        if let Some(old_dir) = old_abs.parent() {
            remove_dir_if_fileless(old_dir)?;
        }
        Ok(result)
    }

    /// Relocate the primary file, then each variant in tag order.
    ///
    /// No rollback: a failure on a later variant leaves earlier moves in
    /// place and propagates.
    pub fn relocate_with_variants(
        &self,
        old: &str,
        new: &str,
        tags: &[String],
    ) -> Result<Vec<RelocationResult>, RelocationError> {
        let mut results = Vec::with_capacity(tags.len() + 1);
        results.push(self.relocate(old, new)?);
        for tag in tags {
            results.push(self.relocate(&variant_path(old, tag), &variant_path(new, tag))?);
        }
        Ok(results)
    }
}

/// Delete `dir` recursively iff it contains no files at any depth.
///
/// Emptiness is checked immediately before the delete; a non-empty (or
/// unreadable) subtree is left alone rather than force-deleted. Leftover
/// empty subdirectories beneath `dir` are removed with it.
fn remove_dir_if_fileless(dir: &Path) -> Result<(), RelocationError> {
    if !dir.is_dir() {
        return Ok(());
    }
    if contains_no_files(dir) {
        debug!(directory = %dir.display(), "removing emptied source directory");
        fs::remove_dir_all(dir)?;
    }
    Ok(())
}

fn contains_no_files(dir: &Path) -> bool {
    for entry in WalkDir::new(dir) {
        match entry {
            Ok(e) if e.file_type().is_file() => return false,
            Ok(_) => {}
            // Unreadable subtree: treat as occupied, do not delete.
            Err(_) => return false,
        }
    }
    true
}
