//! Save/move orchestration
//!
//! The host calls these entry points synchronously from its mutation pipeline:
//! once per saved node, and once per affected node after a move completes (so
//! ancestry reflects the new position). The service holds no durable state;
//! each invocation reads the node, decides, relocates, and writes back.

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::host::{MediaHost, PathMapper};
use crate::node::MediaNode;
use crate::relocator::{RelocationResult, Relocator};
use crate::resolver;
use tracing::{debug, info};

/// What a sync pass did for one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Node has no file reference; nothing touched.
    Skipped,
    /// Recorded reference already matches the canonical path.
    UpToDate,
    /// Primary file (and variants) relocated, reference rewritten.
    Relocated {
        from: String,
        to: String,
        /// Per-file results: primary first, then each variant tag in order.
        results: Vec<RelocationResult>,
    },
}

/// Path synchronization service.
pub struct PathSyncService<M: PathMapper> {
    config: SyncConfig,
    relocator: Relocator<M>,
}

impl<M: PathMapper> PathSyncService<M> {
    pub fn new(config: SyncConfig, mapper: M) -> Self {
        PathSyncService {
            config,
            relocator: Relocator::new(mapper),
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Synchronize one saved node.
    ///
    /// Skips nodes without a file reference; compares canonical vs. recorded
    /// path case-insensitively; on mismatch relocates the primary file and
    /// every configured variant, rewrites the reference (and its mirror), and
    /// persists through the host. Calling this again with no tree change in
    /// between is a no-op.
    pub fn on_node_saved(
        &self,
        host: &mut dyn MediaHost,
        node: &mut MediaNode,
    ) -> Result<SyncOutcome, SyncError> {
        let Some(current) = node.file_reference().map(str::to_owned) else {
            debug!(node_id = node.id, "node has no file reference, skipping");
            return Ok(SyncOutcome::Skipped);
        };

        let chain = resolver::ancestor_chain(&*host, node);
        let canonical = resolver::canonical_path(&self.config.root_segment, &chain, &current);

        if !resolver::needs_relocation(&canonical, &current) {
            debug!(node_id = node.id, path = %current, "reference already canonical");
            return Ok(SyncOutcome::UpToDate);
        }

        let results =
            self.relocator
                .relocate_with_variants(&current, &canonical, &self.config.variant_tags)?;

        node.set_file_reference(canonical.clone());
        host.persist(node)?;
        info!(node_id = node.id, from = %current, to = %canonical, "node relocated");

        Ok(SyncOutcome::Relocated {
            from: current,
            to: canonical,
            results,
        })
    }

    /// Handle a batch of saved nodes, one outcome per node in order.
    pub fn on_nodes_saved(
        &self,
        host: &mut dyn MediaHost,
        nodes: &mut [MediaNode],
    ) -> Result<Vec<SyncOutcome>, SyncError> {
        let mut outcomes = Vec::with_capacity(nodes.len());
        for node in nodes.iter_mut() {
            outcomes.push(self.on_node_saved(host, node)?);
        }
        Ok(outcomes)
    }

    /// Handle a tree move: every affected node (the moved node and any
    /// descendants the host supplies) is re-run through the save pathway so
    /// its path is recomputed against the changed ancestry.
    pub fn on_nodes_moved(
        &self,
        host: &mut dyn MediaHost,
        nodes: &mut [MediaNode],
    ) -> Result<Vec<SyncOutcome>, SyncError> {
        self.on_nodes_saved(host, nodes)
    }
}
