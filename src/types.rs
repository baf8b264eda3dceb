//! Core types for the content-tree path synchronization system.

/// NodeId: Host-assigned identity of a media node
pub type NodeId = u64;
