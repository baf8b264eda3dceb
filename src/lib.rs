//! Mediapath: Content-Tree Path Synchronization
//!
//! Keeps a hierarchical media store's physical directory layout synchronized
//! with its logical content tree: when a media node is saved or moved, its
//! backing file (and any derived artifact variants) are relocated to the path
//! that mirrors the node's current ancestry.

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod node;
pub mod relocator;
pub mod resolver;
pub mod service;
pub mod types;
pub mod variant;
