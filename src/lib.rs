//! Library root for the `mcversion` crate
//! Composite resource versions for caches fed by several source clusters

// Core error handling
pub mod errors;

// Canonical encoding of per-cluster versions
pub mod canonicalize;

// The composite version token
pub mod multicluster_version;

// Configuration & CLI
pub mod cli;
pub mod config_loader;


pub use errors::{VersionError, VersionResult};
pub use multicluster_version::{MultiClusterVersion, ZERO_VERSION};
