//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outside world. The domain
//! defines them; `hostmon-providers` implements them.
//!
//! - **acquisition** - obtaining one raw monitor sample
//! - **snapshot** - persisting the latest assembled snapshot

/// Raw sample acquisition port
pub mod acquisition;
/// Snapshot persistence port
pub mod snapshot;

pub use acquisition::SampleSource;
pub use snapshot::SnapshotStore;
