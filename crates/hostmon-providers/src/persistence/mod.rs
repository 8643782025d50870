//! Snapshot persistence providers

/// Pretty JSON file store
pub mod file;
/// No-op store
pub mod null;

pub use file::JsonFileSnapshotStore;
pub use null::NullSnapshotStore;
