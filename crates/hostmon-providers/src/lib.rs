//! # hostmon - Provider Implementations
//!
//! Concrete implementations of the ports defined in `hostmon-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Acquisition | `SampleSource` | `TopCommandSource` |
//! | Persistence | `SnapshotStore` | `JsonFileSnapshotStore`, `NullSnapshotStore` |
//!
//! ## Usage
//!
//! ```no_run
//! use hostmon_providers::acquisition::TopCommandSource;
//! use hostmon_providers::persistence::JsonFileSnapshotStore;
//!
//! let source = TopCommandSource::new();
//! let store = JsonFileSnapshotStore::new("metrics.json");
//! ```

// Re-export hostmon-domain types commonly used with providers
pub use hostmon_domain::error::{Error, Result};
pub use hostmon_domain::ports::{SampleSource, SnapshotStore};

/// Provider-specific constants
pub mod constants;

/// Raw sample acquisition
///
/// Implements `SampleSource` by running the monitor command.
pub mod acquisition;

/// Snapshot persistence
///
/// Implements `SnapshotStore` for the JSON file and the no-op store.
pub mod persistence;
