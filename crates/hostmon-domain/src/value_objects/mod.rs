//! Value objects
//!
//! Immutable data carried through one acquisition: the raw sample, the
//! parsed readings and the assembled snapshot.

pub mod metrics;
pub mod sample;

pub use metrics::{
    CpuReading, MemoryReading, MemoryUnit, MetricsSnapshot, NormalizedMemory,
    round_to_hundredths,
};
pub use sample::RawSample;
