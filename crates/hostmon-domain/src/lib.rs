//! # hostmon Domain
//!
//! Core types and rules for turning `top` style monitor output into a
//! normalized CPU and memory snapshot.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Raw sample, readings and the snapshot schema |
//! | [`parsing`] | Marker lookup, field strategies, unit detection and scaling |
//! | [`assembler`] | Pure snapshot assembly and percentage computation |
//! | [`ports`] | Acquisition and persistence contracts |
//! | [`error`] | Error taxonomy |
//!
//! ## Example
//!
//! ```
//! use hostmon_domain::parsing::MonitorOutputParser;
//! use hostmon_domain::value_objects::RawSample;
//!
//! let sample = RawSample::new(
//!     "%Cpu(s): 12.3 us, 2.1 sy, 0.0 ni, 85.6 id, 0.0 wa\n\
//!      MiB Mem : 7943.0 total, 3200.0 used, 2000.0 free, 2743.0 buff/cache\n",
//! );
//! let snapshot = MonitorOutputParser::new().parse_snapshot(&sample)?;
//! assert_eq!(snapshot.cpu.usage_percent, 14.4);
//! assert_eq!(snapshot.memory.percent_used, 40.29);
//! # Ok::<(), hostmon_domain::Error>(())
//! ```

pub mod assembler;
pub mod constants;
pub mod error;
pub mod parsing;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    CpuReading, MemoryReading, MemoryUnit, MetricsSnapshot, NormalizedMemory, RawSample,
};
