//! Domain layer constants
//!
//! Marker tokens, labels and policies of the monitor output format family.
//! Infrastructure-specific constants live in `hostmon_infrastructure::constants`.

use crate::value_objects::MemoryUnit;

// ============================================================================
// CPU SUMMARY CONSTANTS
// ============================================================================

/// Tokens announcing the aggregate CPU summary line, checked in order
///
/// `%Cpu(s):` is the procps-ng spelling, `Cpu(s):` the legacy procps one.
pub const CPU_SUMMARY_MARKERS: &[&str] = &["%Cpu(s):", "Cpu(s):"];

/// Upper bound of any percentage reading
pub const PERCENT_MAX: f64 = 100.0;

// ============================================================================
// MEMORY SUMMARY CONSTANTS
// ============================================================================

/// Tokens announcing the physical memory summary line, checked in order
pub const MEMORY_SUMMARY_MARKERS: &[&str] = &["Mem:", "Mem "];

/// Label following the total memory figure
pub const MEMORY_LABEL_TOTAL: &str = "total";

/// Label following the used memory figure
pub const MEMORY_LABEL_USED: &str = "used";

/// Label following the free memory figure
pub const MEMORY_LABEL_FREE: &str = "free";

/// Unit assumed when the memory line names none.
///
/// This is a policy, not something read from the output: legacy `top`
/// builds print bare kibibyte figures (`Mem: 16384000k total, ...`).
pub const DEFAULT_MEMORY_UNIT: MemoryUnit = MemoryUnit::KiB;

/// Kibibytes per mebibyte, the base of every scale factor
pub const BINARY_SCALE: f64 = 1024.0;
