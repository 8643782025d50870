//! Metrics assembly
//!
//! Pure combination of parsed readings into a [`MetricsSnapshot`]. No I/O.

use chrono::{DateTime, Utc};

use crate::constants::PERCENT_MAX;
use crate::error::{Error, Result};
use crate::value_objects::{
    CpuReading, MemoryReading, MemoryUnit, MetricsSnapshot, NormalizedMemory,
    round_to_hundredths,
};

/// Reject figures that scaled past the range of `f64`
fn ensure_finite(label: &str, value_mib: f64) -> Result<()> {
    if value_mib.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_reading(format!(
            "{label} memory {value_mib} MiB is not a finite figure"
        )))
    }
}

/// `used / total * 100` on the unrounded figures, two decimals
///
/// Not clamped: monitors that account buffers separately can report
/// `used + free > total`, and such values are passed through as reported.
pub fn percent_used(memory: &NormalizedMemory) -> Result<f64> {
    ensure_finite("total", memory.total_mib)?;
    ensure_finite("used", memory.used_mib)?;
    if memory.total_mib <= 0.0 {
        return Err(Error::DivisionByZeroMemory);
    }
    Ok(round_to_hundredths(memory.used_mib / memory.total_mib * PERCENT_MAX))
}

/// Build the published memory reading, rounding figures to whole MiB
pub fn memory_reading(memory: &NormalizedMemory) -> Result<MemoryReading> {
    let percent_used = percent_used(memory)?;
    ensure_finite("free", memory.free_mib)?;
    Ok(MemoryReading {
        total_mib: memory.total_mib.round(),
        used_mib: memory.used_mib.round(),
        free_mib: memory.free_mib.round(),
        percent_used,
        unit: MemoryUnit::MiB,
    })
}

/// Combine readings into a snapshot stamped with the capture instant
pub fn assemble(
    cpu: CpuReading,
    memory: NormalizedMemory,
    captured_at: DateTime<Utc>,
) -> Result<MetricsSnapshot> {
    Ok(MetricsSnapshot {
        timestamp: captured_at,
        cpu,
        memory: memory_reading(&memory)?,
    })
}
