//! Metric value objects
//!
//! Readings produced by the parsers and the timestamped snapshot built from
//! them. The serialized form of [`MetricsSnapshot`] is the public schema of
//! both the HTTP response and the persisted snapshot file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{BINARY_SCALE, PERCENT_MAX};
use crate::error::{Error, Result};

/// Round to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregate CPU utilization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuReading {
    /// Busy percentage, `100 - idle`, two decimals
    #[serde(rename = "usage")]
    pub usage_percent: f64,
}

impl CpuReading {
    /// Build a reading from the idle percentage reported by the monitor
    pub fn from_idle(idle_percent: f64) -> Result<Self> {
        if !(0.0..=PERCENT_MAX).contains(&idle_percent) {
            return Err(Error::invalid_reading(format!(
                "idle CPU percentage {idle_percent} is outside 0..=100"
            )));
        }
        Ok(Self {
            usage_percent: round_to_hundredths(PERCENT_MAX - idle_percent),
        })
    }
}

/// Binary unit a memory figure is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryUnit {
    KiB,
    MiB,
    GiB,
    TiB,
    PiB,
    EiB,
}

impl MemoryUnit {
    /// Every unit, smallest first
    pub const ALL: [MemoryUnit; 6] = [
        MemoryUnit::KiB,
        MemoryUnit::MiB,
        MemoryUnit::GiB,
        MemoryUnit::TiB,
        MemoryUnit::PiB,
        MemoryUnit::EiB,
    ];

    /// Literal token the monitor prints for this unit
    pub fn token(self) -> &'static str {
        match self {
            Self::KiB => "KiB",
            Self::MiB => "MiB",
            Self::GiB => "GiB",
            Self::TiB => "TiB",
            Self::PiB => "PiB",
            Self::EiB => "EiB",
        }
    }

    /// Power of 1024 separating this unit from MiB
    fn exponent_from_mib(self) -> i32 {
        match self {
            Self::KiB => -1,
            Self::MiB => 0,
            Self::GiB => 1,
            Self::TiB => 2,
            Self::PiB => 3,
            Self::EiB => 4,
        }
    }

    /// Multiplier converting a figure in this unit to MiB
    ///
    /// Every factor is a power of two, so the conversion is exact.
    pub fn mib_factor(self) -> f64 {
        BINARY_SCALE.powi(self.exponent_from_mib())
    }

    /// Convert a figure in this unit to MiB
    pub fn to_mib(self, value: f64) -> f64 {
        value * self.mib_factor()
    }
}

impl fmt::Display for MemoryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Memory figures scaled to MiB but not yet rounded
///
/// Output of the memory parser. Rounding is deferred to assembly so it does
/// not leak into the percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedMemory {
    /// Total memory in MiB
    pub total_mib: f64,
    /// Used memory in MiB
    pub used_mib: f64,
    /// Free memory in MiB
    pub free_mib: f64,
}

/// Memory utilization as published
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryReading {
    /// Total memory, whole MiB
    #[serde(rename = "total")]
    pub total_mib: f64,
    /// Used memory, whole MiB
    #[serde(rename = "used")]
    pub used_mib: f64,
    /// Free memory, whole MiB
    #[serde(rename = "free")]
    pub free_mib: f64,
    /// `used / total * 100`, two decimals, not clamped
    #[serde(rename = "percentUsed")]
    pub percent_used: f64,
    /// Always [`MemoryUnit::MiB`]
    pub unit: MemoryUnit,
}

/// One timestamped CPU and memory record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Instant the monitor output was captured
    #[serde(with = "iso8601_millis")]
    pub timestamp: DateTime<Utc>,
    /// CPU reading
    pub cpu: CpuReading,
    /// Memory reading
    pub memory: MemoryReading,
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
