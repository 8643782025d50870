//! CPU summary line parsing
//!
//! marker-line lookup → idle field lookup → `100 - idle`.
//!
//! Recognised spellings of the idle field:
//!
//! ```text
//! %Cpu(s): 12.3 us,  2.1 sy,  0.0 ni, 85.6 id,  0.0 wa     procps-ng
//! Cpu(s):  1.2%us,  0.5%sy,  0.0%ni, 98.0%id,  0.3%wa     procps 3.2
//! %Cpu(s): 3 us, 1 sy, 96 idle                           integer values, long label
//! ```

use regex::Regex;
use std::sync::LazyLock;

use super::rules::CPU_SUMMARY_RULE;
use crate::error::{Error, Result};
use crate::value_objects::CpuReading;

/// Number directly followed by the idle label, `%` and trailing comma optional
static IDLE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*%?\s*id(?:le)?\b,?").expect("idle field pattern is valid")
});

/// Find the aggregate CPU summary line
pub fn find_cpu_line<'a>(lines: &[&'a str]) -> Result<&'a str> {
    CPU_SUMMARY_RULE.find(lines).ok_or(Error::CpuLineNotFound)
}

/// Isolate the idle percentage on a CPU summary line
pub fn extract_idle(line: &str) -> Result<f64> {
    IDLE_FIELD
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|value| value.as_str().parse::<f64>().ok())
        .ok_or_else(|| Error::idle_field_not_found(line.trim()))
}

/// Parse the CPU reading out of the monitor output lines
pub fn parse_cpu(lines: &[&str]) -> Result<CpuReading> {
    let line = find_cpu_line(lines)?;
    let idle = extract_idle(line)?;
    tracing::trace!(idle, "Parsed CPU summary line");
    CpuReading::from_idle(idle)
}
