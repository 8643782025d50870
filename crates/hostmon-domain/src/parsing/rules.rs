//! Shared extraction rules
//!
//! Small building blocks the CPU and memory parsers are composed from:
//! marker-line lookup and numeric token parsing.

use crate::constants::{CPU_SUMMARY_MARKERS, MEMORY_SUMMARY_MARKERS};

/// Locates a summary line by the tokens it is announced with
///
/// The position of a summary line is not stable across monitor versions, so
/// lines are found by content, never by index.
#[derive(Debug, Clone, Copy)]
pub struct MarkerRule {
    name: &'static str,
    markers: &'static [&'static str],
}

/// Aggregate CPU summary line (`%Cpu(s): ...`)
pub const CPU_SUMMARY_RULE: MarkerRule = MarkerRule::new("cpu-summary", CPU_SUMMARY_MARKERS);

/// Physical memory summary line (`MiB Mem : ...`)
pub const MEMORY_SUMMARY_RULE: MarkerRule =
    MarkerRule::new("memory-summary", MEMORY_SUMMARY_MARKERS);

impl MarkerRule {
    /// Create a rule matching any of `markers`
    pub const fn new(name: &'static str, markers: &'static [&'static str]) -> Self {
        Self { name, markers }
    }

    /// First line containing any of the markers
    pub fn find<'a>(&self, lines: &[&'a str]) -> Option<&'a str> {
        let found = lines
            .iter()
            .copied()
            .find(|line| self.markers.iter().any(|marker| line.contains(marker)));
        if found.is_none() {
            tracing::debug!(rule = self.name, lines = lines.len(), "No summary line matched");
        }
        found
    }
}

/// Parse a non-negative figure as printed by the monitor
///
/// Accepts integers and decimals with a dot separator, optionally followed by
/// the legacy `k` suffix (`16384000k`). Anything else, including signs,
/// exponents and `NaN`/`inf`, is rejected, as are digit strings too long to
/// fit a finite `f64`.
pub fn parse_figure(token: &str) -> Option<f64> {
    let digits = token.strip_suffix(['k', 'K']).unwrap_or(token);

    let mut seen_digit = false;
    let mut seen_dot = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return None,
        }
    }
    if !seen_digit {
        return None;
    }

    digits.parse::<f64>().ok().filter(|value| value.is_finite())
}
