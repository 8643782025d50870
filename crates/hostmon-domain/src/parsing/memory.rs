//! Memory summary line parsing
//!
//! marker-line lookup → field lookup → unit detection → scale to MiB.
//!
//! Field lookup tries each [`MemoryFieldStrategy`] in order and keeps the
//! first one that yields all three figures. The built-in order is:
//!
//! 1. [`LabeledFieldStrategy`] - `MiB Mem : 7943.0 total, 3200.0 used, 2000.0 free`
//! 2. [`KeywordAdjacentStrategy`] - `KiB Mem:16384000 total,8192000 used,4096000 free,`

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::rules::{MEMORY_SUMMARY_RULE, parse_figure};
use crate::constants::{
    DEFAULT_MEMORY_UNIT, MEMORY_LABEL_FREE, MEMORY_LABEL_TOTAL, MEMORY_LABEL_USED,
};
use crate::error::{Error, Result};
use crate::value_objects::{MemoryUnit, NormalizedMemory};

/// Total, used and free figures in the unit the line reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryFields {
    /// Total memory
    pub total: f64,
    /// Used memory
    pub used: f64,
    /// Free memory
    pub free: f64,
}

impl MemoryFields {
    /// Scale every figure to MiB
    pub fn normalize(self, unit: MemoryUnit) -> NormalizedMemory {
        NormalizedMemory {
            total_mib: unit.to_mib(self.total),
            used_mib: unit.to_mib(self.used),
            free_mib: unit.to_mib(self.free),
        }
    }
}

/// One way of reading total/used/free off a memory summary line
pub trait MemoryFieldStrategy: Send + Sync {
    /// Strategy name, for logs
    fn name(&self) -> &'static str;

    /// All three figures, or `None` when this strategy does not apply
    fn extract(&self, line: &str) -> Option<MemoryFields>;
}

/// Value-precedes-label lookup over comma or whitespace delimited fields
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledFieldStrategy;

impl LabeledFieldStrategy {
    fn value_before(fields: &[&str], label: &str) -> Option<f64> {
        let index = fields.iter().position(|field| *field == label)?;
        let value = fields.get(index.checked_sub(1)?)?;
        parse_figure(value)
    }
}

impl MemoryFieldStrategy for LabeledFieldStrategy {
    fn name(&self) -> &'static str {
        "labeled-field"
    }

    fn extract(&self, line: &str) -> Option<MemoryFields> {
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty())
            .collect();

        Some(MemoryFields {
            total: Self::value_before(&fields, MEMORY_LABEL_TOTAL)?,
            used: Self::value_before(&fields, MEMORY_LABEL_USED)?,
            free: Self::value_before(&fields, MEMORY_LABEL_FREE)?,
        })
    }
}

static TOTAL_ADJACENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)[kK]?\s*total\b").expect("total pattern is valid")
});

// `used` and `free` must be followed by a comma or end the line, which keeps
// them from matching `used.` in the swap summary style.
static USED_ADJACENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)[kK]?\s*used(?:,|\s*$)").expect("used pattern is valid")
});

static FREE_ADJACENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)[kK]?\s*free(?:,|\s*$)").expect("free pattern is valid")
});

/// Independent patterns anchored on each label's literal text
///
/// Handles lines where values are glued to neighbouring tokens, which
/// defeats plain field splitting.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordAdjacentStrategy;

impl KeywordAdjacentStrategy {
    fn capture(pattern: &Regex, line: &str) -> Option<f64> {
        let value = pattern.captures(line)?.get(1)?;
        parse_figure(value.as_str())
    }
}

impl MemoryFieldStrategy for KeywordAdjacentStrategy {
    fn name(&self) -> &'static str {
        "keyword-adjacent"
    }

    fn extract(&self, line: &str) -> Option<MemoryFields> {
        Some(MemoryFields {
            total: Self::capture(&TOTAL_ADJACENT, line)?,
            used: Self::capture(&USED_ADJACENT, line)?,
            free: Self::capture(&FREE_ADJACENT, line)?,
        })
    }
}

/// Unit named on the line, if any
pub fn detect_unit(line: &str) -> Option<MemoryUnit> {
    MemoryUnit::ALL
        .into_iter()
        .find(|unit| line.contains(unit.token()))
}

/// Find the memory summary line
pub fn find_memory_line<'a>(lines: &[&'a str]) -> Result<&'a str> {
    MEMORY_SUMMARY_RULE.find(lines).ok_or(Error::MemLineNotFound)
}

/// Memory line parser with an ordered list of field strategies
pub struct MemoryLineParser {
    strategies: Vec<Box<dyn MemoryFieldStrategy>>,
}

impl MemoryLineParser {
    /// Parser using the built-in strategies
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(LabeledFieldStrategy),
                Box::new(KeywordAdjacentStrategy),
            ],
        }
    }

    /// Parser trying exactly `strategies`, in order
    pub fn with_strategies(strategies: Vec<Box<dyn MemoryFieldStrategy>>) -> Self {
        Self { strategies }
    }

    /// Append a strategy tried after the existing ones
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn MemoryFieldStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Names of the strategies, in the order they are tried
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Read total/used/free off a memory summary line
    pub fn extract_fields(&self, line: &str) -> Result<MemoryFields> {
        self.strategies
            .iter()
            .find_map(|strategy| {
                let fields = strategy.extract(line)?;
                debug!(strategy = strategy.name(), "Memory fields extracted");
                Some(fields)
            })
            .ok_or_else(|| Error::memory_fields_not_found(line.trim()))
    }

    /// Parse the normalized memory figures out of the monitor output lines
    pub fn parse(&self, lines: &[&str]) -> Result<NormalizedMemory> {
        let line = find_memory_line(lines)?;
        let fields = self.extract_fields(line)?;
        let unit = detect_unit(line).unwrap_or_else(|| {
            debug!(
                default = %DEFAULT_MEMORY_UNIT,
                "No unit token on memory line, applying default unit"
            );
            DEFAULT_MEMORY_UNIT
        });
        Ok(fields.normalize(unit))
    }
}

impl Default for MemoryLineParser {
    fn default() -> Self {
        Self::new()
    }
}
