//! Monitor output parsing
//!
//! Turns one [`RawSample`] into readings. Each stage is a separate rule so it
//! can be tested on its own and new output variants can be added without
//! touching unrelated stages:
//!
//! | Stage | CPU | Memory |
//! |-------|-----|--------|
//! | marker-line lookup | [`cpu::find_cpu_line`] | [`memory::find_memory_line`] |
//! | field lookup | [`cpu::extract_idle`] | [`memory::MemoryFieldStrategy`] |
//! | unit detection | - | [`memory::detect_unit`] |
//! | scale | `100 - idle` | [`memory::MemoryFields::normalize`] |

pub mod cpu;
pub mod memory;
pub mod rules;

use crate::assembler;
use crate::error::Result;
use crate::value_objects::{CpuReading, MetricsSnapshot, NormalizedMemory, RawSample};

pub use memory::{
    KeywordAdjacentStrategy, LabeledFieldStrategy, MemoryFieldStrategy, MemoryFields,
    MemoryLineParser,
};

/// Readings parsed from one sample, before assembly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedSample {
    /// CPU reading
    pub cpu: CpuReading,
    /// Memory figures in MiB, unrounded
    pub memory: NormalizedMemory,
}

/// Parser for the complete monitor output
#[derive(Default)]
pub struct MonitorOutputParser {
    memory: MemoryLineParser,
}

impl MonitorOutputParser {
    /// Parser with the built-in memory strategies
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CPU and memory readings
    ///
    /// The CPU section is read first, so a sample missing both sections
    /// reports [`crate::Error::CpuLineNotFound`].
    pub fn parse(&self, sample: &RawSample) -> Result<ParsedSample> {
        let lines = sample.lines();
        let cpu = cpu::parse_cpu(&lines)?;
        let memory = self.memory.parse(&lines)?;
        Ok(ParsedSample { cpu, memory })
    }

    /// Parse and assemble a snapshot stamped with the sample's capture time
    pub fn parse_snapshot(&self, sample: &RawSample) -> Result<MetricsSnapshot> {
        let parsed = self.parse(sample)?;
        assembler::assemble(parsed.cpu, parsed.memory, sample.timestamp())
    }
}
