//! Sample Acquisition Port
//!
//! Defines the contract for obtaining one textual snapshot from the external
//! monitor command.

use crate::error::Result;
use crate::value_objects::RawSample;
use async_trait::async_trait;

/// Source of raw monitor output
///
/// # Example
///
/// ```no_run
/// use hostmon_domain::ports::SampleSource;
/// use std::sync::Arc;
///
/// async fn print_sample(source: Arc<dyn SampleSource>) -> hostmon_domain::Result<()> {
///     let sample = source.acquire().await?;
///     for line in sample.lines() {
///         println!("{line}");
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Run one acquisition
    ///
    /// Makes a single attempt. Fails with [`crate::Error::Acquisition`] when the
    /// command cannot be launched, exits non-zero, times out or prints nothing.
    async fn acquire(&self) -> Result<RawSample>;

    /// Human-readable description of what is invoked, for logs
    fn describe(&self) -> String;
}
