//! Monitor command sample source
//!
//! Runs the monitor (`top -b -n 1` by default) as an async child process and
//! captures its stdout as one [`RawSample`].

use crate::constants::{
    DEFAULT_MONITOR_ARGS, DEFAULT_MONITOR_PROGRAM, DEFAULT_MONITOR_TIMEOUT, MONITOR_LOCALE,
    STDERR_EXCERPT_MAX_CHARS,
};
use async_trait::async_trait;
use hostmon_domain::error::{Error, Result};
use hostmon_domain::ports::SampleSource;
use hostmon_domain::value_objects::RawSample;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Sample source backed by the monitor command
///
/// Each [`acquire`](SampleSource::acquire) spawns the command once, with
/// `LC_ALL=C`, and kills it if it outlives the timeout.
///
/// # Example
///
/// ```no_run
/// use hostmon_providers::acquisition::TopCommandSource;
/// use std::time::Duration;
///
/// let source = TopCommandSource::with_command("top", ["-b", "-n", "1", "-w", "512"])
///     .with_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct TopCommandSource {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl TopCommandSource {
    /// `top -b -n 1` with the default timeout
    pub fn new() -> Self {
        Self::with_command(DEFAULT_MONITOR_PROGRAM, DEFAULT_MONITOR_ARGS.iter().copied())
    }

    /// Run `program` with `args` instead of the default command
    pub fn with_command<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            timeout: DEFAULT_MONITOR_TIMEOUT,
        }
    }

    /// Replace the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Program name
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Program arguments
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Timeout for one invocation
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .env("LC_ALL", MONITOR_LOCALE)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

impl Default for TopCommandSource {
    fn default() -> Self {
        Self::new()
    }
}

fn stderr_excerpt(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .trim()
        .chars()
        .take(STDERR_EXCERPT_MAX_CHARS)
        .collect()
}

#[async_trait]
impl SampleSource for TopCommandSource {
    async fn acquire(&self) -> Result<RawSample> {
        let description = self.describe();
        let child = self.command().spawn().map_err(|e| {
            Error::acquisition_with_source(format!("Failed to launch `{description}`"), e)
        })?;

        // Dropping the pending future on timeout drops the child, which kills it
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                Error::acquisition(format!(
                    "`{description}` timed out after {:.1}s",
                    self.timeout.as_secs_f64()
                ))
            })?
            .map_err(|e| {
                Error::acquisition_with_source(
                    format!("Failed to read output of `{description}`"),
                    e,
                )
            })?;

        if !output.status.success() {
            let stderr = stderr_excerpt(&output.stderr);
            let message = if stderr.is_empty() {
                format!("`{description}` exited with {}", output.status)
            } else {
                format!("`{description}` exited with {}: {stderr}", output.status)
            };
            return Err(Error::acquisition(message));
        }

        let sample = RawSample::new(String::from_utf8_lossy(&output.stdout));
        if sample.is_blank() {
            return Err(Error::acquisition(format!("`{description}` produced no output")));
        }

        debug!(
            command = %description,
            bytes = output.stdout.len(),
            "Monitor output captured"
        );
        Ok(sample)
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
