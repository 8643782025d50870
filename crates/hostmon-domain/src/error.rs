//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hostmon
///
/// The first group of variants is the metrics taxonomy: each one aborts the
/// current acquisition and is reported to the caller. None of them is ever
/// replaced by a zero or default reading.
#[derive(Error, Debug)]
pub enum Error {
    /// The monitor command could not be launched, failed, timed out or printed nothing
    #[error("Acquisition error: {message}")]
    Acquisition {
        /// Description of the acquisition failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No line in the sample carries the aggregate CPU marker
    #[error("CPU summary line not found in monitor output")]
    CpuLineNotFound,

    /// The CPU summary line has no recognisable idle field
    #[error("Idle CPU percentage not found in line: {line}")]
    IdleFieldNotFound {
        /// The CPU summary line that was inspected
        line: String,
    },

    /// A value was isolated but lies outside its valid range
    #[error("Invalid reading: {message}")]
    InvalidReading {
        /// Description of the violated range
        message: String,
    },

    /// No line in the sample carries the memory marker
    #[error("Memory summary line not found in monitor output")]
    MemLineNotFound,

    /// The memory line does not yield all of total, used and free
    #[error("Memory metrics not found in expected format: {line}")]
    MemoryFieldsNotFound {
        /// The memory summary line that was inspected
        line: String,
    },

    /// Total memory is zero, so the used percentage is undefined
    #[error("Total memory is zero; percentage used is undefined")]
    DivisionByZeroMemory,

    /// Snapshot persistence error
    #[error("Persistence error: {message}")]
    Persistence {
        /// Description of the persistence failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure error (logging setup, runtime wiring)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Acquisition error creation methods
impl Error {
    /// Create an acquisition error
    pub fn acquisition<S: Into<String>>(message: S) -> Self {
        Self::Acquisition {
            message: message.into(),
            source: None,
        }
    }

    /// Create an acquisition error with source
    pub fn acquisition_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Acquisition {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Parsing error creation methods
impl Error {
    /// Create an idle-field error for the given CPU line
    pub fn idle_field_not_found<S: Into<String>>(line: S) -> Self {
        Self::IdleFieldNotFound { line: line.into() }
    }

    /// Create a memory-fields error for the given memory line
    pub fn memory_fields_not_found<S: Into<String>>(line: S) -> Self {
        Self::MemoryFieldsNotFound { line: line.into() }
    }

    /// Create an invalid reading error
    pub fn invalid_reading<S: Into<String>>(message: S) -> Self {
        Self::InvalidReading {
            message: message.into(),
        }
    }
}

// Persistence error creation methods
impl Error {
    /// Create a persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persistence error with source
    pub fn persistence_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Ambient error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Stable name of the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Acquisition { .. } => "AcquisitionError",
            Self::CpuLineNotFound => "CpuLineNotFound",
            Self::IdleFieldNotFound { .. } => "IdleFieldNotFound",
            Self::InvalidReading { .. } => "InvalidReading",
            Self::MemLineNotFound => "MemLineNotFound",
            Self::MemoryFieldsNotFound { .. } => "MemoryFieldsNotFound",
            Self::DivisionByZeroMemory => "DivisionByZeroMemory",
            Self::Persistence { .. } => "PersistenceError",
            Self::Io { .. } => "IoError",
            Self::Configuration { .. } => "ConfigurationError",
            Self::Infrastructure { .. } => "InfrastructureError",
        }
    }

    /// Whether the error comes from reading the monitor output rather than running it
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::CpuLineNotFound
                | Self::IdleFieldNotFound { .. }
                | Self::InvalidReading { .. }
                | Self::MemLineNotFound
                | Self::MemoryFieldsNotFound { .. }
                | Self::DivisionByZeroMemory
        )
    }
}
