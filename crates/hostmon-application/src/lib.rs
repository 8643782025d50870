//! Application Layer - hostmon
//!
//! Orchestrates one metrics collection cycle on top of the domain crate:
//! acquire a raw sample, parse it, assemble the snapshot and hand it to the
//! snapshot store.
//!
//! ## Architecture
//!
//! The application layer:
//! - Defines the service interface the server talks to
//! - Implements it against the domain ports ([`hostmon_domain::ports`])
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `hostmon-domain`: value objects, parsing pipeline and ports
//! - `tokio` for the detached persistence task

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
