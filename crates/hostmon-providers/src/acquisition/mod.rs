//! Raw sample acquisition providers

/// `top` style monitor command
pub mod top;

pub use top::TopCommandSource;
