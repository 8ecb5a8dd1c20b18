//! # Academia Observability
//!
//! Subscriber setup for `tracing` and descriptions for the metrics the
//! authorization layer records.
//!
//! - [`logging`]: console logging, plus rolling plain and JSON log files
//! - [`metrics`]: metric names and descriptions
//!
//! # Example
//!
//! ```ignore
//! use academia_observability::{LoggingConfig, init_tracing};
//!
//! let _guards = init_tracing(&LoggingConfig::from_env())?;
//! academia_observability::describe_metrics();
//! ```

pub mod logging;
pub mod metrics;

pub use self::logging::{LoggingConfig, init_basic_console_logging, init_tracing};
pub use self::metrics::{AUTHZ_DECISIONS_TOTAL, describe_metrics};
