//! Logging utilities.
//!
//! Library code only talks to the `log` facade; this module wires up
//! `env_logger` for binaries and test harnesses that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
