//! Logging setup.
//!
//! The engine logs through the `log` facade; `init_logging` installs the
//! `env_logger` backend for binaries that want one.

mod init;

pub use init::{init_logging, LoggingConfig};
