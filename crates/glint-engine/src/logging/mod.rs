//! Logging setup.
//!
//! The engine logs through the `log` facade only; this module installs
//! `env_logger` for binaries that want a ready-made backend.

mod init;

pub use init::{init_logging, LoggingConfig};
