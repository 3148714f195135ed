//! Logger initialization.
//!
//! Library code logs through the `log` facade only; binaries install the
//! `env_logger` backend once via [`init_logging`].

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, init_logging};
