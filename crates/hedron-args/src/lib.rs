//! # hedron-args
//!
//! Argument echo for fake compiler wrappers.
//!
//! A build driver (for example `emcc`) is pointed at a wrapper binary instead
//! of a real compiler. The wrapper prints the argument vector it received
//! between two sentinel lines and exits with status 1, so the driver stops and
//! an extraction tool can recover the exact compiler command line from the
//! captured stdout.
//!
//! This crate owns both sides of that contract:
//! - [`echo`]: writing the sentinel-delimited block
//! - [`capture`]: parsing it back out of a driver's stdout

pub mod capture;
pub mod config;
pub mod echo;
pub mod logging;

pub use capture::{parse_captured, CapturedArgs};
pub use config::CaptureOptions;
pub use echo::{echo_process_args, exit_code, render_args, write_args, EXIT_CODE};

#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Line written before the first argument.
pub const BEGIN_ARGS: &str = "===HEDRON_COMPILE_COMMANDS_BEGIN_ARGS===";

/// Line written after the last argument.
pub const END_ARGS: &str = "===HEDRON_COMPILE_COMMANDS_END_ARGS===";

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("begin sentinel not found in captured output")]
    MissingBegin,

    #[error("end sentinel not found after {args} captured arguments")]
    MissingEnd { args: usize },

    #[error("second begin sentinel inside argument block at argument {index}")]
    NestedBegin { index: usize },

    #[error("{lines} lines of output before the begin sentinel")]
    UnexpectedLeadingOutput { lines: usize },

    #[error("{lines} lines of output after the end sentinel")]
    UnexpectedTrailingOutput { lines: usize },

    #[error("argument {index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
