//! Structured logging for the echo and capture components.
//!
//! Events carry a `component` field so the two sides of the sentinel
//! contract can be filtered separately.
//!
//! The wrapper binaries never install a subscriber: their stderr must stay
//! empty, so events emitted on the echo path are dropped. Tools that parse
//! captured output call [`init_logging`] themselves.
//!
//! # Usage
//!
//! ```ignore
//! use hedron_args::logging::*;
//!
//! init_logging(LogLevel::Debug);
//! hedron_args::log_capture_debug!("Parsed block", args = 4);
//! ```

/// Component identifiers for log filtering
pub struct Component;

impl Component {
    pub const ECHO: &'static str = "ECHO";
    pub const CAPTURE: &'static str = "CAPTURE";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive string understood by `EnvFilter`
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// === ECHO logging macros ===

#[macro_export]
macro_rules! log_echo_debug {
    ($msg:literal $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::tracing::debug!(component = $crate::logging::Component::ECHO, $($key = $value,)* $msg)
    };
}

// === CAPTURE logging macros ===

#[macro_export]
macro_rules! log_capture_warn {
    ($msg:literal $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::tracing::warn!(component = $crate::logging::Component::CAPTURE, $($key = $value,)* $msg)
    };
}

#[macro_export]
macro_rules! log_capture_debug {
    ($msg:literal $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::tracing::debug!(component = $crate::logging::Component::CAPTURE, $($key = $value,)* $msg)
    };
}

/// Install a stderr `fmt` subscriber.
///
/// `HEDRON_LOG` takes priority over `RUST_LOG`; `level` applies when neither
/// is set. Returns `false` if a global subscriber was already installed.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_env("HEDRON_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
