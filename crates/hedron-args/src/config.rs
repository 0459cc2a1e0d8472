//! Options for parsing captured driver output.
//!
//! Loaded from the `[capture]` table of a TOML file:
//!
//! ```toml
//! [capture]
//! allow_leading_output = true
//! allow_trailing_output = false
//! accept_crlf = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureOptions {
    /// Tolerate driver output before the begin sentinel
    pub allow_leading_output: bool,
    /// Tolerate driver output after the end sentinel
    pub allow_trailing_output: bool,
    /// Strip `\r` from block lines when the begin sentinel arrived as `\r\n`
    pub accept_crlf: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            allow_leading_output: true,
            allow_trailing_output: true,
            accept_crlf: true,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct CaptureFile {
    capture: CaptureOptions,
}

impl CaptureOptions {
    /// Reject any output outside the argument block.
    pub fn strict() -> Self {
        Self {
            allow_leading_output: false,
            allow_trailing_output: false,
            accept_crlf: false,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CaptureFile = toml::from_str(contents)?;
        Ok(file.capture)
    }

    /// Load options from a TOML file; missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading capture options from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Default options as a TOML document
    pub fn default_toml() -> Result<String> {
        Ok(toml::to_string_pretty(&CaptureFile::default())?)
    }
}
