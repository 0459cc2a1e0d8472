//! Recovering an argument vector from a build driver's captured stdout.
//!
//! The driver may print its own output around the wrapper's block, so the
//! parser scans for the begin sentinel, takes every line up to the end
//! sentinel verbatim, and checks what surrounds the block against
//! [`CaptureOptions`].
//!
//! An argument that is itself a sentinel string, or that contains a newline,
//! cannot be represented in the block.

use crate::{CaptureError, CaptureOptions, Result, BEGIN_ARGS, END_ARGS};

/// Arguments recovered from a sentinel-delimited block, as raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedArgs {
    args: Vec<Vec<u8>>,
}

impl CapturedArgs {
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn as_bytes(&self) -> &[Vec<u8>] {
        &self.args
    }

    pub fn into_inner(self) -> Vec<Vec<u8>> {
        self.args
    }

    /// Decode every argument as UTF-8, failing on the first invalid one.
    pub fn to_strings(&self) -> Result<Vec<String>> {
        self.args
            .iter()
            .enumerate()
            .map(|(index, arg)| {
                String::from_utf8(arg.clone()).map_err(|_| CaptureError::InvalidUtf8 { index })
            })
            .collect()
    }

    pub fn to_strings_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| String::from_utf8_lossy(arg).into_owned())
            .collect()
    }
}

/// Split on `\n`; a final newline terminates the last line rather than
/// starting an empty one.
fn lines(output: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = output.strip_suffix(b"\n").unwrap_or(output);
    body.split(|b| *b == b'\n')
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Parse the first argument block out of `output`.
pub fn parse_captured(output: &[u8], options: &CaptureOptions) -> Result<CapturedArgs> {
    let begin = BEGIN_ARGS.as_bytes();
    let end = END_ARGS.as_bytes();
    let mut lines = lines(output);

    let mut leading = 0usize;
    let crlf = loop {
        let Some(line) = lines.next() else {
            return Err(CaptureError::MissingBegin);
        };
        if line == begin {
            break false;
        }
        if options.accept_crlf && strip_cr(line) == begin {
            break true;
        }
        leading += 1;
    };

    if leading > 0 {
        if !options.allow_leading_output {
            return Err(CaptureError::UnexpectedLeadingOutput { lines: leading });
        }
        crate::log_capture_debug!("Skipped driver output before argument block", lines = leading);
    }

    let mut args = Vec::new();
    loop {
        let Some(line) = lines.next() else {
            return Err(CaptureError::MissingEnd { args: args.len() });
        };
        let line = if crlf { strip_cr(line) } else { line };
        if line == end {
            break;
        }
        if line == begin {
            return Err(CaptureError::NestedBegin { index: args.len() });
        }
        args.push(line.to_vec());
    }

    let trailing = lines.count();
    if trailing > 0 {
        if !options.allow_trailing_output {
            return Err(CaptureError::UnexpectedTrailingOutput { lines: trailing });
        }
        crate::log_capture_debug!("Ignored driver output after argument block", lines = trailing);
    }

    if crlf {
        crate::log_capture_warn!("Argument block used CRLF line endings", args = args.len());
    }

    crate::log_capture_debug!("Parsed argument block", args = args.len());
    Ok(CapturedArgs { args })
}
