//! Writing the sentinel-delimited argument block.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::ExitCode;

use crate::{BEGIN_ARGS, END_ARGS};

/// Status the wrapper exits with.
///
/// Non-zero so the build driver aborts instead of continuing as though the
/// compile had produced an object file.
pub const EXIT_CODE: u8 = 1;

pub fn exit_code() -> ExitCode {
    ExitCode::from(EXIT_CODE)
}

/// Write the begin sentinel, one line per argument, then the end sentinel.
///
/// Arguments are written as their raw encoded bytes with no quoting, so
/// empty strings, whitespace, and (on Unix) non-UTF-8 bytes pass through
/// unchanged.
pub fn write_args<W, I>(out: &mut W, args: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    out.write_all(BEGIN_ARGS.as_bytes())?;
    out.write_all(b"\n")?;

    let mut count = 0usize;
    for arg in args {
        out.write_all(arg.as_ref().as_encoded_bytes())?;
        out.write_all(b"\n")?;
        count += 1;
    }

    out.write_all(END_ARGS.as_bytes())?;
    out.write_all(b"\n")?;

    crate::log_echo_debug!("Echoed argument block", args = count);
    Ok(())
}

/// Render the whole block into memory.
pub fn render_args<I>(args: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    let mut buf = Vec::new();
    // Writes into a Vec never fail.
    let _ = write_args(&mut buf, args);
    buf
}

/// Echo this process's arguments, skipping the program name.
pub fn echo_process_args<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    write_args(out, std::env::args_os().skip(1))
}
