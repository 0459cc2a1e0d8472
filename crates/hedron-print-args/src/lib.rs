//! # hedron-print-args
//!
//! Fake compiler wrappers. Each binary prints its arguments between the
//! `hedron_args` sentinel lines and exits with status 1.
//!
//! Two binaries exist because toolchains wrap the compiler differently; they
//! differ only in how the block reaches stdout.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::ExitCode;

/// How the block is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Render the block, then write it in one call (`print-args`)
    Stdio,
    /// Stream the block line by line (`print-args-cc`)
    Iostream,
}

impl Flavor {
    pub fn write_to<W, I>(self, out: &mut W, args: I) -> io::Result<()>
    where
        W: Write + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        match self {
            Flavor::Stdio => out.write_all(&hedron_args::render_args(args))?,
            Flavor::Iostream => hedron_args::write_args(out, args)?,
        }
        out.flush()
    }

    /// Write this process's arguments, skipping the program name.
    pub fn echo_process_args<W: Write + ?Sized>(self, out: &mut W) -> io::Result<()> {
        match self {
            Flavor::Stdio => self.write_to(out, std::env::args_os().skip(1)),
            Flavor::Iostream => {
                hedron_args::echo_process_args(out)?;
                out.flush()
            }
        }
    }
}

/// Let a closed stdout pipe terminate the process by signal, as a C
/// program would, instead of surfacing `EPIPE` as a write error.
pub fn restore_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// Echo this process's arguments to stdout and return the wrapper exit code.
///
/// Write failures are swallowed: stderr must stay empty and the exit code
/// is 1 either way.
pub fn run(flavor: Flavor) -> ExitCode {
    restore_sigpipe();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = flavor.echo_process_args(&mut out);

    hedron_args::exit_code()
}
