//! Integration tests for the print-args wrapper binaries

use std::ffi::OsStr;
use std::process::{Command, Output, Stdio};

use anyhow::{Context, Result};
use hedron_args::{parse_captured, CaptureOptions, BEGIN_ARGS, END_ARGS};

const WRAPPERS: [&str; 2] = [
    env!("CARGO_BIN_EXE_print-args"),
    env!("CARGO_BIN_EXE_print-args-cc"),
];

/// Helper to run a wrapper binary with the given arguments
fn wrapper<I, S>(bin: &str, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(bin)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("failed to execute {bin}"))
}

fn expected(args: &[&str]) -> String {
    let mut s = format!("{BEGIN_ARGS}\n");
    for arg in args {
        s.push_str(arg);
        s.push('\n');
    }
    s.push_str(END_ARGS);
    s.push('\n');
    s
}

fn assert_echoes(args: &[&str]) -> Result<()> {
    for bin in WRAPPERS {
        let output = wrapper(bin, args)?;
        assert_eq!(output.status.code(), Some(1), "{bin}");
        assert!(output.stderr.is_empty(), "{bin} wrote to stderr");
        assert_eq!(String::from_utf8(output.stdout)?, expected(args), "{bin}");
    }
    Ok(())
}

#[test]
fn test_no_arguments() -> Result<()> {
    assert_echoes(&[])
}

#[test]
fn test_compile_flags() -> Result<()> {
    assert_echoes(&["-c", "foo.c"])
}

#[test]
fn test_argument_with_spaces() -> Result<()> {
    assert_echoes(&["--flag=value with spaces"])
}

#[test]
fn test_single_empty_argument() -> Result<()> {
    assert_echoes(&[""])
}

#[test]
fn test_flags_are_not_interpreted() -> Result<()> {
    assert_echoes(&["--help", "--version", "-", "--"])
}

#[test]
fn test_realistic_compile_command() -> Result<()> {
    assert_echoes(&[
        "-U_FORTIFY_SOURCE",
        "-fstack-protector",
        "-Wall",
        "-iquote",
        "external/emsdk",
        "-DNDEBUG",
        "-c",
        "src/main.cc",
        "-o",
        "bazel-out/wasm-opt/bin/_objs/main/main.o",
    ])
}

#[test]
fn test_repeated_runs_are_identical() -> Result<()> {
    let args = ["-I", "include", "-c", "a.cc"];
    for bin in WRAPPERS {
        let first = wrapper(bin, args)?;
        let second = wrapper(bin, args)?;
        assert_eq!(first.stdout, second.stdout);
        assert_eq!(first.status.code(), second.status.code());
    }
    Ok(())
}

#[test]
fn test_wrappers_agree() -> Result<()> {
    let args = ["-x", "c++", "", "with space", "-o", "out.o"];
    let [c, cc] = WRAPPERS;
    assert_eq!(wrapper(c, args)?.stdout, wrapper(cc, args)?.stdout);
    Ok(())
}

#[test]
fn test_output_parses_back() -> Result<()> {
    let args = ["-c", "", "two words", "foo.c"];
    for bin in WRAPPERS {
        let output = wrapper(bin, args)?;
        let captured = parse_captured(&output.stdout, &CaptureOptions::strict())?;
        assert_eq!(captured.to_strings()?, args);
    }
    Ok(())
}

#[test]
fn test_exit_code_with_stdout_discarded() -> Result<()> {
    for bin in WRAPPERS {
        let status = Command::new(bin)
            .args(["-c", "foo.c"])
            .stdout(Stdio::null())
            .status()?;
        assert_eq!(status.code(), Some(1));
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_passes_through() -> Result<()> {
    use std::os::unix::ffi::OsStrExt;

    let raw = OsStr::from_bytes(b"caf\xe9.c");
    for bin in WRAPPERS {
        let output = wrapper(bin, [OsStr::new("-c"), raw])?;
        assert_eq!(output.status.code(), Some(1));

        let mut expected = format!("{BEGIN_ARGS}\n-c\n").into_bytes();
        expected.extend_from_slice(b"caf\xe9.c\n");
        expected.extend_from_slice(END_ARGS.as_bytes());
        expected.push(b'\n');
        assert_eq!(output.stdout, expected);
    }
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_stdout_is_ignored() -> Result<()> {
    use std::fs::OpenOptions;

    for bin in WRAPPERS {
        let full = OpenOptions::new().write(true).open("/dev/full")?;
        let output = Command::new(bin)
            .args(["-c", "foo.c"])
            .stdout(Stdio::from(full))
            .output()?;
        assert_eq!(output.status.code(), Some(1), "{bin}");
        assert!(output.stderr.is_empty(), "{bin} wrote to stderr");
    }
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_closed_pipe_kills_with_sigpipe() -> Result<()> {
    use std::os::fd::{FromRawFd, OwnedFd};
    use std::os::unix::process::ExitStatusExt;

    for bin in WRAPPERS {
        let mut fds = [0; 2];
        assert_eq!(unsafe { libc::pipe2(fds.as_mut_ptr(), libc::O_CLOEXEC) }, 0);
        let (reader, writer) =
            unsafe { (OwnedFd::from_raw_fd(fds[0]), OwnedFd::from_raw_fd(fds[1])) };
        // No reader exists by the time the wrapper writes its first line.
        drop(reader);

        let output = Command::new(bin)
            .args(["-c", "foo.c"])
            .stdout(Stdio::from(writer))
            .output()?;
        assert_eq!(output.status.signal(), Some(libc::SIGPIPE), "{bin}");
        assert!(output.stderr.is_empty(), "{bin} wrote to stderr");
    }
    Ok(())
}
