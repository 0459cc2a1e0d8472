//! Fake C++ compiler: prints its arguments between sentinel lines, exits 1.

use std::process::ExitCode;

use hedron_print_args::Flavor;

fn main() -> ExitCode {
    hedron_print_args::run(Flavor::Iostream)
}
