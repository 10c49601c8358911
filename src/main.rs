//! deejay CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, reports failures as a
//! FATAL log line on stderr and exits non-zero.

use deejay::cli;
use deejay::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal(
            "DEEJAY_CLI_FAILED",
            &[("code", e.code_str()), ("message", e.message())],
        );
        std::process::exit(1);
    }
}
