//! `catalog` binary. Everything lives in `cli/`; this file only hands off.
//!
//! Failures are reported on stderr as one line and the process still exits 0.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("An error occurred: {}", e);
    }
}
