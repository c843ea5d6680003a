//! ClayDB CLI entry point
//!
//! A minimal entrypoint: parse arguments, dispatch to the CLI
//! module, print setup errors to stderr, exit non-zero on failure.

use claydb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
