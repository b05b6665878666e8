//! Judge-style entry point: one instance on stdin, one number on stdout.
//!
//! Reads a count and that many integers, prints the maximum non-adjacent
//! sum followed by a newline, and exits 0. Malformed input or an
//! overflowing total prints a diagnostic on stderr and exits 1. No flags,
//! no environment, no files.

use std::io;

use path_mwis::{read_instance, try_best_total};

fn main() {
    let sequence = match read_instance(io::stdin().lock()) {
        Ok(values) => values,
        Err(err) => {
            eprintln!("mwis: {err}");
            std::process::exit(1);
        }
    };
    match try_best_total(&sequence) {
        Ok(total) => println!("{total}"),
        Err(err) => {
            eprintln!("mwis: {err}");
            std::process::exit(1);
        }
    }
}
