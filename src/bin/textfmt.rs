//! Command-line interface for textfmt
//!
//! Usage:
//!   textfmt `<input-file>` `<output-file>`
//!
//! Reads the input file whole, rewrites it according to its inline
//! directive markers, and writes the result to the output file. Exits 0 on
//! success and 1 on an argument or I/O failure, with a message on stderr.
//! Set RUST_LOG to see processing diagnostics.

use clap::error::ErrorKind;
use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("textfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrites a text document according to inline directive markers")
        .arg(
            Arg::new("input")
                .help("Path to the text file to format")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Path to write the formatted text to")
                .required(true)
                .index(2),
        )
        .try_get_matches();

    let matches = match matches {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();

    if let Err(e) = textfmt::textfmt::processor::process_file(input, output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
