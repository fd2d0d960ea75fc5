#[macro_use]
extern crate clap;

use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter, Write};
use std::process;

use clap::{App, Arg};
use log::debug;

use sha256hex::driver::{self, Config, InvalidLine, Source};

/// Parses `args`, hashes the selected input into `output` and returns the
/// process exit status. Errors go to stderr.
fn run_cli<I, T, W>(args: I, output: W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let matches = App::new("sha256hex")
        .version(crate_version!())
        .about("Print the SHA-256 digest of each hex-encoded input line")
        .arg(
            Arg::with_name("skip-invalid")
                .short("s")
                .long("skip-invalid")
                .takes_value(false)
                .help("Skip lines that are not valid hex instead of stopping"),
        )
        .arg(
            Arg::with_name("INPUT")
                .value_name("INPUT")
                .help("File with one hex message per line; reads stdin if absent or \"-\""),
        )
        .get_matches_from(args);

    let source = Source::from_arg(matches.value_of("INPUT"));
    let config = Config {
        on_invalid: if matches.is_present("skip-invalid") {
            InvalidLine::Skip
        } else {
            InvalidLine::Abort
        },
    };
    debug!("reading from {}", source);

    let input = match source.open() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("sha256hex: {}", e);
            return 1;
        }
    };

    match driver::run(input, output, &config) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("sha256hex: {}", e);
            1
        }
    }
}

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    let status = run_cli(env::args_os(), BufWriter::new(stdout.lock()));
    process::exit(status);
}
