//! pbgermline CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! pipeline, and exit with the external tool's own exit code. Argument and
//! validation errors print usage and exit 1; so does `-h`. For programmatic
//! use, prefer the library API (`pbgermline::api`).

use clap::{CommandFactory, Parser};

mod cli;

fn main() {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // covers parse errors and help/version requests alike
            let _ = err.print();
            std::process::exit(1);
        }
    };

    match cli::run(args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{}", cli::CliArgs::command().render_usage());
            std::process::exit(1);
        }
    }
}
