//! A command line interface to *closest pair of points* solver.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

use clap::{ArgMatches, Command};
use closest_pair::prelude::GenericResult;
use commands::generate::{get_generate_app, run_generate};
use commands::solve::{get_solve_app, run_solve};
use commands::{OutWriterFn, create_write_buffer};
use std::process;

fn main() {
    let matches = get_app().get_matches();

    if let Err(err) = run_app(&matches, create_write_buffer) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Closest Pair Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to find the closest pair of points on a plane")
        .subcommand(get_solve_app())
        .subcommand(get_generate_app())
}

fn run_app(matches: &ArgMatches, out_writer_func: OutWriterFn) -> GenericResult<()> {
    match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, out_writer_func),
        Some(("generate", generate_matches)) => run_generate(generate_matches, out_writer_func),
        _ => Err("no subcommand was used. Use -h to print help information.".into()),
    }
}
