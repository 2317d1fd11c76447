#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use closest_pair::prelude::*;
use closest_pair::utils::Timer;
use closest_pair_cli::extensions::import::{PointsReader, parse_points};
use closest_pair_cli::extensions::solve::{OutputFormat, write_solution};
use std::io::BufReader;
use std::sync::Arc;

const INPUT_ARG_NAME: &str = "INPUT";
const POINTS_ARG_NAME: &str = "points";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const FORMAT_ARG_NAME: &str = "format";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds the closest pair of points")
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets the file with a flat list of integer coordinates")
                .required(false)
                .conflicts_with(POINTS_ARG_NAME)
                .index(1),
        )
        .arg(
            Arg::new(POINTS_ARG_NAME)
                .help("Specifies inline list of coordinates, e.g. \"1,4 6,8 7,4\"")
                .short('p')
                .long(POINTS_ARG_NAME)
                .required(false)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies algorithm to use")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .required(false)
                .default_value("divide-conquer")
                .value_parser(["divide-conquer", "brute-force"]),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether search progress should be logged")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve(matches: &ArgMatches, out_writer_func: OutWriterFn) -> GenericResult<()> {
    let timer = Timer::start();
    let logger = get_log_target(matches).map(create_logger);

    let points = read_points(matches)?;
    let algorithm = get_string_value(matches, ALGORITHM_ARG_NAME)?.parse::<Algorithm>()?;
    let format = get_string_value(matches, FORMAT_ARG_NAME)?.parse::<OutputFormat>()?;

    let solver = Solver::default().with_algorithm(algorithm);
    let solver = if let Some(logger) = logger.clone() { solver.with_logger(logger) } else { solver };
    let solution = solver.solve(points.as_slice())?;

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut writer = out_writer_func(out_file);
    write_solution(&mut writer, &solution, format)?;
    writer.flush()?;

    if let Some(logger) = logger {
        (logger)(format!("total time: {}ms", timer.elapsed_millis()).as_str());
    }

    Ok(())
}

/// Specifies where search progress is logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogTarget {
    Stdout,
    Stderr,
}

fn get_log_target(matches: &ArgMatches) -> Option<LogTarget> {
    if !matches.get_flag(LOG_ARG_NAME) {
        return None;
    }

    // NOTE result is written to stdout when no output file is given and logs must not mix with it
    if matches.get_one::<String>(OUT_RESULT_ARG_NAME).is_some() {
        Some(LogTarget::Stdout)
    } else {
        Some(LogTarget::Stderr)
    }
}

fn create_logger(target: LogTarget) -> InfoLogger {
    match target {
        LogTarget::Stdout => Arc::new(|msg: &str| println!("{msg}")),
        LogTarget::Stderr => Arc::new(|msg: &str| eprintln!("{msg}")),
    }
}

fn read_points(matches: &ArgMatches) -> GenericResult<Vec<Point>> {
    match (matches.get_one::<String>(INPUT_ARG_NAME), matches.get_one::<String>(POINTS_ARG_NAME)) {
        (Some(path), None) => BufReader::new(open_file(path, "input")?).read_points(),
        (None, Some(points)) => parse_points(points),
        _ => Err("points should be specified either with input file or inline".into()),
    }
}

fn get_string_value<'a>(matches: &'a ArgMatches, arg_name: &str) -> GenericResult<&'a str> {
    matches
        .get_one::<String>(arg_name)
        .map(|value| value.as_str())
        .ok_or_else(|| format!("no '{arg_name}' value").into())
}
