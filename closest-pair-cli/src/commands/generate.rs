#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, Command};
use closest_pair::prelude::{Coordinate, DefaultRandom, Random, SeededRandom};
use closest_pair_cli::extensions::generate::{generate_points, write_points};

const SIZE_ARG_NAME: &str = "size";
const MIN_ARG_NAME: &str = "min";
const MAX_ARG_NAME: &str = "max";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates random points which can be used as solver input")
        .arg(Arg::new(SIZE_ARG_NAME).help("Specifies amount of points").short('s').long(SIZE_ARG_NAME).required(true))
        .arg(
            Arg::new(MIN_ARG_NAME)
                .help("Specifies minimum coordinate value")
                .long(MIN_ARG_NAME)
                .required(false)
                .allow_negative_numbers(true)
                .default_value("-1000"),
        )
        .arg(
            Arg::new(MAX_ARG_NAME)
                .help("Specifies maximum coordinate value")
                .long(MAX_ARG_NAME)
                .required(false)
                .allow_negative_numbers(true)
                .default_value("1000"),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies seed to make output reproducible")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for generated points")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches, out_writer_func: OutWriterFn) -> GenericResult<()> {
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "amount of points")?
        .ok_or_else(|| GenericError::from("amount of points is not specified"))?;
    let min = parse_int_value::<Coordinate>(matches, MIN_ARG_NAME, "minimum coordinate")?.unwrap_or(-1000);
    let max = parse_int_value::<Coordinate>(matches, MAX_ARG_NAME, "maximum coordinate")?.unwrap_or(1000);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let random: Box<dyn Random> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(DefaultRandom::default()),
    };
    let points = generate_points(size, (min, max), random.as_ref())?;

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out points")).transpose()?;
    let mut writer = out_writer_func(out_file);
    write_points(&mut writer, points.as_slice())?;
    writer.flush()?;

    Ok(())
}
