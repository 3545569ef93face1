use std::env;
use std::fmt::Display;
use std::str::FromStr;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::debug;

use puzzle_solver::fs;
use puzzle_solver::parser::{self, ParserErr};
use puzzle_solver::puzzles::jam::JamState;
use puzzle_solver::puzzles::strings::StringState;
use puzzle_solver::puzzles::tilt::TiltState;
use puzzle_solver::state::State;
use puzzle_solver::Solve;

fn main() {
    env_logger::init();

    let file_arg = Arg::with_name("file")
        .required(true)
        .help("board file");

    let matches = App::new("puzzle-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds the shortest solution of a puzzle using breadth-first search")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .global(true)
                .help("print search progress and statistics"),
        )
        .subcommand(
            SubCommand::with_name("strings")
                .about("Change one letter by one step at a time to reach the final string")
                .arg(Arg::with_name("start").required(true))
                .arg(Arg::with_name("final").required(true)),
        )
        .subcommand(
            SubCommand::with_name("water")
                .about("Measure an amount of water using buckets")
                .arg(Arg::with_name("amount").required(true))
                .arg(
                    Arg::with_name("buckets")
                        .required(true)
                        .multiple(true)
                        .help("capacity of each bucket"),
                ),
        )
        .subcommand(
            SubCommand::with_name("jam")
                .about("Slide cars until car X reaches the exit")
                .arg(file_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("tilt")
                .about("Tilt the board until all green sliders fall into holes")
                .arg(file_arg),
        )
        .get_matches();

    let (name, sub_matches) = matches.subcommand();
    let verbose = matches.is_present("verbose")
        || sub_matches.map_or(false, |m| m.is_present("verbose"));
    debug!("Running {} with verbose={}", name, verbose);

    match (name, sub_matches) {
        ("strings", Some(m)) => run_strings(m, verbose),
        ("water", Some(m)) => run_water(m, verbose),
        ("jam", Some(m)) => run_board::<JamState>(m, verbose),
        ("tilt", Some(m)) => run_board::<TiltState>(m, verbose),
        _ => println!("{}", matches.usage()),
    }
}

fn run_strings(matches: &ArgMatches<'_>, verbose: bool) {
    let start = matches.value_of("start").unwrap();
    let target = matches.value_of("final").unwrap();

    let state = match StringState::new(start, target) {
        Ok(state) => state,
        Err(err) => return print_parser_err(&err),
    };

    println!("Start string: {}, Final string: {}", start, target);
    report(&state, false, verbose);
}

fn run_water(matches: &ArgMatches<'_>, verbose: bool) {
    let amount = matches.value_of("amount").unwrap();
    let buckets: Vec<_> = matches.values_of("buckets").unwrap().collect();

    let state = match parser::parse_water(amount, &buckets) {
        Ok(state) => state,
        Err(err) => return print_parser_err(&err),
    };

    println!(
        "Amount: {}, Buckets: {:?}",
        state.amount(),
        state.capacities()
    );
    report(&state, false, verbose);
}

fn run_board<B>(matches: &ArgMatches<'_>, verbose: bool)
where
    B: State + Display + FromStr<Err = ParserErr>,
{
    let path = matches.value_of("file").unwrap();

    let board = match fs::read_file(path) {
        Ok(board) => board,
        Err(err) => {
            match env::current_dir() {
                Ok(dir) => println!("Can't read file {} in {}: {}", path, dir.display(), err),
                Err(_) => println!("Can't read file {}: {}", path, err),
            }
            return;
        }
    };

    let state: B = match board.parse() {
        Ok(state) => state,
        Err(err) => return print_parser_err(&err),
    };

    println!("File: {}", path);
    println!("{}", state);
    report(&state, true, verbose);
}

fn print_parser_err(err: &ParserErr) {
    println!("Failed to parse: {}", err);
}

/// Boards span several lines so each step gets its own block.
fn report<S: State + Display>(start: &S, multiline: bool, verbose: bool) {
    let solution = start.solve(verbose);

    if verbose {
        println!("{}", solution.stats);
    }
    println!("Total configs: {}", solution.stats.total_created());
    println!("Unique configs: {}", solution.stats.total_unique());

    match solution.path_states {
        None => println!("No Solution"),
        Some(path) => {
            for (i, state) in path.iter().enumerate() {
                if multiline {
                    println!("Step {}:\n{}\n", i, state);
                } else {
                    println!("Step {}: {}", i, state);
                }
            }
        }
    }
}
