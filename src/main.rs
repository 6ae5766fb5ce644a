#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use env_logger::Env;
use log::info;
use text_io::try_read;
use twenty48_lib::{
  notation::to_notation,
  perf::{self, PerfConfig},
  utils::{format_duration, format_number},
  Board, Grid, Move, MoveSignal,
};

fn cli() -> Command<'static> {
  Command::new("2048")
    .version("1.0")
    .about("Deterministic 2048 engine")
    .subcommand_required(true)
    .arg_required_else_help(true)
    .arg(
      Arg::new("seed")
        .short('s')
        .long("seed")
        .help("Seed of the random tile generator (default is 0)")
        .takes_value(true)
        .value_name("SEED")
        .value_parser(value_parser!(i64))
        .allow_hyphen_values(true)
        .global(true),
    )
    .subcommand(
      Command::new("play")
        .about("Play interactively, one move per line (w/a/s/d or up/left/down/right)")
        .arg(
          Arg::new("board")
            .short('b')
            .long("board")
            .help("Starting layout, e.g. 2,2,4,4/0,0,0,2//1024")
            .takes_value(true)
            .value_name("NOTATION")
            .value_parser(value_parser!(Grid)),
        ),
    )
    .subcommand(
      Command::new("perf")
        .about("Play many games in parallel and report throughput")
        .arg(
          Arg::new("games")
            .short('g')
            .long("games")
            .help("How many games to play (default is 1000)")
            .takes_value(true)
            .value_parser(value_parser!(u32)),
        )
        .arg(
          Arg::new("threads")
            .short('t')
            .long("threads")
            .help("How many threads to use (default is the number of CPUs)")
            .takes_value(true)
            .value_parser(value_parser!(usize)),
        ),
    )
}

fn main() -> Result<()> {
  let matches = cli().get_matches();
  env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

  match matches.subcommand() {
    Some(("perf", sub)) => run_perf(sub),
    Some(("play", sub)) => run_play(sub),
    _ => unreachable!("clap requires a subcommand"),
  }
}

fn seed(matches: &ArgMatches) -> i64 {
  matches.get_one::<i64>("seed").copied().unwrap_or(0)
}

fn run_play(matches: &ArgMatches) -> Result<()> {
  let seed = seed(matches);

  let mut board = match matches.get_one::<Grid>("board") {
    Some(grid) => Board::from_grid(*grid, seed),
    None => Board::new(seed),
  };

  println!("board:\n{board}");

  loop {
    let line: String = match try_read!("{}\n") {
      Ok(line) => line,
      Err(_) => break,
    };
    let line = line.trim();

    if line.starts_with('$') {
      break;
    }

    let direction = match line.parse::<Move>() {
      Ok(direction) => direction,
      Err(err) => {
        println!("Invalid input: {err}");
        continue;
      }
    };

    let result = board.apply(direction);

    println!("board:\n{board}");
    println!("{}", board.status());

    match result {
      Ok(()) => {}
      Err(MoveSignal::NoFreeCell) => println!("No free cell left, but tiles can still merge"),
      Err(signal) => {
        println!("{signal}!\n$");
        break;
      }
    }
  }

  info!("final position {}", to_notation(board.grid()));

  Ok(())
}

fn run_perf(matches: &ArgMatches) -> Result<()> {
  let defaults = PerfConfig::default();

  let config = PerfConfig {
    games: matches
      .get_one::<u32>("games")
      .copied()
      .unwrap_or(defaults.games),
    threads: matches
      .get_one::<usize>("threads")
      .copied()
      .unwrap_or_else(num_cpus::get),
    first_seed: seed(matches),
    ..defaults
  };

  println!(
    "Playing {} games on {} threads\n",
    config.games, config.threads
  );

  let report = perf::run(&config).context("failed to start worker threads")?;

  println!("{}", report.stats);
  println!(
    "Moves/s: {}",
    format_number(report.moves_per_second())
  );
  println!("Time: {}", format_duration(report.elapsed));

  Ok(())
}
