use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::{execute, terminal::SetTitle};
use shuffle_core::{DEFAULT_LIVES, DefaultPlayerFactory, GameProcessor, RandomBoardFactory};

use console::ConsoleUi;

mod console;
mod logging;
mod render;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Move your piece to the top of the board, mind the hidden mines",
    long_about = None
)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Lives each player starts with
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LIVES,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    lives: i32,

    /// Plain text output, no colors and no screen clearing
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose.tracing_level_filter());
    log::debug!("seed: {:?}, lives: {}", args.seed, args.lives);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let styled = !args.no_color;
    if styled {
        execute!(io::stdout(), SetTitle("Shuffle!")).context("Error configuring console")?;
        log::info!("Console configured");
    }

    let mut ui = ConsoleUi::new(io::stdin().lock(), io::stdout().lock(), styled);
    let mut boards = match args.seed {
        Some(seed) => RandomBoardFactory::with_seed(seed),
        None => RandomBoardFactory::new(),
    };
    let players = DefaultPlayerFactory::new(args.lives);

    GameProcessor::new(&mut ui, &mut boards, &players)
        .start_game()
        .context("Game aborted")?;
    Ok(())
}

fn failure_message(err: &anyhow::Error) -> String {
    format!("An error occurred: {err:#}")
}
