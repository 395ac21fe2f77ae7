use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::Result;
use ecosystem_life::{
    game::{Game, TurnSummary},
    life::{
        animal::RandomSex,
        display::{board_rows, render},
        input::{ConstInputReader, FileInputReader, InputReader},
        legend::Legend,
        parser::BoardParser,
    },
};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

const DEFAULT_TURNS: u64 = 10;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Turn-based savanna: lions, crocodiles, elephants and antelopes move, eat
/// and breed on a grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of turns to play after the initial board
    #[arg(short, long, default_value_t = DEFAULT_TURNS)]
    turns: u64,

    /// Seed for offspring sex; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Read the board from a file, one row per line
    #[arg(short, long)]
    board: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    turn:    u64,
    width:   i64,
    height:  i64,
    rows:    Vec<String>,
    summary: Option<&'a TurnSummary>,
}

fn display(
    game: &Game,
    legend: &Legend,
    format: Format,
    summary: Option<&TurnSummary>,
) -> Result<()> {
    match format {
        Format::Text => print!("{}", render(game, legend)?),
        Format::Json => {
            let snapshot = Snapshot {
                turn: game.current_turn_number(),
                width: game.board().width(),
                height: game.board().height(),
                rows: board_rows(game.board(), legend)?,
                summary,
            };
            println!("{}", serde_json::to_string(&snapshot)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let args = Args::parse();

    let reader: Box<dyn InputReader> = match &args.board {
        Some(path) => Box::new(FileInputReader::new(path)),
        None => Box::new(ConstInputReader::default()),
    };

    let legend = Legend::default();
    let board = BoardParser::new(&legend).parse(&reader.read_input()?)?;

    let mut game = match args.seed {
        Some(seed) => Game::with_seed(board, seed),
        None => Game::new(board, Box::new(RandomSex::new(StdRng::from_entropy()))),
    };

    display(&game, &legend, args.format, None)?;
    for _ in 0..args.turns {
        let summary = game.next_turn();
        info!(
            "turn {}: {} moved, {} eaten, {} born, {} lost, population {}",
            summary.turn,
            summary.movement.moved,
            summary.eating.eaten,
            summary.breeding.born,
            summary.breeding.lost_offspring,
            game.board().population()
        );
        display(&game, &legend, args.format, Some(&summary))?;
    }

    Ok(())
}
