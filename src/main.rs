use anyhow::Result;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::io::{stdin, stdout, Write};

use connect4_engine::{
    board::{GameState, Side},
    strategy::StrategyKind,
    DEFAULT_DEPTH,
};

mod game;
use game::*;

/// Play Connect 4 against a minimax computer opponent
#[derive(Parser)]
#[command(name = "connect4")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of plies the computer looks ahead
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: usize,

    /// How the computer chooses its moves
    #[arg(short, long, value_enum, default_value_t = StrategyKind::Minimax)]
    strategy: StrategyKind,

    /// Who places the first piece
    #[arg(short, long, value_enum, default_value_t = FirstMover::Random)]
    first: FirstMover,

    /// Search the computer's candidate moves on multiple threads
    #[arg(short, long)]
    parallel: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FirstMover {
    Human,
    Computer,
    Random,
}

impl FirstMover {
    fn side(self) -> Side {
        match self {
            FirstMover::Human => Side::Human,
            FirstMover::Computer => Side::Computer,
            FirstMover::Random => {
                if fastrand::bool() {
                    Side::Human
                } else {
                    Side::Computer
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let strategy = cli.strategy.build(cli.depth, cli.parallel);
    let mut game = Game::new(cli.first.side());
    info!(
        strategy = strategy.name(),
        depth = cli.depth,
        first = ?game.turn,
        "starting game"
    );

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        game.display()?;

        match game.state {
            GameState::Playing => {
                let next_move = match game.turn {
                    Side::Computer => {
                        let spinner = ProgressBar::new_spinner();
                        spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                        spinner.set_message("Computer is thinking...");
                        spinner.enable_steady_tick(100);

                        let column = strategy.choose_move(game.board(), Side::Computer)?;
                        spinner.finish_and_clear();

                        println!("Computer plays: {}", column + 1);
                        column + 1
                    }
                    Side::Human => {
                        print!("Move input (1-7, q to quit) > ");
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            break;
                        }

                        let input = input_str.trim();
                        if input.eq_ignore_ascii_case("q") {
                            println!("Goodbye!");
                            break;
                        }
                        match input.parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::HumanWin => {
                println!("Player wins!");
                break;
            }
            GameState::ComputerWin => {
                println!("Computer wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }

    info!(moves = %game.moves, result = ?game.state, "game finished");
    Ok(())
}
