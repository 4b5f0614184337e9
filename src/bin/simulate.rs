//! Monopoly simulator.
//!
//! Plays a game with scripted policies instead of a human at the keyboard
//! and narrates it through `tracing`.
//!
//! ## Usage
//!
//! - `monopoly-sim -p Alice -p Bob --seed 7` - play a seeded game to the end
//! - `monopoly-sim --rounds 10 --save game.bin` - play ten rounds and save
//! - `monopoly-sim --load game.bin` - resume a saved game
//! - `monopoly-sim --board board.bin` - play on a saved board design
//!
//! Set `RUST_LOG=monopoly=info` to keep only the narration.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rust_monopoly::{
    load_board_from_path, load_game_from_path, save_game_to_path, Decision, DecisionSource, Game,
    GameBuilder, RulesConfig, TracingNarrator,
};

/// Monopoly simulator: plays a 20 square Monopoly game with fixed policies
#[derive(Parser, Debug)]
#[command(name = "monopoly-sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Player name; repeat for each seat (2 to 6)
    #[arg(short, long = "player", default_values_t = vec![String::from("Alice"), String::from("Bob")])]
    players: Vec<String>,

    /// Seed for dice and chance draws
    #[arg(short, long)]
    seed: Option<u64>,

    /// Round cap
    #[arg(long, default_value_t = rust_monopoly::core::config::MAX_ROUNDS)]
    max_rounds: u32,

    /// Starting money for every player
    #[arg(long, default_value_t = rust_monopoly::core::config::STARTING_MONEY)]
    starting_money: i64,

    /// Whether players buy the properties they can afford
    #[arg(long, value_enum, default_value_t = Policy::Always)]
    buy: Policy,

    /// Whether jailed players pay the fine when they can
    #[arg(long, value_enum, default_value_t = Policy::Never)]
    pay_fine: Policy,

    /// Stop after this many rounds instead of playing to the end
    #[arg(long)]
    rounds: Option<u32>,

    /// Board design to play on
    #[arg(long, conflicts_with = "load")]
    board: Option<PathBuf>,

    /// Resume a saved game
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the game here when play stops
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
    Always,
    Never,
}

impl Policy {
    fn answer(self) -> bool {
        self == Policy::Always
    }
}

/// Answers every decision from the configured policies.
struct Policies {
    buy: Policy,
    pay_fine: Policy,
}

impl DecisionSource for Policies {
    fn ask_yes_no(&mut self, decision: &Decision<'_>) -> bool {
        let answer = match decision {
            Decision::BuyProperty { .. } => self.buy.answer(),
            Decision::PayJailFine { .. } => self.pay_fine.answer(),
        };
        info!(target: "monopoly", "{decision} {}", if answer { "yes" } else { "no" });
        answer
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut game = match &cli.load {
        Some(path) => {
            let game = load_game_from_path(path)?;
            info!(path = %path.display(), round = game.current_round(), "resumed game");
            game
        }
        None => new_game(&cli)?,
    };

    let mut decisions = Policies {
        buy: cli.buy,
        pay_fine: cli.pay_fine,
    };
    let mut narrator = TracingNarrator;

    match cli.rounds {
        Some(rounds) => {
            for _ in 0..rounds {
                if game.is_game_over() && !game.round_in_progress() {
                    break;
                }
                game.play_round(&mut decisions, &mut narrator);
            }
            print!("{}", game.status_report());
            print!("{}", game.players_report());
            if game.is_game_over() {
                println!("{}", game.announce_winner(&mut narrator));
            }
        }
        None => {
            let result = game.play(&mut decisions, &mut narrator);
            println!("{result}");
        }
    }

    if let Some(path) = &cli.save {
        save_game_to_path(&game, path)?;
        info!(path = %path.display(), "game saved");
    }
    Ok(())
}

fn new_game(cli: &Cli) -> Result<Game, Box<dyn std::error::Error>> {
    let rules = RulesConfig::default()
        .with_starting_money(cli.starting_money)
        .with_max_rounds(cli.max_rounds);

    let mut builder = GameBuilder::new().players(cli.players.iter().cloned()).rules(rules);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    if let Some(path) = &cli.board {
        builder = builder.board(load_board_from_path(path)?);
    }
    Ok(builder.build()?)
}
