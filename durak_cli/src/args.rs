use std::path::PathBuf;

use clap::Parser;
use durak::{Automated, DeckSize, Human, Player};
use tracing_subscriber::filter::LevelFilter;

use crate::StdinConsole;

#[derive(Parser)]
#[command(about = "Plays one game of Durak on the console")]
pub struct Args {
    /// Number of players, from 2 to 4
    #[arg(value_parser = clap::value_parser!(u8).range(2..=4))]
    pub players: u8,

    /// Deck size: 0 for 36 cards, 1 for 52 cards
    #[arg(value_parser = parse_deck_flag)]
    pub deck: DeckSize,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the computer play every seat, including the first one
    #[arg(short, long, default_value_t = false)]
    pub autoplay: bool,

    /// Write the finished game as a JSON file into this directory
    #[arg(short, long)]
    pub record_to: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    pub log_level: LevelFilter,
}

fn parse_deck_flag(flag: &str) -> Result<DeckSize, String> {
    match flag {
        "0" => Ok(DeckSize::Short),
        "1" => Ok(DeckSize::Full),
        _ => Err(String::from("expected 0 (36 cards) or 1 (52 cards)")),
    }
}

/// The first seat is the human unless `autoplay` is set, all others are
/// automated.
pub fn seat_players(count: u8, autoplay: bool, deck: DeckSize) -> Vec<Player> {
    (0..count)
        .map(|seat| {
            if seat == 0 && !autoplay {
                Player::new("Human", Box::new(Human::new(StdinConsole::new(deck))))
            } else {
                let num = if autoplay { seat + 1 } else { seat };
                Player::new(&format!("Comp{}", num), Box::new(Automated))
            }
        })
        .collect()
}
