use serde::{Deserialize, Serialize};

use crate::Stack;

/// What a player did on their turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Opened a round with these cards.
    Attack { cards: Stack },
    /// Beat the table with these cards.
    Beat { cards: Stack },
    /// Could not or would not beat, and took these cards from the table.
    Take { cards: Stack },
}

impl Action {
    pub fn cards(&self) -> &Stack {
        match self {
            Action::Attack { cards } | Action::Beat { cards } | Action::Take { cards } => cards,
        }
    }
}

/// One resolved decision, as reported by [`Game::advance()`](crate::Game::advance).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub player: String,
    pub action: Action,
    /// Number of cards drawn from the pile afterwards.
    pub drawn: usize,
    /// The player ran out of cards with the pile empty and left the game.
    pub eliminated: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameResult {
    /// The last players ran out of cards in the same round.
    Draw,
    /// These players were left holding cards.
    Durak { losers: Vec<String> },
    /// The remaining players kept passing the same cards around, and all of
    /// them lose.
    Stalemate { losers: Vec<String> },
}

impl GameResult {
    pub fn losers(&self) -> &[String] {
        match self {
            GameResult::Draw => &[],
            GameResult::Durak { losers } | GameResult::Stalemate { losers } => losers,
        }
    }
}

/// Summarizes the outcome of [`Game::advance()`](crate::Game::advance).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Turn(TurnRecord),
    GameOver(GameResult),
}
