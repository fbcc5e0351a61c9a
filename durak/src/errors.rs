use crate::Card;

/// The error type for a single proposal made by a [`Strategy`](crate::Strategy).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    PlayedCardNotInHand { card: Card },
    AttackedWithWrongCount { count: usize },
    DefendedWithWrongCount { expected: usize, count: usize },
    DefenseDoesNotBeat { card: Card, enemy: Card },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::PlayedCardNotInHand { card } => {
                write!(f, "Played {:?}, which is not in the hand", card)
            }
            IllegalMove::AttackedWithWrongCount { count } => {
                write!(f, "Attacked with {} cards instead of exactly one", count)
            }
            IllegalMove::DefendedWithWrongCount { expected, count } => write!(
                f,
                "Defended with {} cards against an attack of {}",
                count, expected
            ),
            IllegalMove::DefenseDoesNotBeat { card, enemy } => {
                write!(f, "{:?} does not beat {:?}", card, enemy)
            }
        }
    }
}

/// The error type for [`Game`](crate::Game). All of these end the game.
#[derive(Debug)]
pub enum GameError {
    InvalidPlayerCount { count: usize },
    /// An attacking strategy declined, which only defenders may do.
    NoAttack { player: String },
    IllegalMove { player: String, err: IllegalMove },
    /// The strategy itself failed, e.g. because its input was closed.
    Strategy { player: String, err: anyhow::Error },
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalMove { err, .. } => Some(err),
            GameError::Strategy { err, .. } => Some(&**err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidPlayerCount { count } => {
                write!(f, "A game needs 2 to 4 players, not {}", count)
            }
            GameError::NoAttack { player } => {
                write!(f, "Player {} had to attack, but played no card", player)
            }
            GameError::IllegalMove { player, .. } => {
                write!(f, "Player {} made an illegal move", player)
            }
            GameError::Strategy { player, .. } => {
                write!(f, "The strategy of player {} failed", player)
            }
        }
    }
}
