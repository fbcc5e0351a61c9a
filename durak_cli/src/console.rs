use std::io::{BufRead, Write};

use durak::{Action, Card, DeckSize, GameResult, HumanConsole, Stack, TurnRecord};

/// The lines printed for one turn: one per card, or `Fail` for a take.
pub fn render_turn(record: &TurnRecord, deck: DeckSize) -> Vec<String> {
    match &record.action {
        Action::Take { .. } => vec![format!("Player:{} | Fail", record.player)],
        action => action
            .cards()
            .iter()
            .map(|card| format!("Player:{} | {}", record.player, card.label(deck)))
            .collect(),
    }
}

pub fn render_outcome(result: &GameResult) -> Vec<String> {
    let mut lines = vec![String::new()];
    match result {
        GameResult::Draw => lines.push(String::from("Draw")),
        GameResult::Stalemate { .. } => lines.push(String::from("Stalemate")),
        GameResult::Durak { .. } => {}
    }
    let losers = result.losers().iter();
    lines.extend(losers.map(|name| format!("Player {} lose", name)));
    lines
}

/// The messages of `err` and of every error it was caused by, outermost first.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut err_dyn = err;
    while let Some(src_err) = err_dyn.source() {
        messages.push(src_err.to_string());
        err_dyn = src_err;
    }
    messages
}

/// Lets a human play through stdin/stdout.
pub struct StdinConsole {
    deck: DeckSize,
    defending: bool,
    // A re-usable buffer for reading lines
    buf: String,
}

impl StdinConsole {
    pub fn new(deck: DeckSize) -> Self {
        Self {
            deck,
            defending: false,
            buf: String::new(),
        }
    }
}

impl HumanConsole for StdinConsole {
    fn show_hand(&mut self, hand: &[Card], enemy: Option<&Stack>) {
        self.defending = enemy.is_some();
        println!("Your cards are:");
        for (idx, card) in hand.iter().enumerate() {
            println!("{} : {}", idx, card.label(self.deck));
        }
    }

    fn read_index(&mut self) -> anyhow::Result<i64> {
        let mut stdin = std::io::stdin().lock();
        loop {
            if self.defending {
                println!("Enter index of your card (-1 to take):");
            } else {
                println!("Enter index of your card:");
            }
            std::io::stdout().flush()?;
            self.buf.clear(); // because read_line() appends to the buffer
            if stdin.read_line(&mut self.buf)? == 0 {
                anyhow::bail!("Standard input was closed");
            }
            match self.buf.trim().parse::<i64>() {
                Ok(idx) => return Ok(idx),
                Err(_) => println!("Not a number: {}", self.buf.trim()),
            }
        }
    }

    fn reject_index(&mut self, idx: i64) {
        println!("There is no card {} you can play", idx);
    }
}

#[cfg(test)]
mod tests {
    use durak::{card, GameError, IllegalMove};

    use super::*;

    fn record(action: Action) -> TurnRecord {
        TurnRecord {
            turn: 0,
            player: String::from("Comp1"),
            action,
            drawn: 0,
            eliminated: false,
        }
    }

    #[test]
    fn played_cards_are_labelled() {
        let attack = record(Action::Attack {
            cards: Stack::single(card!(8, Hearts)),
        });
        let lines = render_turn(&attack, DeckSize::Short);
        assert_eq!(lines, vec!["Player:Comp1 | A H"]);
        let lines = render_turn(&attack, DeckSize::Full);
        assert_eq!(lines, vec!["Player:Comp1 | 10 H"]);
    }

    #[test]
    fn taking_prints_fail() {
        let take = record(Action::Take {
            cards: Stack::single(card!(0, Clubs)),
        });
        let lines = render_turn(&take, DeckSize::Short);
        assert_eq!(lines, vec!["Player:Comp1 | Fail"]);
    }

    #[test]
    fn outcomes() {
        assert_eq!(render_outcome(&GameResult::Draw), vec!["", "Draw"]);
        let losers = vec![String::from("Human")];
        let durak = GameResult::Durak { losers };
        assert_eq!(render_outcome(&durak), vec!["", "Player Human lose"]);
        let losers = vec![String::from("Human"), String::from("Comp1")];
        let lines = render_outcome(&GameResult::Stalemate { losers });
        assert_eq!(
            lines,
            vec!["", "Stalemate", "Player Human lose", "Player Comp1 lose"]
        );
    }

    #[test]
    fn error_chain_lists_causes_outermost_first() {
        let err = GameError::IllegalMove {
            player: String::from("Comp2"),
            err: IllegalMove::AttackedWithWrongCount { count: 2 },
        };
        assert_eq!(
            error_chain(&err),
            vec![
                "Player Comp2 made an illegal move",
                "Attacked with 2 cards instead of exactly one",
            ]
        );
        let err = GameError::NoAttack {
            player: String::from("Comp1"),
        };
        assert_eq!(error_chain(&err).len(), 1);
    }
}
