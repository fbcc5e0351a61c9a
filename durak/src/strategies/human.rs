use tracing::debug;

use crate::{Card, Stack, Strategy, Suit};

/// The console a [`Human`] plays through.
pub trait HumanConsole {
    /// Presents the hand by index, and the stack to beat when defending.
    fn show_hand(&mut self, hand: &[Card], enemy: Option<&Stack>);

    /// Blocks until the next integer is entered.
    fn read_index(&mut self) -> anyhow::Result<i64>;

    /// Called when an index was out of range, right before asking again.
    fn reject_index(&mut self, idx: i64);
}

/// A player who picks cards by their index in the hand.
///
/// `-1` takes the table and is only accepted while defending. A defending
/// card that does not beat the attack counts as taking, it is not asked
/// again.
pub struct Human<C> {
    console: C,
}

impl<C: HumanConsole> Human<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}

impl<C: HumanConsole> Strategy for Human<C> {
    fn decide(
        &mut self,
        hand: &[Card],
        enemy: Option<&Stack>,
        trump: Suit,
    ) -> anyhow::Result<Option<Stack>> {
        if hand.is_empty() {
            return Ok(None);
        }
        self.console.show_hand(hand, enemy);
        let idx = loop {
            let idx = self.console.read_index()?;
            if idx == -1 && enemy.is_some() {
                return Ok(None);
            }
            match usize::try_from(idx) {
                Ok(i) if i < hand.len() => break i,
                _ => self.console.reject_index(idx),
            }
        };

        let Some(enemy) = enemy else {
            return Ok(Some(Stack::single(hand[idx])));
        };
        let Some(target) = enemy.first() else {
            return Ok(None);
        };
        if idx + enemy.len() > hand.len() || !hand[idx].beats(target, trump) {
            debug!(card = ?hand[idx], enemy = ?target, "Chosen card does not beat, taking instead");
            return Ok(None);
        }
        Ok(Some(Stack::new(hand[idx..idx + enemy.len()].to_vec())))
    }
}
