use crate::{Card, Stack, Suit};

/// Decides what a player lays on the table.
pub trait Strategy {
    /// With `enemy == None` the player attacks and must propose exactly one
    /// card. Otherwise the player defends: either a stack of the same length
    /// as `enemy` whose first card beats the enemy's first card, or `None`
    /// to take the table.
    fn decide(
        &mut self,
        hand: &[Card],
        enemy: Option<&Stack>,
        trump: Suit,
    ) -> anyhow::Result<Option<Stack>>;

    /// Whether `decide` is a pure function of its arguments.
    ///
    /// Stalemate detection relies on this, so it must only return `true`
    /// for strategies that never vary their answer.
    fn is_deterministic(&self) -> bool {
        false
    }
}
