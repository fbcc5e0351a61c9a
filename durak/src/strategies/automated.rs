use crate::{Card, Stack, Strategy, Suit};

/// Always plays the weakest card that does the job.
#[derive(Clone, Copy, Debug, Default)]
pub struct Automated;

/// Orders a hand weakest first: every non-trump before every trump, and by
/// ascending rank within each group. Cards of equal strength keep their hand
/// order.
pub fn rank_hand(hand: &[Card], trump: Suit) -> Vec<Card> {
    let mut ranked = hand.to_vec();
    ranked.sort_by_key(|card| (card.is_trump(trump), card.rank));
    ranked
}

/// Finds the first position in `ranked` whose card beats the enemy's first
/// card and that leaves room for a block as long as the enemy stack.
pub fn choose_defense(ranked: &[Card], enemy: &Stack, trump: Suit) -> Option<Stack> {
    let target = enemy.first()?;
    (0..ranked.len())
        .find(|&i| ranked[i].beats(target, trump) && i + enemy.len() <= ranked.len())
        .map(|i| Stack::new(ranked[i..i + enemy.len()].to_vec()))
}

impl Strategy for Automated {
    fn decide(
        &mut self,
        hand: &[Card],
        enemy: Option<&Stack>,
        trump: Suit,
    ) -> anyhow::Result<Option<Stack>> {
        let ranked = rank_hand(hand, trump);
        Ok(match enemy {
            None => ranked.first().copied().map(Stack::single),
            Some(enemy) => choose_defense(&ranked, enemy, trump),
        })
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}
