use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Card, DeckSize, Stack, Suit};

/// Builds every card of the deck in index order: rank = index / 4, suit = index % 4.
pub fn init_deck(deck: DeckSize) -> Vec<Card> {
    (0..deck.len())
        .map(|idx| Card::from_index(idx as u8))
        .collect()
}

/// The shared pile that hands are dealt and replenished from.
///
/// Cards are drawn from the front. The back card is the trump indicator,
/// which is why it is the last one to leave the pile. The pile only ever
/// shrinks.
#[derive(Clone, Debug)]
pub struct DrawPile {
    cards: VecDeque<Card>,
}

impl DrawPile {
    pub fn shuffled<R: Rng>(mut deck: Vec<Card>, rng: &mut R) -> Self {
        deck.shuffle(rng);
        Self::from_cards(deck)
    }

    /// A pile that draws `cards` in the given order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The suit of the bottom card, if there is one.
    pub fn trump_suit(&self) -> Option<Suit> {
        self.cards.back().map(|card| card.suit)
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Removes up to `n` cards. Returns `None` if the pile was already empty.
    pub fn draw(&mut self, n: usize) -> Option<Stack> {
        if self.cards.is_empty() {
            return None;
        }
        let n = n.min(self.cards.len());
        Some(Stack::new(self.cards.drain(..n).collect()))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{card, CardSet};

    #[test]
    fn deck_is_in_rank_then_suit_order() {
        let deck = init_deck(DeckSize::Short);
        assert_eq!(deck.len(), 36);
        assert_eq!(deck[0], card!(0, Clubs));
        assert_eq!(deck[3], card!(0, Hearts));
        assert_eq!(deck[4], card!(1, Clubs));
        assert_eq!(deck[35], card!(8, Hearts));
    }

    #[test]
    fn shuffle_is_reproducible_and_keeps_every_card() {
        let a = DrawPile::shuffled(init_deck(DeckSize::Full), &mut StdRng::seed_from_u64(7));
        let b = DrawPile::shuffled(init_deck(DeckSize::Full), &mut StdRng::seed_from_u64(7));
        assert!(a.cards().eq(b.cards()));
        assert_eq!(a.cards().collect::<CardSet>().len(), 52);
    }

    #[test]
    fn draw_clips_to_what_remains() {
        let mut pile =
            DrawPile::from_cards(vec![card!(0, Clubs), card!(1, Clubs), card!(2, Hearts)]);
        assert_eq!(pile.trump_suit(), Some(Suit::Hearts));
        assert_eq!(
            pile.draw(2),
            Some(Stack::new(vec![card!(0, Clubs), card!(1, Clubs)]))
        );
        assert_eq!(pile.draw(6), Some(Stack::single(card!(2, Hearts))));
        assert!(pile.is_empty());
        assert_eq!(pile.draw(1), None);
        assert_eq!(pile.trump_suit(), None);
    }
}
