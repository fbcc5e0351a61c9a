use quickcheck::{Arbitrary, Gen};

use crate::{Card, CardSet, DeckSize, Suit, SUITS};

impl Arbitrary for Suit {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&SUITS).unwrap()
    }
}

impl Arbitrary for Card {
    fn arbitrary(g: &mut Gen) -> Self {
        Card::from_index(u8::arbitrary(g) % 52)
    }
}

impl Arbitrary for DeckSize {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[DeckSize::Short, DeckSize::Full]).unwrap()
    }
}

/// Up to 12 cards from a 52-card deck, none of them twice.
#[derive(Clone, Debug)]
pub struct DistinctCards(pub Vec<Card>);

impl Arbitrary for DistinctCards {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 13;
        let mut seen = CardSet::new();
        let mut cards = Vec::with_capacity(len);
        while cards.len() < len {
            let card = Card::arbitrary(g);
            if !seen.contains(card) {
                seen = seen.insert(card);
                cards.push(card);
            }
        }
        DistinctCards(cards)
    }
}

/// The parameters of a game between automated players.
#[derive(Clone, Debug)]
pub struct GameSetup {
    pub seed: u64,
    pub num_players: usize,
    pub deck: DeckSize,
}

impl Arbitrary for GameSetup {
    fn arbitrary(g: &mut Gen) -> Self {
        GameSetup {
            seed: u64::arbitrary(g),
            num_players: 2 + usize::arbitrary(g) % 3,
            deck: DeckSize::arbitrary(g),
        }
    }
}
