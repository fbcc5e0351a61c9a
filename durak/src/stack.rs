use serde::{Deserialize, Serialize};

use crate::Card;

/// An ordered batch of cards in transit: drawn from the pile, played onto
/// the table, or taken back into a hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack(Vec<Card>);

impl Stack {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn single(card: Card) -> Self {
        Self(vec![card])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The card that a defense has to beat.
    pub fn first(&self) -> Option<Card> {
        self.0.first().copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }
}

impl IntoIterator for Stack {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
