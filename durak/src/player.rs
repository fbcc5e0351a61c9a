use crate::{Card, CardSet, DrawPile, IllegalMove, Stack, Strategy};

/// Number of cards every player is dealt, and that replenishment restores.
pub const HAND_SIZE: usize = 6;

/// The cards a player currently holds, in the order they arrived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_set(&self) -> CardSet {
        self.cards.iter().collect()
    }

    pub fn add(&mut self, stack: Stack) {
        self.cards.extend(stack);
    }

    /// Removes exactly the cards of `stack`. Either all of them are removed,
    /// or, if one is missing, none are.
    pub fn remove_stack(&mut self, stack: &Stack) -> Result<(), IllegalMove> {
        let mut positions = Vec::with_capacity(stack.len());
        for &card in stack {
            match self.cards.iter().position(|&c| c == card) {
                Some(pos) if !positions.contains(&pos) => positions.push(pos),
                _ => return Err(IllegalMove::PlayedCardNotInHand { card }),
            }
        }
        let played: CardSet = stack.iter().collect();
        self.cards.retain(|&c| !played.contains(c));
        Ok(())
    }
}

/// One seat at the table.
pub struct Player {
    pub name: String,
    pub hand: Hand,
    pub strategy: Box<dyn Strategy>,
}

impl Player {
    pub fn new(name: &str, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: String::from(name),
            hand: Hand::default(),
            strategy,
        }
    }

    pub fn with_hand(name: &str, strategy: Box<dyn Strategy>, cards: Vec<Card>) -> Self {
        Self {
            name: String::from(name),
            hand: Hand::new(cards),
            strategy,
        }
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("hand", &self.hand)
            .finish_non_exhaustive()
    }
}

/// Deals `count` cards to each player in turn, first player first.
pub fn deal_initial(players: &mut [Player], draw_pile: &mut DrawPile, count: usize) {
    for player in players.iter_mut() {
        if let Some(stack) = draw_pile.draw(count) {
            player.hand.add(stack);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{card, init_deck, Automated, DeckSize};

    #[test]
    fn deal_gives_six_cards_in_seat_order() {
        let mut pile = DrawPile::from_cards(init_deck(DeckSize::Short));
        let mut players = vec![
            Player::new("a", Box::new(Automated)),
            Player::new("b", Box::new(Automated)),
        ];
        deal_initial(&mut players, &mut pile, HAND_SIZE);
        assert_eq!(players[0].hand.cards(), &init_deck(DeckSize::Short)[..6]);
        assert_eq!(players[1].hand.cards(), &init_deck(DeckSize::Short)[6..12]);
        assert_eq!(pile.len(), 24);
    }

    #[test]
    fn remove_stack_is_all_or_nothing() {
        let mut hand = Hand::new(vec![card!(0, Clubs), card!(3, Hearts), card!(5, Spades)]);
        let missing = Stack::new(vec![card!(3, Hearts), card!(1, Diamonds)]);
        assert_eq!(
            hand.remove_stack(&missing),
            Err(IllegalMove::PlayedCardNotInHand {
                card: card!(1, Diamonds)
            })
        );
        assert_eq!(hand.len(), 3);

        hand.remove_stack(&Stack::single(card!(3, Hearts))).unwrap();
        assert_eq!(hand.cards(), &[card!(0, Clubs), card!(5, Spades)]);
    }

    #[test]
    fn remove_stack_rejects_the_same_card_twice() {
        let mut hand = Hand::new(vec![card!(0, Clubs), card!(3, Hearts)]);
        let doubled = Stack::new(vec![card!(0, Clubs), card!(0, Clubs)]);
        assert!(hand.remove_stack(&doubled).is_err());
        assert_eq!(hand.len(), 2);
    }
}
