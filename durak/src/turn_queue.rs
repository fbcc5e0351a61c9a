use rand::Rng;

use crate::{Player, Suit};

/// The rotation of seats. Each entry holds an index into the player list,
/// or `None` once that player is out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnQueue {
    seats: Vec<Option<usize>>,
    cursor: usize,
    active: usize,
}

impl TurnQueue {
    /// A queue that starts with `order[0]`.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            active: order.len(),
            seats: order.into_iter().map(Some).collect(),
            cursor: 0,
        }
    }

    /// The holder of the highest trump starts, everyone else keeps their
    /// original order. If nobody holds a trump, the starter is random.
    pub fn seeded_by_highest_trump<R: Rng>(players: &[Player], trump: Suit, rng: &mut R) -> Self {
        let holder = players
            .iter()
            .enumerate()
            .flat_map(|(idx, player)| player.hand.cards().iter().map(move |card| (idx, card)))
            .filter(|(_, card)| card.is_trump(trump))
            .max_by_key(|(_, card)| card.rank)
            .map(|(idx, _)| idx);
        let starter = match holder {
            Some(idx) => idx,
            None => rng.gen_range(0..players.len()),
        };
        let mut order: Vec<usize> = (0..players.len()).collect();
        order.remove(starter);
        order.insert(0, starter);
        Self::new(order)
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor forward to the next live seat (staying put if it
    /// already is on one) and returns its player index.
    pub fn current(&mut self) -> Option<usize> {
        if self.active == 0 {
            return None;
        }
        while self.seats[self.cursor].is_none() {
            self.cursor = (self.cursor + 1) % self.seats.len();
        }
        self.seats[self.cursor]
    }

    /// Passes the turn on by one seat.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.seats.len();
    }

    /// Takes the player under the cursor out of the rotation.
    pub fn eliminate_current(&mut self) {
        if self.seats[self.cursor].take().is_some() {
            self.active -= 1;
        }
    }

    /// The remaining players' indices, in queue order.
    pub fn live(&self) -> impl Iterator<Item = usize> + '_ {
        self.seats.iter().filter_map(|seat| *seat)
    }

    pub fn is_live(&self, player_idx: usize) -> bool {
        self.seats.contains(&Some(player_idx))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{card, Automated};

    fn players(hands: Vec<Vec<crate::Card>>) -> Vec<Player> {
        hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| Player::with_hand(&format!("p{}", i), Box::new(Automated), hand))
            .collect()
    }

    #[test]
    fn highest_trump_starts_and_others_keep_order() {
        let players = players(vec![
            vec![card!(7, Hearts), card!(8, Clubs)],
            vec![card!(2, Spades)],
            vec![card!(8, Hearts)],
            vec![card!(0, Hearts)],
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut queue = TurnQueue::seeded_by_highest_trump(&players, Suit::Hearts, &mut rng);
        assert_eq!(queue.live().collect::<Vec<_>>(), vec![2, 0, 1, 3]);
        assert_eq!(queue.current(), Some(2));
    }

    #[test]
    fn random_starter_without_trumps() {
        let players = players(vec![vec![card!(1, Clubs)], vec![card!(2, Clubs)], vec![]]);
        let mut rng = StdRng::seed_from_u64(3);
        let queue = TurnQueue::seeded_by_highest_trump(&players, Suit::Hearts, &mut rng);
        let order: Vec<usize> = queue.live().collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 1, 2]);
        assert!(order[1..].windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn eliminated_seats_are_skipped() {
        let mut queue = TurnQueue::new(vec![0, 1, 2]);
        queue.advance();
        queue.eliminate_current();
        queue.eliminate_current();
        assert_eq!(queue.active(), 2);
        assert_eq!(queue.current(), Some(2));
        queue.advance();
        assert_eq!(queue.current(), Some(0));
        assert!(!queue.is_live(1));
        assert_eq!(queue.live().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn empty_queue_has_no_current_player() {
        let mut queue = TurnQueue::new(vec![0]);
        queue.eliminate_current();
        assert_eq!(queue.current(), None);
    }
}
