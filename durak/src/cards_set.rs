use crate::Card;

/// A compact set of [`Card`]s, keyed by [`Card::to_index()`].
///
/// Allows intersection/union with other such sets via bitwise ops.
///
/// ```
/// use durak::{card, CardSet};
/// let mut set = CardSet::new();
/// set = set.insert(card!(5, Hearts));
/// set = set.insert(card!(5, Hearts)); // Inserting a second time has no effect
/// set = set.insert(card!(0, Clubs));
/// assert_eq!(set.len(), 2);
/// ```
///
/// This is an immutable type, so `insert` returns a new value (except for
/// `std::ops::BitOrAssign`).
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct CardSet {
    // Only the low 52 bits are used.
    bits: u64,
}

impl CardSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, card: Card) -> bool {
        (self.bits & (1u64 << card.to_index())) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, card: Card) -> Self {
        Self {
            bits: self.bits | (1u64 << card.to_index()),
        }
    }
}

impl std::ops::BitAnd for CardSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl std::ops::BitOrAssign for CardSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut bits = 0;
        for card in iter {
            bits |= 1u64 << card.to_index();
        }
        Self { bits }
    }
}

impl<'a> FromIterator<&'a Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = &'a Card>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}
