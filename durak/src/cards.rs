use serde::{Deserialize, Serialize};

/// A playing card. The rank is relative to the deck in use, `0` being the
/// lowest rank of that deck.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
}

/// The suit of a [card](Card).
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    #[serde(rename = "C")]
    Clubs,
    #[serde(rename = "S")]
    Spades,
    #[serde(rename = "D")]
    Diamonds,
    #[serde(rename = "H")]
    Hearts,
}

pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

const RANK_LABELS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

impl Suit {
    pub fn from_index(idx: u8) -> Self {
        SUITS[usize::from(idx % 4)]
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which deck the game is played with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeckSize {
    /// 36 cards, ranks 6 to ace.
    Short,
    /// 52 cards, ranks 2 to ace.
    Full,
}

impl DeckSize {
    pub fn len(self) -> usize {
        usize::from(self.rank_count()) * SUITS.len()
    }

    pub fn rank_count(self) -> u8 {
        match self {
            DeckSize::Short => 9,
            DeckSize::Full => 13,
        }
    }

    /// Offset from a deck-relative rank into the 2..A label table.
    fn label_offset(self) -> usize {
        match self {
            DeckSize::Short => 4,
            DeckSize::Full => 0,
        }
    }

    pub fn rank_label(self, rank: u8) -> &'static str {
        RANK_LABELS[usize::from(rank) + self.label_offset()]
    }
}

impl Card {
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Position of this card in an unshuffled deck.
    pub fn to_index(self) -> u8 {
        self.rank * 4 + self.suit as u8
    }

    pub fn from_index(idx: u8) -> Self {
        Self {
            rank: idx / 4,
            suit: Suit::from_index(idx),
        }
    }

    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }

    /// Whether this card may be laid on top of `enemy` to beat it.
    pub fn beats(self, enemy: Card, trump: Suit) -> bool {
        (self.suit == enemy.suit && self.rank > enemy.rank)
            || (self.suit == trump && enemy.suit != trump)
    }

    /// A displayable form like `10 H`, using the labels of the given deck.
    pub fn label(self, deck: DeckSize) -> CardLabel {
        CardLabel { card: self, deck }
    }
}

/// See [`Card::label()`].
pub struct CardLabel {
    card: Card,
    deck: DeckSize,
}

impl std::fmt::Display for CardLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            self.deck.rank_label(self.card.rank),
            self.card.suit.letter()
        )
    }
}

/// Shorthand for creating cards in tests: `card!(3, Hearts)`.
#[macro_export]
macro_rules! card {
    ($rank:expr, $suit:ident) => {
        $crate::Card::new($rank, $crate::Suit::$suit)
    };
}
// Re-exported so that sibling modules can use `card!` by path
#[allow(unused_imports)]
pub(crate) use card;
