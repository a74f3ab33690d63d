//! Card types and deck constants.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in the order the shoe indexes them.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns whether the suit is a red one (hearts or diamonds).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }

    /// Returns whether the card is red.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    /// Returns the face label of the rank (`"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`).
    ///
    /// Ranks outside 1..=13 yield `"?"`.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

/// Valid card ranks.
pub const RANKS: core::ops::RangeInclusive<u8> = 1..=13;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hearts_and_diamonds_are_red() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());

        for suit in Suit::ALL {
            assert_eq!(Card::new(suit, 5).is_red(), suit.is_red());
        }
    }

    #[test]
    fn every_suit_has_its_own_symbol() {
        let symbols = Suit::ALL.map(Suit::symbol);
        assert_eq!(symbols, ['♠', '♥', '♦', '♣']);
    }

    #[test]
    fn rank_labels() {
        let labels = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        assert_eq!(RANKS.len(), labels.len());
        for (rank, label) in RANKS.zip(labels) {
            assert_eq!(Card::new(Suit::Spades, rank).rank_label(), label);
        }

        assert!(Card::new(Suit::Spades, 1).is_ace());
        assert!(!Card::new(Suit::Spades, 13).is_ace());
    }

    #[test]
    fn out_of_range_rank_labels_as_unknown() {
        assert_eq!(Card::new(Suit::Hearts, 0).rank_label(), "?");
        assert_eq!(Card::new(Suit::Hearts, 14).rank_label(), "?");
        assert_eq!(Card::new(Suit::Hearts, u8::MAX).rank_label(), "?");
    }
}
