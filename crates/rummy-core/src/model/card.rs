use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;

/// A single card, packed as a 6-bit id: low 4 bits are the rank's value,
/// the next 2 bits are the suit's index. Ranks 14/15 never occur — they
/// are the two illegal positions in each suit's lane of a card-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn points(self) -> i32 {
        match self.rank {
            Rank::LowAce
            | Rank::Two
            | Rank::Three
            | Rank::Four
            | Rank::Five
            | Rank::Six
            | Rank::Seven
            | Rank::Eight
            | Rank::Nine => 5,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::HighAce => 15,
        }
    }

    /// Packed 6-bit id, matching the bit position of this card within a
    /// [`super::cardset::Cards`] mask: `suit.index() * 16 + rank.value()`.
    pub const fn id(self) -> u8 {
        (self.suit.index() as u8) * 16 + self.rank.value()
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        if id >= 64 {
            return None;
        }
        let suit_index = (id / 16) as usize;
        let rank_value = id % 16;
        let suit = match Suit::from_index(suit_index) {
            Some(s) => s,
            None => return None,
        };
        let rank = match Rank::from_value(rank_value) {
            Some(r) => r,
            None => return None,
        };
        Some(Card::new(rank, suit))
    }

    /// Parses a two-character token: rank char then suit char, e.g. `"TC"`
    /// or `"aS"` (low ace of spades) or `"AS"` (high ace of spades).
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let rank_char = chars.next()?;
        let suit_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let rank = Rank::from_char(rank_char)?;
        let suit = Suit::from_char(suit_char)?;
        Some(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, Rank, Suit};

    #[test]
    fn points_match_rank_bands() {
        assert_eq!(Card::new(Rank::LowAce, Suit::Clubs).points(), 5);
        assert_eq!(Card::new(Rank::Nine, Suit::Clubs).points(), 5);
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).points(), 10);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).points(), 10);
        assert_eq!(Card::new(Rank::HighAce, Suit::Clubs).points(), 15);
    }

    #[test]
    fn id_roundtrip_over_legal_cards() {
        for suit in Suit::ALL {
            for rank in Rank::ORDERED {
                let card = Card::new(rank, suit);
                assert_eq!(Card::from_id(card.id()), Some(card));
            }
        }
    }

    #[test]
    fn id_known_values() {
        assert_eq!(Card::new(Rank::LowAce, Suit::Clubs).id(), 0);
        assert_eq!(Card::new(Rank::HighAce, Suit::Clubs).id(), 13);
        assert_eq!(Card::new(Rank::LowAce, Suit::Diamonds).id(), 16);
        assert_eq!(Card::new(Rank::King, Suit::Spades).id(), 60);
    }

    #[test]
    fn illegal_positions_have_no_card() {
        assert_eq!(Card::from_id(14), None);
        assert_eq!(Card::from_id(15), None);
        assert_eq!(Card::from_id(64), None);
    }

    #[test]
    fn parse_distinguishes_ace_case() {
        assert_eq!(Card::parse("aS"), Some(Card::new(Rank::LowAce, Suit::Spades)));
        assert_eq!(Card::parse("AS"), Some(Card::new(Rank::HighAce, Suit::Spades)));
        assert_eq!(Card::parse("TC"), Some(Card::new(Rank::Ten, Suit::Clubs)));
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        assert_eq!(Card::parse("T"), None);
        assert_eq!(Card::parse("TCX"), None);
        assert_eq!(Card::parse("1C"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let card = Card::new(Rank::Jack, Suit::Hearts);
        assert_eq!(Card::parse(&card.to_string()), Some(card));
    }
}
