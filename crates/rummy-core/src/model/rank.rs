use core::fmt;

/// A rank within one suit's 16-bit lane. `LowAce` (value 0) and `HighAce`
/// (value 13) are the same physical ace; which one is legal in a given
/// card-set depends on context (hand-form carries both, meld-form exactly
/// one). Values 14 and 15 have no `Rank` variant — they are the two
/// permanently-illegal bit positions in every lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Rank {
    LowAce = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
    HighAce = 13,
}

impl Rank {
    pub const ORDERED: [Rank; 14] = [
        Rank::LowAce,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::HighAce,
    ];

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Rank::LowAce),
            1 => Some(Rank::Two),
            2 => Some(Rank::Three),
            3 => Some(Rank::Four),
            4 => Some(Rank::Five),
            5 => Some(Rank::Six),
            6 => Some(Rank::Seven),
            7 => Some(Rank::Eight),
            8 => Some(Rank::Nine),
            9 => Some(Rank::Ten),
            10 => Some(Rank::Jack),
            11 => Some(Rank::Queen),
            12 => Some(Rank::King),
            13 => Some(Rank::HighAce),
            _ => None,
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::LowAce | Rank::HighAce)
    }

    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Rank::LowAce),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::HighAce),
            _ => None,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::LowAce => 'a',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::HighAce => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_char().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn value_roundtrip() {
        for rank in Rank::ORDERED {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
    }

    #[test]
    fn char_roundtrip() {
        for rank in Rank::ORDERED {
            assert_eq!(Rank::from_char(rank.to_char()), Some(rank));
        }
    }

    #[test]
    fn low_and_high_ace_are_both_aces() {
        assert!(Rank::LowAce.is_ace());
        assert!(Rank::HighAce.is_ace());
        assert!(!Rank::King.is_ace());
    }

    #[test]
    fn out_of_range_value_is_none() {
        assert_eq!(Rank::from_value(14), None);
        assert_eq!(Rank::from_value(15), None);
    }
}
