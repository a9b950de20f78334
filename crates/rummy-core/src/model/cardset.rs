use crate::model::card::Card;
use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub};

/// A bitmask over the 64 card-id positions (4 suits × 16 ranks per suit,
/// of which only 13 per suit are ever legal — see [`Cards::ILLEGAL`]).
///
/// Hand-form card-sets may carry an ace in both its low (rank 0) and high
/// (rank 13) position at once; meld-form card-sets fix the ace to exactly
/// one of the two. [`Cards::expand`]/[`Cards::contract`] convert between
/// the two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Cards(pub u64);

impl Cards {
    pub const EMPTY: Cards = Cards(0);

    /// The 52 legal cards: ranks 1 (Two) through 13 (HighAce) in each
    /// 16-bit lane. Low aces are excluded — a fresh deck carries the ace
    /// only in its high position until a hand needs the dual form.
    pub const FULL_DECK: Cards = Cards(0x3FFE_3FFE_3FFE_3FFE);

    /// Bits 14 and 15 of every lane: permanently illegal positions.
    const ILLEGAL: u64 = 0xC000_C000_C000_C000;

    /// Bit 0 of every lane (the low ace).
    const LOW_ACE: u64 = 0x0001_0001_0001_0001;

    /// Bit 13 of every lane (the high ace).
    const HIGH_ACE: u64 = 0x2000_2000_2000_2000;

    /// Bits 0..8 of every lane: low-ace through nine, worth 5 points each.
    const FIVE_POINT: u64 = 0x01FF_01FF_01FF_01FF;

    /// Bits 9..12 of every lane: ten through king, worth 10 points each.
    const TEN_POINT: u64 = 0x1E00_1E00_1E00_1E00;

    /// All legal bit positions (0..13) of every lane.
    const LEGAL: u64 = 0x3FFF_3FFF_3FFF_3FFF;

    pub const fn from_card(card: Card) -> Self {
        Cards(1u64 << card.id())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_legal(self) -> bool {
        self.0 & Self::ILLEGAL == 0
    }

    pub const fn size(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn has(self, other: Cards) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn add(&mut self, other: Cards) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Cards) {
        self.0 &= !other.0;
    }

    /// The single lowest-indexed set bit, or `EMPTY` if there is none.
    pub const fn low(self) -> Cards {
        Cards(self.0 & self.0.wrapping_neg())
    }

    /// The next single set bit in `self` strictly after `bit` (ascending
    /// order), or `EMPTY` if `bit` is the highest set bit. `bit` must be a
    /// single-bit card-set that is a member of `self`.
    pub const fn next(self, bit: Cards) -> Cards {
        let above = self.0 & !((bit.0 << 1).wrapping_sub(1));
        Cards(above & above.wrapping_neg())
    }

    /// Iterates the single-card bits of this set in ascending order.
    pub fn iter(self) -> CardsIter {
        CardsIter { remaining: self }
    }

    /// Adds the low-ace bit wherever the high-ace bit is set. Converts a
    /// meld-form card-set into hand-form.
    pub const fn expand(self) -> Cards {
        Cards(self.0 | ((self.0 & Self::HIGH_ACE) >> 13))
    }

    /// Replaces every low-ace bit with the corresponding high-ace bit.
    /// Converts a hand-form card-set into meld-form.
    pub const fn contract(self) -> Cards {
        let promoted = (self.0 & Self::LOW_ACE) << 13;
        Cards((self.0 & !Self::LOW_ACE) | promoted)
    }

    /// Total point value: 5 per low-ace..nine, 10 per ten..king, 15 per
    /// high-ace.
    pub fn points(self) -> i32 {
        5 * (self.0 & Self::FIVE_POINT).count_ones() as i32
            + 10 * (self.0 & Self::TEN_POINT).count_ones() as i32
            + 15 * (self.0 & Self::HIGH_ACE).count_ones() as i32
    }

    /// Cards in an (expanded) hand that center a playable 3-card run: both
    /// neighbors in the same suit are also present.
    pub const fn run_centers(self) -> Cards {
        Cards(self.0 & (self.0 << 1) & (self.0 >> 1))
    }

    /// Given a run center, the 3-card run it denotes.
    pub const fn run_from_center(center: Cards) -> Cards {
        Cards(center.0 | (center.0 << 1) | (center.0 >> 1))
    }

    /// Cards in an (expanded) hand of a rank held in at least three of the
    /// four suits.
    pub const fn set_centers(self) -> Cards {
        let up = (self.0 << 16) | (self.0 >> 48);
        let down = (self.0 >> 16) | (self.0 << 48);
        Cards(self.0 & up & down)
    }

    /// Given a set center, the full 3-or-4-of-a-kind meld it denotes.
    pub const fn set_from_center(center: Cards) -> Cards {
        let c = center.0;
        let meld = c | (c << 16) | (c >> 16) | (c << 48) | (c >> 48);
        Cards(meld & Self::LEGAL)
    }

    /// Single cards in `hand` that extend an existing run `runs` by one
    /// card at either terminus.
    pub const fn run_ext(runs: Cards, hand: Cards) -> Cards {
        Cards(((runs.0 << 1) | (runs.0 >> 1)) & hand.0)
    }

    /// Single cards in `hand` that extend an existing set `sets` into a
    /// suit the set does not yet use.
    pub const fn set_ext(sets: Cards, hand: Cards) -> Cards {
        Cards(((sets.0 << 16) | (sets.0 >> 16)) & hand.0)
    }

    /// Parses a space-separated list of two-character card tokens.
    /// `"(none)"` and the empty string both parse to the empty set.
    pub fn parse(text: &str) -> Option<Cards> {
        let text = text.trim();
        if text.is_empty() || text == "(none)" {
            return Some(Cards::EMPTY);
        }
        let mut cards = Cards::EMPTY;
        for token in text.split_whitespace() {
            let card = Card::parse(token)?;
            cards.add(Cards::from_card(card));
        }
        Some(cards)
    }
}

impl BitOr for Cards {
    type Output = Cards;
    fn bitor(self, rhs: Self) -> Self::Output {
        Cards(self.0 | rhs.0)
    }
}

impl BitOrAssign for Cards {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Cards {
    type Output = Cards;
    fn bitand(self, rhs: Self) -> Self::Output {
        Cards(self.0 & rhs.0)
    }
}

impl BitAndAssign for Cards {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

/// Set difference: `self` with every bit of `rhs` cleared.
impl Sub for Cards {
    type Output = Cards;
    fn sub(self, rhs: Self) -> Self::Output {
        Cards(self.0 & !rhs.0)
    }
}

pub struct CardsIter {
    remaining: Cards,
}

impl Iterator for CardsIter {
    type Item = Cards;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.remaining.low();
        if bit.is_empty() {
            return None;
        }
        self.remaining = self.remaining.next(bit);
        Some(bit)
    }
}

impl fmt::Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for bit in self.iter() {
            let card = Card::from_id(bit.0.trailing_zeros() as u8).expect("iterated bit is a legal card");
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        if first {
            f.write_str("(none)")?;
        }
        Ok(())
    }
}
