use crate::model::cardset::Cards;
use crate::model::pile::Pile;
use crate::model::table::Table;
use core::fmt;

/// Number of players in the reference configuration.
pub const NUM_PLAYERS: usize = 3;

/// A player's hand, score, and seat index. The hand is kept in expanded
/// form: an ace the player holds sets both its low and high bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Player {
    pub hand: Cards,
    pub score: i32,
    pub id: usize,
}

impl Player {
    pub const fn new(id: usize, hand: Cards) -> Self {
        Self { hand, score: 0, id }
    }
}

/// A position is malformed: a precondition violation caught at
/// construction, per the error-handling design (fatal, not a pruned
/// branch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A zone's card-set has a bit set at one of the two permanently
    /// illegal rank positions.
    IllegalMask,
    /// The same physical card appears in more than one zone.
    Overlap,
    /// The zones do not partition exactly 52 physical cards.
    SizeMismatch { found: u32 },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::IllegalMask => write!(f, "a zone's card-set sets an illegal rank bit"),
            PositionError::Overlap => write!(f, "a card appears in more than one zone"),
            PositionError::SizeMismatch { found } => {
                write!(f, "zones account for {found} physical cards, expected 52")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// `{ players, current, drawPile, discardPile, table }`: the entire state
/// the search operates on. Exclusively owned by the search; every
/// mutating method has a paired undo, and the search restores the
/// position to its entry state on every backtrack.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    players: [Player; NUM_PLAYERS],
    pub current: usize,
    pub draw_pile: Pile,
    pub discard_pile: Pile,
    pub table: Table,
}

/// The outcome of [`Position::take`], retained so [`Position::undo_take`]
/// can restore the discard pile's exact original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taken {
    /// Union of every card taken.
    pub cards: Cards,
    /// The bottom-most (deepest) card of the taken slice; empty if
    /// nothing was taken.
    pub deepest: Cards,
    sequence: Vec<Cards>,
}

impl Position {
    pub fn new(
        players: [Player; NUM_PLAYERS],
        current: usize,
        draw_pile: Pile,
        discard_pile: Pile,
        table: Table,
    ) -> Result<Self, PositionError> {
        let position = Self { players, current, draw_pile, discard_pile, table };
        position.validate()?;
        Ok(position)
    }

    fn validate(&self) -> Result<(), PositionError> {
        for player in &self.players {
            if !player.hand.is_legal() {
                return Err(PositionError::IllegalMask);
            }
        }
        let draw_union = self.draw_pile.union();
        let discard_union = self.discard_pile.union();
        if !draw_union.is_legal() || !discard_union.is_legal() {
            return Err(PositionError::IllegalMask);
        }
        let melded = self.table.melded();
        if !melded.is_legal() {
            return Err(PositionError::IllegalMask);
        }

        let mut seen = Cards::EMPTY;
        let mut total = 0u32;
        for zone in self.players.iter().map(|p| p.hand.contract()).chain([draw_union, discard_union, melded]) {
            if !(seen & zone).is_empty() {
                return Err(PositionError::Overlap);
            }
            seen |= zone;
            total += zone.size();
        }
        if total != 52 {
            return Err(PositionError::SizeMismatch { found: total });
        }
        Ok(())
    }

    pub fn players(&self) -> &[Player; NUM_PLAYERS] {
        &self.players
    }

    pub fn player(&self, id: usize) -> &Player {
        &self.players[id]
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Seat indices of every player other than the current one.
    pub fn rivals(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_PLAYERS).filter(move |&id| id != self.current)
    }

    /// Pops the top card of the draw pile into the current player's hand,
    /// expanding it (an ace gains both its low and high bit) on entry.
    /// `None` if the draw pile is empty.
    pub fn draw(&mut self) -> Option<Cards> {
        let card = self.draw_pile.pop()?;
        self.players[self.current].hand.add(card.expand());
        Some(card)
    }

    pub fn undo_draw(&mut self, card: Cards) {
        self.players[self.current].hand.remove(card.expand());
        self.draw_pile.push(card);
    }

    /// Moves the top `k` cards of the discard pile into the current
    /// player's hand. `k` must not exceed the discard pile's size.
    pub fn take(&mut self, k: usize) -> Taken {
        debug_assert!(k <= self.discard_pile.len());
        let mut sequence = Vec::with_capacity(k);
        for _ in 0..k {
            let card = self.discard_pile.pop().expect("k bounded by discard pile size");
            self.players[self.current].hand.add(card.expand());
            sequence.push(card);
        }
        let deepest = sequence.last().copied().unwrap_or(Cards::EMPTY);
        let cards = sequence.iter().fold(Cards::EMPTY, |acc, &c| acc | c);
        Taken { cards, deepest, sequence }
    }

    pub fn undo_take(&mut self, taken: &Taken) {
        for &card in taken.sequence.iter().rev() {
            self.players[self.current].hand.remove(card.expand());
            self.discard_pile.push(card);
        }
    }

    /// Discards `card`, a single physical card in its canonical (contracted)
    /// form. Clears both of its hand representations if it's an ace.
    pub fn discard(&mut self, card: Cards) {
        self.players[self.current].hand.remove(card.expand());
        self.discard_pile.push(card);
    }

    pub fn undo_discard(&mut self) -> Cards {
        let card = self.discard_pile.pop().expect("undo_discard only follows a discard");
        self.players[self.current].hand.add(card.expand());
        card
    }

    /// Adds `meld`'s points to the current player's score, records it as a
    /// run on the table, and removes it (in expanded form, to clear both
    /// ace bits) from the hand.
    pub fn play_run(&mut self, meld: Cards) {
        self.players[self.current].score += meld.points();
        self.table.add_run(meld);
        self.players[self.current].hand.remove(meld.expand());
    }

    /// Inverse of [`Position::play_run`]. Restores the hand in expanded
    /// form so the position is bitwise identical to before the play.
    pub fn undo_run(&mut self, meld: Cards) {
        self.players[self.current].score -= meld.points();
        self.table.remove_run(meld);
        self.players[self.current].hand.add(meld.expand());
    }

    pub fn play_set(&mut self, meld: Cards) {
        self.players[self.current].score += meld.points();
        self.table.add_set(meld);
        self.players[self.current].hand.remove(meld.expand());
    }

    pub fn undo_set(&mut self, meld: Cards) {
        self.players[self.current].score -= meld.points();
        self.table.remove_set(meld);
        self.players[self.current].hand.add(meld.expand());
    }
}
