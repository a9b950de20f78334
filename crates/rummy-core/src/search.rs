//! The turn search: given a position, explores every legal turn a player
//! can take and returns the one with the greatest [`eval`](crate::eval::eval).
//!
//! A turn is, in order: take zero or more cards off the top of the
//! discard pile (or draw one card, mutually exclusive with taking), meld
//! zero or more runs/sets from the resulting hand, and discard one card
//! (unless the hand is now empty). The search is a plain depth-first
//! backtracking walk over this shape: every position mutation made while
//! descending is undone on the way back up, so the position passed in is
//! restored to its original state once the search returns.

use crate::eval;
use crate::meld::{self, MeldClass, Options};
use crate::model::cardset::Cards;
use crate::model::position::Position;
use crate::model::table::Table;

/// One fully-specified turn, together with the evaluation it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    /// How many cards were taken off the discard pile. 0 means either no
    /// take happened, or a draw happened instead (see `draw`).
    pub num_taken: usize,
    /// The bottom-most card taken, if `num_taken > 0`. Must end up part of
    /// a meld in `melds` — see [`Play::obeys_take_rule`].
    pub deepest: Cards,
    /// The card drawn from the draw pile, if any. Empty if cards were
    /// taken instead, or if the draw pile was empty.
    pub draw: Cards,
    /// Every run/set melded this turn, as a delta against the table at
    /// the start of the turn (not the table's full contents).
    pub melds: Table,
    /// The card discarded to end the turn. Empty iff the hand was melded
    /// out completely.
    pub discard: Cards,
    /// `eval` of the position reached by playing this turn.
    pub eval: i32,
}

impl Play {
    /// A deep take (`num_taken > 0`) is only legal if its deepest card
    /// ended up melded this same turn. `deepest` is a bare pile card
    /// (contracted); a low-ace run records the low-ace bit in `melds`, so
    /// the comparison has to go through `contract()` to match an ace
    /// regardless of which run it ended up in.
    pub fn obeys_take_rule(&self) -> bool {
        self.num_taken == 0 || self.melds.melded().contract().has(self.deepest)
    }
}

/// Finds the greatest-`eval` legal [`Play`] available from `position`.
/// `position` is left exactly as given; every descent is undone.
pub fn best_play(position: &mut Position) -> Play {
    let mut best: Option<Play> = None;
    search_take(position, &mut best);
    best.expect("standing pat with no take, no draw, and a plain discard is always explored")
}

fn search_take(position: &mut Position, best: &mut Option<Play>) {
    for k in 0..=position.discard_pile.len() {
        let taken = position.take(k);
        search_draw(position, k, taken.deepest, best);
        position.undo_take(&taken);
    }
}

/// Drawing and taking are mutually exclusive, so the draw branch only
/// applies when nothing was taken (`num_taken == 0`).
fn search_draw(position: &mut Position, num_taken: usize, deepest: Cards, best: &mut Option<Play>) {
    if num_taken == 0 {
        if let Some(card) = position.draw() {
            search_melds(position, &mut Options::EMPTY, &mut Table::new(), num_taken, card, deepest, best);
            position.undo_draw(card);
        }
    }
    search_melds(position, &mut Options::EMPTY, &mut Table::new(), num_taken, Cards::EMPTY, deepest, best);
}

/// Explores every way to meld zero or more of the current options, then
/// hands each resulting hand off to [`search_discard`]. `rejected` tracks
/// which option bits a sibling subtree already explored and must not be
/// repeated in this one; `meld_delta` accumulates this turn's melds so
/// far (separately from `position.table`, which also carries melds from
/// earlier turns).
fn search_melds(
    position: &mut Position,
    rejected: &mut Options,
    meld_delta: &mut Table,
    num_taken: usize,
    draw: Cards,
    deepest: Cards,
    best: &mut Option<Play>,
) {
    let options: Vec<(MeldClass, Cards)> = Options::compute(position).minus(rejected).iter().collect();

    for &(class, bit) in &options {
        let delta = meld::meld_for(class, bit);
        if meld::is_run(class) {
            position.play_run(delta);
            meld_delta.add_run(delta);
        } else {
            position.play_set(delta);
            meld_delta.add_set(delta);
        }
        rejected.mark_rejected(class, bit);

        search_melds(position, rejected, meld_delta, num_taken, draw, deepest, best);

        if meld::is_run(class) {
            position.undo_run(delta);
            meld_delta.remove_run(delta);
        } else {
            position.undo_set(delta);
            meld_delta.remove_set(delta);
        }
    }

    // Also explore melding none of the remaining options.
    search_discard(position, meld_delta, num_taken, draw, deepest, best);

    for &(class, bit) in &options {
        rejected.unmark_rejected(class, bit);
    }
}

fn search_discard(
    position: &mut Position,
    meld_delta: &Table,
    num_taken: usize,
    draw: Cards,
    deepest: Cards,
    best: &mut Option<Play>,
) {
    // Contracted so an ace's two hand-form bits aren't offered as two
    // separate discards of the same physical card.
    let hand = position.current_player().hand.contract();
    if hand.is_empty() {
        let candidate =
            Play { num_taken, deepest, draw, melds: *meld_delta, discard: Cards::EMPTY, eval: eval::eval(position) };
        consider(best, candidate);
        return;
    }
    for card in hand.iter() {
        position.discard(card);
        let candidate = Play { num_taken, deepest, draw, melds: *meld_delta, discard: card, eval: eval::eval(position) };
        consider(best, candidate);
        position.undo_discard();
    }
}

fn consider(best: &mut Option<Play>, candidate: Play) {
    if !candidate.obeys_take_rule() {
        return;
    }
    if best.as_ref().map_or(true, |b| candidate.eval > b.eval) {
        *best = Some(candidate);
    }
}
