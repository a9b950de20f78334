//! Fixture builders shared by unit and integration tests. Not part of the
//! public API.

use crate::model::card::Card;
use crate::model::cardset::Cards;
use crate::model::pile::Pile;
use crate::model::position::{Player, Position, NUM_PLAYERS};
use crate::model::table::Table;

/// Parses a space-separated token list in the order given, without
/// collapsing it through a `Cards` set (which would re-sort the tokens
/// into ascending card-id order and lose top-to-bottom ordering).
fn ordered_cards(tokens: &str) -> Vec<Cards> {
    tokens.split_whitespace().map(|t| Cards::from_card(Card::parse(t).expect("valid card token"))).collect()
}

/// Builds a valid 3-player position. `hands` are the three players' card
/// strings; `discard_top_to_bottom` lists the discard pile from its top
/// card downward (space-separated, may be empty); whatever physical
/// cards remain after accounting for hands/discard/table become the draw
/// pile, in ascending card-id order.
pub fn position_with(
    hands: [&str; NUM_PLAYERS],
    discard_top_to_bottom: &str,
    table: Table,
    current: usize,
) -> Position {
    let hand_sets: [Cards; NUM_PLAYERS] = std::array::from_fn(|i| Cards::parse(hands[i]).unwrap());
    let discard_order = ordered_cards(discard_top_to_bottom);

    let mut accounted = Cards::EMPTY;
    for hand in &hand_sets {
        accounted |= hand.contract();
    }
    accounted |= table.melded();
    for &card in &discard_order {
        accounted |= card;
    }
    let remaining = Cards::FULL_DECK - accounted;

    let players = std::array::from_fn(|i| Player::new(i, hand_sets[i]));
    let draw_pile = {
        let mut pile = Pile::new();
        for card in remaining.iter() {
            pile.push(card);
        }
        pile
    };
    let discard_pile = {
        let mut pile = Pile::new();
        for &card in discard_order.iter().rev() {
            pile.push(card);
        }
        pile
    };
    Position::new(players, current, draw_pile, discard_pile, table).expect("valid fixture position")
}

/// Shorthand for a position where only the current player's hand matters
/// and the other two are empty.
pub fn single_player_position(hand: &str, table: Table) -> Position {
    position_with([hand, "", ""], "", table, 0)
}
