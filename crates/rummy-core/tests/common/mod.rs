//! Shared fixture builders for the integration tests in this directory.

use rummy_core::{Card, Cards, Pile, Player, Position, Table};

/// Parses a space-separated token list in the order given, without
/// collapsing it through a `Cards` set (which would re-sort the tokens
/// into ascending card-id order and lose top-to-bottom ordering).
fn ordered_cards(tokens: &str) -> Vec<Cards> {
    tokens.split_whitespace().map(|t| Cards::from_card(Card::parse(t).expect("valid card token"))).collect()
}

/// Builds a valid 3-player position from card-set text. `discard_top_to_bottom`
/// lists the discard pile from its top card down (space-separated, may be
/// empty); whatever physical cards remain after hands/discard/table are
/// accounted for become the draw pile, in ascending card-id order.
pub fn position_with(hands: [&str; 3], discard_top_to_bottom: &str, table: Table, current: usize) -> Position {
    let hand_sets: [Cards; 3] = std::array::from_fn(|i| Cards::parse(hands[i]).unwrap());
    let discard_order = ordered_cards(discard_top_to_bottom);

    let mut accounted = Cards::EMPTY;
    for hand in &hand_sets {
        accounted.add(hand.contract());
    }
    accounted.add(table.melded());
    for &card in &discard_order {
        accounted.add(card);
    }
    let remaining = Cards::FULL_DECK - accounted;

    let players = std::array::from_fn(|i| Player::new(i, hand_sets[i]));
    let mut draw_pile = Pile::new();
    for card in remaining.iter() {
        draw_pile.push(card);
    }
    let mut discard_pile = Pile::new();
    for &card in discard_order.iter().rev() {
        discard_pile.push(card);
    }
    Position::new(players, current, draw_pile, discard_pile, table).expect("valid fixture position")
}

pub fn single_player_position(hand: &str, table: Table) -> Position {
    position_with([hand, "", ""], "", table, 0)
}

/// Builds a position with an empty draw pile: every card not in `hand` or
/// the discard pile is dealt to the two rivals instead. Pins down turn
/// evaluation exactly, with no "what's on top of the draw pile" unknown.
pub fn position_no_draw(hand: &str, discard_top_to_bottom: &str) -> Position {
    let hand_set = Cards::parse(hand).unwrap();
    let discard_order = ordered_cards(discard_top_to_bottom);
    let discard_union = discard_order.iter().fold(Cards::EMPTY, |acc, &c| acc | c);
    let rest: Vec<Cards> = (Cards::FULL_DECK - hand_set - discard_union).iter().collect();
    let (half1, half2) = rest.split_at(rest.len() / 2);
    let fold = |cards: &[Cards]| cards.iter().fold(Cards::EMPTY, |acc, &c| acc | c);

    let players = [Player::new(0, hand_set), Player::new(1, fold(half1)), Player::new(2, fold(half2))];
    let mut discard_pile = Pile::new();
    for &card in discard_order.iter().rev() {
        discard_pile.push(card);
    }
    Position::new(players, 0, Pile::new(), discard_pile, Table::new()).expect("valid fixture position")
}
