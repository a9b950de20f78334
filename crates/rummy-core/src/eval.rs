//! Maps a terminal position to an integer preference. Larger is better.

use crate::model::position::Position;

/// `eval(P) = P.score + floor(handPoints(P.hand) / 2) + rivalBonus`.
///
/// If the current player's hand is empty ("going out"), `rivalBonus = 7 *
/// (sum of rivals' hand sizes) / (numPlayers - 1)`, integer division;
/// otherwise `rivalBonus = 0`.
pub fn eval(position: &Position) -> i32 {
    let player = position.current_player();
    let hand_points = player.hand.points();
    let rival_bonus = if player.hand.is_empty() {
        let rival_cards: u32 = position.rivals().map(|id| position.player(id).hand.size()).sum();
        let divisor = (position.players().len() - 1) as u32;
        (7 * rival_cards / divisor) as i32
    } else {
        0
    };
    player.score + hand_points / 2 + rival_bonus
}

#[cfg(test)]
mod tests {
    use super::eval;
    use crate::test_support::position_with;

    #[test]
    fn nonempty_hand_has_no_rival_bonus() {
        let position = position_with(["2C 5D 8H JS 6D", "3C 4C 5C 6C 7C 8C 9C", "2D 3D 4D 5D 6D 7D 8D"], "", Default::default(), 0);
        // 2(5)+5(5)+8(5)+J(10)+6(5) = 30, /2 = 15.
        assert_eq!(eval(&position), 15);
    }

    #[test]
    fn going_out_applies_rival_bonus() {
        // Current player's hand is empty; rivals hold 6 and 5 cards.
        let position = position_with(
            ["", "2D 3D 4D 5D 6D 7D", "2S 3S 4S 5S 6S"],
            "",
            Default::default(),
            0,
        );
        assert_eq!(eval(&position), 7 * (6 + 5) / 2);
    }

    #[test]
    fn score_is_carried_through_after_melding_out() {
        let mut position =
            position_with(["2C 3C 4C", "2D 3D 4D 5D 6D 7D", "2S 3S 4S 5S 6S"], "", Default::default(), 0);
        position.play_run(crate::model::cardset::Cards::parse("2C 3C 4C").unwrap());
        assert!(position.current_player().hand.is_empty());
        assert_eq!(eval(&position), position.current_player().score + 7 * (6 + 5) / 2);
    }
}
