//! The pretty-printed table grid. Card and card-set text parsing/display
//! (the two-character card grammar, space-separated card-set lists) live
//! on [`Card`](crate::model::card::Card) and
//! [`Cards`](crate::model::cardset::Cards) themselves, via their
//! `parse`/`Display` impls.

use crate::model::card::Card;
use crate::model::cardset::Cards;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::model::table::Table;

/// Renders `table` as a 4-row (one per suit) by 14-column (one per rank,
/// low ace through high ace) grid. Each row starts with its suit's
/// symbol; each cell is `-` if that card is part of a run, `|` if part
/// of a set, `+` if (only possible mid-search, before melds settle into
/// disjoint runs and sets) both, `.` otherwise.
pub fn render_table(table: &Table) -> String {
    let mut out = String::new();
    for suit in Suit::ALL {
        out.push(suit.to_char());
        for rank in Rank::ORDERED {
            let card = Cards::from_card(Card::new(rank, suit));
            let in_run = table.runs.has(card);
            let in_set = table.sets.has(card);
            out.push(match (in_run, in_set) {
                (true, true) => '+',
                (true, false) => '-',
                (false, true) => '|',
                (false, false) => '.',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use crate::model::cardset::Cards;
    use crate::model::table::Table;

    #[test]
    fn empty_table_is_all_dots() {
        let grid = render_table(&Table::new());
        for line in grid.lines() {
            assert_eq!(&line[1..], ".".repeat(14));
        }
    }

    #[test]
    fn run_and_set_cells_use_distinct_marks() {
        let table = Table { runs: Cards::parse("2S 3S 4S").unwrap(), sets: Cards::parse("9C 9D 9H").unwrap() };
        let grid = render_table(&table);
        let spades_row = grid.lines().find(|l| l.starts_with('S')).unwrap();
        // Columns are LowAce, Two, Three, Four, ... — Two/Three/Four sit at indices 1, 2, 3.
        assert_eq!(&spades_row[1..5], ".---");
        let clubs_row = grid.lines().find(|l| l.starts_with('C')).unwrap();
        // Nine sits at column index 8 (LowAce=0 .. Nine=8).
        assert_eq!(clubs_row.as_bytes()[9], b'|');
    }

    #[test]
    fn overlapping_run_and_set_renders_as_plus() {
        let overlap = Cards::parse("9C").unwrap();
        let table = Table { runs: overlap, sets: overlap };
        let grid = render_table(&table);
        let clubs_row = grid.lines().find(|l| l.starts_with('C')).unwrap();
        assert_eq!(clubs_row.as_bytes()[9], b'+');
    }
}
