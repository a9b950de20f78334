use crate::model::cardset::Cards;

/// The melds currently face-up on the table: a card-set of cards tied up
/// in runs, and a disjoint card-set of cards tied up in sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub runs: Cards,
    pub sets: Cards,
}

impl Table {
    pub const fn new() -> Self {
        Self { runs: Cards::EMPTY, sets: Cards::EMPTY }
    }

    /// Every card currently melded, in either a run or a set.
    pub fn melded(&self) -> Cards {
        self.runs | self.sets
    }

    pub fn add_run(&mut self, meld: Cards) {
        debug_assert!((self.sets & meld).is_empty(), "run meld overlaps an existing set");
        self.runs.add(meld);
    }

    pub fn remove_run(&mut self, meld: Cards) {
        self.runs.remove(meld);
    }

    pub fn add_set(&mut self, meld: Cards) {
        debug_assert!((self.runs & meld).is_empty(), "set meld overlaps an existing run");
        self.sets.add(meld);
    }

    pub fn remove_set(&mut self, meld: Cards) {
        self.sets.remove(meld);
    }
}

#[cfg(test)]
mod tests {
    use super::Table;
    use crate::model::cardset::Cards;

    #[test]
    fn runs_and_sets_stay_disjoint() {
        let mut table = Table::new();
        table.add_run(Cards::parse("TH JH QH").unwrap());
        table.add_set(Cards::parse("7H 7C 7D").unwrap());
        assert_eq!(table.runs, Cards::parse("TH JH QH").unwrap());
        assert_eq!(table.sets, Cards::parse("7H 7C 7D").unwrap());
        assert!((table.runs & table.sets).is_empty());
    }

    #[test]
    fn add_remove_round_trips_to_empty() {
        let mut table = Table::new();
        let run = Cards::parse("TH JH QH").unwrap();
        table.add_run(run);
        table.remove_run(run);
        assert_eq!(table, Table::new());
    }

    #[test]
    fn melded_is_the_union() {
        let mut table = Table::new();
        table.add_run(Cards::parse("2S 3S 4S").unwrap());
        table.add_set(Cards::parse("8C 8D 8H").unwrap());
        assert_eq!(table.melded(), Cards::parse("2S 3S 4S 8C 8D 8H").unwrap());
    }
}
