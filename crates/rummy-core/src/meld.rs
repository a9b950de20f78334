//! The meld enumerator (derives playable melds from a hand and table) and
//! the `rejected`-options bookkeeping the turn search threads through
//! sibling subtrees.

use crate::model::cardset::Cards;
use crate::model::position::Position;

/// One of the four classes of playable meld action, in the fixed order
/// the search explores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeldClass {
    RunCenter,
    SetCenter,
    RunExtension,
    SetExtension,
}

impl MeldClass {
    pub const ORDER: [MeldClass; 4] =
        [MeldClass::RunCenter, MeldClass::SetCenter, MeldClass::RunExtension, MeldClass::SetExtension];
}

/// The four option card-sets: every bit in `run_centers` is an
/// independently playable run-center action, and so on for the other
/// three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub run_centers: Cards,
    pub set_centers: Cards,
    pub run_extensions: Cards,
    pub set_extensions: Cards,
}

impl Options {
    pub const EMPTY: Options = Options {
        run_centers: Cards::EMPTY,
        set_centers: Cards::EMPTY,
        run_extensions: Cards::EMPTY,
        set_extensions: Cards::EMPTY,
    };

    /// Computes the four option classes for the current player's hand
    /// against the current table.
    pub fn compute(position: &Position) -> Options {
        let hand = position.current_player().hand;
        let table = position.table;
        Options {
            run_centers: hand.run_centers(),
            set_centers: hand.set_centers(),
            run_extensions: Cards::run_ext(table.runs, hand),
            set_extensions: Cards::set_ext(table.sets, hand),
        }
    }

    pub fn class(&self, class: MeldClass) -> Cards {
        match class {
            MeldClass::RunCenter => self.run_centers,
            MeldClass::SetCenter => self.set_centers,
            MeldClass::RunExtension => self.run_extensions,
            MeldClass::SetExtension => self.set_extensions,
        }
    }

    fn class_mut(&mut self, class: MeldClass) -> &mut Cards {
        match class {
            MeldClass::RunCenter => &mut self.run_centers,
            MeldClass::SetCenter => &mut self.set_centers,
            MeldClass::RunExtension => &mut self.run_extensions,
            MeldClass::SetExtension => &mut self.set_extensions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.run_centers.is_empty()
            && self.set_centers.is_empty()
            && self.run_extensions.is_empty()
            && self.set_extensions.is_empty()
    }

    /// `self` with every bit present in `rejected`'s matching class
    /// removed.
    pub fn minus(&self, rejected: &Options) -> Options {
        Options {
            run_centers: self.run_centers - rejected.run_centers,
            set_centers: self.set_centers - rejected.set_centers,
            run_extensions: self.run_extensions - rejected.run_extensions,
            set_extensions: self.set_extensions - rejected.set_extensions,
        }
    }

    pub fn mark_rejected(&mut self, class: MeldClass, bit: Cards) {
        self.class_mut(class).add(bit);
    }

    pub fn unmark_rejected(&mut self, class: MeldClass, bit: Cards) {
        self.class_mut(class).remove(bit);
    }

    /// Iterates every `(class, single-card-bit)` pair in the fixed order
    /// §4.1 requires: run-centers, set-centers, run-extensions,
    /// set-extensions, ascending bit order within each class.
    pub fn iter(&self) -> impl Iterator<Item = (MeldClass, Cards)> + '_ {
        MeldClass::ORDER.into_iter().flat_map(move |class| self.class(class).iter().map(move |bit| (class, bit)))
    }
}

/// The meld-set delta a given option bit contributes, in meld-form (ready
/// to pass to [`Position::play_run`] / [`Position::play_set`]).
pub fn meld_for(class: MeldClass, bit: Cards) -> Cards {
    match class {
        MeldClass::RunCenter => Cards::run_from_center(bit),
        MeldClass::SetCenter => Cards::set_from_center(bit),
        MeldClass::RunExtension | MeldClass::SetExtension => bit,
    }
}

pub const fn is_run(class: MeldClass) -> bool {
    matches!(class, MeldClass::RunCenter | MeldClass::RunExtension)
}
