use crate::model::cardset::Cards;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Ordered LIFO stack of single-card masks, bounded to 52 entries. The
/// last element is the top of the pile.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Pile {
    cards: Vec<Cards>,
}

impl Pile {
    pub const CAPACITY: usize = 52;

    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(Self::CAPACITY) }
    }

    /// A pile holding all 52 legal cards in ascending card-id order.
    pub fn full_deck() -> Self {
        let cards = Cards::FULL_DECK.iter().collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn push(&mut self, card: Cards) {
        debug_assert_eq!(card.size(), 1, "pile entries are single cards");
        debug_assert!(self.cards.len() < Self::CAPACITY, "pile overflow");
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Cards> {
        self.cards.pop()
    }

    pub fn top(&self) -> Option<Cards> {
        self.cards.last().copied()
    }

    /// The `k`-th-from-top card (0-indexed: `nth_from_top(0)` is the top
    /// card). Used to find the "deepest" card of a multi-card take.
    pub fn nth_from_top(&self, k: usize) -> Option<Cards> {
        let len = self.cards.len();
        if k >= len {
            return None;
        }
        Some(self.cards[len - 1 - k])
    }

    /// Union of every card currently in the pile.
    pub fn union(&self) -> Cards {
        self.cards.iter().fold(Cards::EMPTY, |acc, &c| acc | c)
    }

    /// Fisher-Yates shuffle using any `rand::Rng` as the uniform integer
    /// source.
    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pile = Self::full_deck();
        pile.shuffle_in_place(rng);
        pile
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }
}
