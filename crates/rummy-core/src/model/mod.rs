//! Card representation and position state: the data model the search
//! operates on.

pub mod card;
pub mod cardset;
pub mod pile;
pub mod position;
pub mod rank;
pub mod suit;
pub mod table;

pub use card::Card;
pub use cardset::Cards;
pub use pile::Pile;
pub use position::{Player, Position, PositionError};
pub use rank::Rank;
pub use suit::Suit;
pub use table::Table;
