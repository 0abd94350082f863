#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use format::*;
pub use generator::*;
pub use prize::*;
pub use session::*;
pub use trivia::*;
pub use types::*;

mod engine;
mod error;
mod format;
mod generator;
mod prize;
mod session;
mod trivia;
mod types;

/// Which of the two board layouts is being played.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardVariant {
    /// Twenty tiles, prizes only.
    #[default]
    Classic,
    /// Twelve tiles with the question popup between turns.
    Trivia,
}

impl BoardVariant {
    pub const ALL: [BoardVariant; 2] = [Self::Classic, Self::Trivia];

    pub const fn base_prizes(self) -> &'static [Prize] {
        match self {
            Self::Classic => &CLASSIC_PRIZES,
            Self::Trivia => &TRIVIA_PRIZES,
        }
    }

    pub const fn tile_count(self) -> usize {
        self.base_prizes().len()
    }

    /// Declared total of every cash prize on the board, penalties excluded.
    pub const fn prize_pool(self) -> Amount {
        match self {
            Self::Classic => 20_000_000,
            Self::Trivia => 10_000_000,
        }
    }

    pub const fn columns(self) -> usize {
        match self {
            Self::Classic => 5,
            Self::Trivia => 4,
        }
    }

    pub const fn has_trivia(self) -> bool {
        matches!(self, Self::Trivia)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "20 20",
            Self::Trivia => "20 20 Quiz",
        }
    }
}

/// Prizes in the order they are laid out on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    prizes: Vec<Prize>,
}

impl Deck {
    pub fn from_prizes(prizes: Vec<Prize>) -> Self {
        Self { prizes }
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn get(&self, index: TileIndex) -> Option<&Prize> {
        self.prizes.get(index)
    }

    pub fn validate_index(&self, index: TileIndex) -> Result<TileIndex> {
        if index < self.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }

    pub fn as_slice(&self) -> &[Prize] {
        &self.prizes
    }

    /// Sum of every monetary value in the deck, penalties included.
    pub fn total_value(&self) -> Amount {
        self.prizes.iter().map(Prize::value).sum()
    }
}

impl Index<TileIndex> for Deck {
    type Output = Prize;

    fn index(&self, index: TileIndex) -> &Self::Output {
        &self.prizes[index]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    BoardCleared,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            BoardCleared => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PopupOutcome {
    NoChange,
    Changed,
}

impl PopupOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_tile_counts() {
        assert_eq!(BoardVariant::Classic.tile_count(), 20);
        assert_eq!(BoardVariant::Trivia.tile_count(), 12);
    }

    #[test]
    fn declared_pool_matches_cash_prizes() {
        for variant in BoardVariant::ALL {
            let cash: Amount = variant
                .base_prizes()
                .iter()
                .filter(|prize| prize.kind() == PrizeKind::Money)
                .map(Prize::value)
                .sum();
            assert_eq!(cash, variant.prize_pool(), "{variant:?}");
        }
    }

    #[test]
    fn deck_rejects_out_of_range_index() {
        let deck = Deck::from_prizes(CLASSIC_PRIZES.to_vec());
        assert_eq!(deck.validate_index(19), Ok(19));
        assert_eq!(deck.validate_index(20), Err(GameError::InvalidIndex));
    }

    #[test]
    fn only_trivia_variant_has_questions() {
        assert!(!BoardVariant::Classic.has_trivia());
        assert!(BoardVariant::Trivia.has_trivia());
    }
}
