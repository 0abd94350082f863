use crate::*;
pub use shuffle::*;

mod shuffle;

pub trait DeckGenerator {
    fn generate(self, base: &[Prize]) -> Deck;
}
