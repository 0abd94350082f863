use alloc::vec;
use alloc::vec::Vec;
use crate::*;

/// Tracks which tiles of a deck are open and what they have paid out so far.
#[derive(Clone, Debug, PartialEq)]
pub struct PrizeEngine {
    deck: Deck,
    revealed: Vec<bool>,
    revealed_count: usize,
    winnings: Amount,
}

impl PrizeEngine {
    pub fn new(deck: Deck) -> Self {
        let revealed = vec![false; deck.len()];
        Self {
            deck,
            revealed,
            revealed_count: 0,
            winnings: 0,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn tile_count(&self) -> usize {
        self.deck.len()
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    pub fn is_revealed(&self, index: TileIndex) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn prize_at(&self, index: TileIndex) -> Result<&Prize> {
        let index = self.deck.validate_index(index)?;
        Ok(&self.deck[index])
    }

    pub fn winnings(&self) -> Amount {
        self.winnings
    }

    pub fn is_cleared(&self) -> bool {
        self.revealed_count == self.deck.len()
    }

    /// Whether a game-over tile has been turned. Purely informational, more tiles may still be revealed.
    pub fn hit_game_over(&self) -> bool {
        self.deck
            .iter()
            .zip(&self.revealed)
            .any(|(prize, &revealed)| revealed && prize.kind() == PrizeKind::GameOver)
    }

    pub fn reveal(&mut self, index: TileIndex) -> Result<RevealOutcome> {
        let index = self.deck.validate_index(index)?;

        if self.revealed[index] {
            return Ok(RevealOutcome::NoChange);
        }

        let prize = self.deck[index];
        self.revealed[index] = true;
        self.revealed_count += 1;
        self.winnings += prize.value();
        log::debug!(
            "Revealed tile {} ({:?}), winnings now {}",
            index,
            prize.kind(),
            self.winnings
        );

        if self.is_cleared() {
            Ok(RevealOutcome::BoardCleared)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Starts over on `deck`: every tile hidden, winnings back to zero.
    pub fn reset(&mut self, deck: Deck) {
        *self = Self::new(deck);
    }
}
