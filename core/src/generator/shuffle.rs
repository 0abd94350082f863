use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Fisher-Yates: walks from the back, swapping each slot with a uniformly chosen slot at or before it.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a uniformly permuted copy of `items`, leaving the input untouched.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    fisher_yates(&mut out, rng);
    out
}

/// Lays out the base prizes in a random order derived from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleDeckGenerator {
    seed: u64,
}

impl ShuffleDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffleDeckGenerator {
    fn generate(self, base: &[Prize]) -> Deck {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let prizes = shuffled(base, &mut rng);
        log::debug!(
            "Shuffled deck of {} prizes with seed {:#x}",
            prizes.len(),
            self.seed
        );
        Deck::from_prizes(prizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec;

    fn sorted(mut prizes: Vec<Prize>) -> Vec<Prize> {
        prizes.sort();
        prizes
    }

    #[test]
    fn deck_is_permutation_of_base() {
        for seed in 0..200 {
            let deck = ShuffleDeckGenerator::new(seed).generate(&CLASSIC_PRIZES);
            assert_eq!(deck.len(), CLASSIC_PRIZES.len());
            assert_eq!(
                sorted(deck.as_slice().to_vec()),
                sorted(CLASSIC_PRIZES.to_vec())
            );
        }
    }

    #[test]
    fn same_seed_same_deck() {
        let a = ShuffleDeckGenerator::new(42).generate(&TRIVIA_PRIZES);
        let b = ShuffleDeckGenerator::new(42).generate(&TRIVIA_PRIZES);
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_inputs_are_returned_as_is() {
        let mut rng = SmallRng::seed_from_u64(7);
        let empty: [u8; 0] = [];
        assert!(shuffled(&empty, &mut rng).is_empty());
        assert_eq!(shuffled(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn every_ordering_is_reachable_and_roughly_uniform() {
        let mut rng = SmallRng::seed_from_u64(0x2020);
        let mut counts = BTreeMap::new();
        for _ in 0..6000 {
            *counts.entry(shuffled(&[0u8, 1, 2], &mut rng)).or_insert(0u32) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (ordering, count) in counts {
            assert!((700..1300).contains(&count), "{ordering:?}: {count}");
        }
    }
}
