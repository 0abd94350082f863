use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::*;

/// Random selection without replacement over a [`QuestionBank`], starting a new cycle once every question was asked.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCycler {
    bank: QuestionBank,
    asked: BTreeSet<QuestionId>,
    cycles: u32,
}

impl QuestionCycler {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            asked: BTreeSet::new(),
            cycles: 0,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn is_available(&self) -> bool {
        !self.bank.is_empty()
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.bank.get(id)
    }

    /// Questions asked so far in the current cycle.
    pub fn asked(&self) -> &BTreeSet<QuestionId> {
        &self.asked
    }

    /// How many times the pool ran dry and selection started over.
    pub fn cycles_completed(&self) -> u32 {
        self.cycles
    }

    pub fn pick_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<QuestionId> {
        if self.bank.is_empty() {
            return Err(GameError::NoEligibleQuestions);
        }

        let mut remaining = self.remaining();
        if remaining.is_empty() {
            self.asked.clear();
            self.cycles = self.cycles.saturating_add(1);
            log::debug!("Question pool exhausted, starting cycle {}", self.cycles);
            remaining = self.remaining();
        }

        let id = *remaining.choose(rng).ok_or(GameError::NoEligibleQuestions)?;
        self.asked.insert(id);
        log::trace!(
            "Picked question {} ({} of {} asked this cycle)",
            id,
            self.asked.len(),
            self.bank.len()
        );
        Ok(id)
    }

    fn remaining(&self) -> Vec<QuestionId> {
        (0..self.bank.len())
            .filter(|id| !self.asked.contains(id))
            .collect()
    }
}
