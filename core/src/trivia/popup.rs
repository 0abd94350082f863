use rand::Rng;

use super::*;

/// Valid transitions:
/// - Closed -> Asking (ask)
/// - Asking -> Asking (ask)
/// - Asking -> Answered (reveal answer)
/// - Answered -> Asking (ask, ask another)
/// - Asking | Answered -> Closed (dismiss)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PopupState {
    #[default]
    Closed,
    /// Question shown, answer still hidden
    Asking(QuestionId),
    /// Question shown together with its answer
    Answered(QuestionId),
}

impl PopupState {
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub const fn answer_shown(self) -> bool {
        matches!(self, Self::Answered(_))
    }

    pub const fn question_id(self) -> Option<QuestionId> {
        match self {
            Self::Closed => None,
            Self::Asking(id) | Self::Answered(id) => Some(id),
        }
    }
}

/// Question popup shown between turns. Never affects which tiles may be revealed.
#[derive(Clone, Debug, PartialEq)]
pub struct TriviaDesk {
    cycler: QuestionCycler,
    popup: PopupState,
}

impl TriviaDesk {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            cycler: QuestionCycler::new(bank),
            popup: PopupState::Closed,
        }
    }

    pub fn cycler(&self) -> &QuestionCycler {
        &self.cycler
    }

    pub fn is_available(&self) -> bool {
        self.cycler.is_available()
    }

    pub fn popup(&self) -> PopupState {
        self.popup
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.popup
            .question_id()
            .and_then(|id| self.cycler.question(id))
    }

    /// Opens the popup on a freshly picked question, whatever state it was in.
    pub fn ask<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PopupOutcome> {
        let id = self.cycler.pick_next(rng)?;
        self.popup = PopupState::Asking(id);
        log::debug!("Asking question {}", id);
        Ok(PopupOutcome::Changed)
    }

    pub fn reveal_answer(&mut self) -> PopupOutcome {
        match self.popup {
            PopupState::Asking(id) => {
                self.popup = PopupState::Answered(id);
                log::debug!("Showing answer to question {}", id);
                PopupOutcome::Changed
            }
            PopupState::Closed | PopupState::Answered(_) => PopupOutcome::NoChange,
        }
    }

    /// Only offered once the answer of the current question is showing.
    pub fn ask_another<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PopupOutcome> {
        match self.popup {
            PopupState::Answered(_) => self.ask(rng),
            PopupState::Closed | PopupState::Asking(_) => Ok(PopupOutcome::NoChange),
        }
    }

    pub fn dismiss(&mut self) -> PopupOutcome {
        if self.popup.is_open() {
            self.popup = PopupState::Closed;
            log::debug!("Question popup closed");
            PopupOutcome::Changed
        } else {
            PopupOutcome::NoChange
        }
    }
}
