use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

use crate::*;
pub use cycler::*;
pub use popup::*;

mod cycler;
mod popup;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub source: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub choices: Option<Vec<String>>,
}

impl Question {
    /// Only multiple-choice questions are ever asked.
    pub fn is_eligible(&self) -> bool {
        self.choices.as_ref().is_some_and(|choices| !choices.is_empty())
    }

    pub fn choices(&self) -> &[String] {
        self.choices.as_deref().unwrap_or_default()
    }
}

/// The eligible subset of a question dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut skipped = 0usize;
        let questions: Vec<_> = questions
            .into_iter()
            .filter(|question| {
                let eligible = question.is_eligible();
                if !eligible {
                    skipped += 1;
                }
                eligible
            })
            .collect();
        log::debug!(
            "Question bank holds {} eligible questions, skipped {}",
            questions.len(),
            skipped
        );
        Self { questions }
    }

    /// Parses a JSON array of `{source, question, answer, choices?}` records.
    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json).map_err(|err| {
            log::warn!("Could not parse question data: {}", err);
            GameError::InvalidQuestionData
        })?;
        Ok(Self::new(questions))
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id)
    }
}
