use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid tile index")]
    InvalidIndex,
    #[error("No eligible questions available")]
    NoEligibleQuestions,
    #[error("Question data could not be parsed")]
    InvalidQuestionData,
}

pub type Result<T> = core::result::Result<T, GameError>;
