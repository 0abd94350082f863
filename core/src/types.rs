/// Signed monetary value, in tomans.
pub type Amount = i64;

/// Position of a tile on the board, in reading order starting at zero.
pub type TileIndex = usize;

/// Position of a question inside the eligible subset of a [`crate::QuestionBank`].
pub type QuestionId = usize;
