pub mod parser;

use thiserror::Error;

use crate::lexer::TokenKind;

pub use self::parser::{parse, Parser};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Add to the byte at the data pointer (wraps at 256)
    Delta(i32),
    /// Move the data pointer
    Shift(i32),
    /// Set the byte at the data pointer to zero, i.e. `[-]`
    Clear,

    Output,
    Input,

    Loop(Block),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub instructions: Vec<Instruction>,
}

impl Block {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

pub type Program = Block;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected ']' with no matching '['")]
    UnmatchedJumpEnd { line: usize },

    #[error("Expected matching ']' for '[' opened on line {opened}")]
    UnmatchedJumpStart { line: usize, opened: usize },

    #[error("Unexpected token {kind:?}")]
    UnexpectedToken { line: usize, kind: TokenKind },
}

impl ParseError {
    /// The line the diagnostic should be reported on
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnmatchedJumpEnd { line }
            | ParseError::UnmatchedJumpStart { line, .. }
            | ParseError::UnexpectedToken { line, .. } => *line,
        }
    }
}
