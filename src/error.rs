use thiserror::Error;

use crate::{interpreter::RuntimeError, parser::ParseError};

/// Everything that can stop the pipeline, one variant per stage
#[derive(Error, Debug)]
pub enum Error {
    #[error("Line {}: {}", line_of(.0), .0)]
    Parse(#[from] ParseError),

    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    #[error("IO Error: {0}")]
    FileIO(#[from] std::io::Error),
}

fn line_of(error: &ParseError) -> usize {
    error.line()
}
