//! Front end for the eight command byte-tape language: scanning, parsing with
//! inline folding, peephole optimization and a reference tree-walking interpreter.

pub mod bytecode;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod optimizer;
pub mod parser;
pub mod printer;

pub use crate::{
    error::Error,
    interpreter::{ast_interpreter::run, EofBehavior, Runtime, RuntimeError, DEFAULT_TAPE_SIZE},
    lexer::scan,
    optimizer::{optimize, optimize_with, Optimizations},
    parser::{parse, Block, Instruction, ParseError, Program},
    printer::print_program,
};

/// scan -> parse -> optimize
pub fn compile(source: &str) -> Result<Program, ParseError> {
    let program = parse(&scan(source))?;
    Ok(optimize(&program))
}
