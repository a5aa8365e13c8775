use std::io::{Read, Write};

use crate::parser::{Block, Instruction, Program};

use super::{Runtime, RuntimeError, DEFAULT_TAPE_SIZE};

/// Walks the tree directly, this is the reference every other backend has to agree with
#[derive(Debug, Default)]
pub struct AstInterpreter {}

impl AstInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn interpret(&mut self, runtime: &mut Runtime, program: &Program) -> Result<(), RuntimeError> {
        self.interpret_block(runtime, program)?;
        runtime.flush()
    }

    fn interpret_block(&mut self, runtime: &mut Runtime, block: &Block) -> Result<(), RuntimeError> {
        // written this way since the upper-most block (program) doesn't repeat
        for instruction in block.instructions.iter() {
            match instruction {
                Instruction::Delta(i) => runtime.add(*i)?,
                Instruction::Shift(i) => runtime.shift(*i as isize),
                Instruction::Clear => runtime.clear()?,
                Instruction::Output => runtime.write()?,
                Instruction::Input => runtime.read()?,
                Instruction::Loop(body) => {
                    while !runtime.value_is_zero()? {
                        self.interpret_block(runtime, body)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Run `program` on a fresh default sized tape
pub fn run<R: Read, W: Write>(program: &Program, input: R, output: W) -> Result<(), RuntimeError> {
    let mut runtime = Runtime::new(DEFAULT_TAPE_SIZE, Box::new(input), Box::new(output));
    AstInterpreter::new().interpret(&mut runtime, program)
}
