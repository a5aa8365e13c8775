use crate::bytecode::ByteCode;

use super::{Runtime, RuntimeError};

#[derive(Debug, Default)]
pub struct ByteCodeInterpreter {}

impl ByteCodeInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn run(&mut self, runtime: &mut Runtime, instructions: &[ByteCode]) -> Result<(), RuntimeError> {
        let mut pc = 0;
        while pc < instructions.len() {
            match instructions[pc] {
                ByteCode::Add(i) => runtime.add(i as i32)?,
                ByteCode::Shift(i) => runtime.shift(i),
                ByteCode::Clear => runtime.clear()?,
                ByteCode::Read => runtime.read()?,
                ByteCode::Write => runtime.write()?,
                ByteCode::JumpForwardsIfZero(offset) => {
                    if runtime.value_is_zero()? {
                        pc = pc.wrapping_add(offset);
                        // don't do the ++
                        continue;
                    }
                }
                ByteCode::JumpBackwardsIfNonZero(offset) => {
                    if !runtime.value_is_zero()? {
                        pc = pc.wrapping_sub(offset);
                        // don't do the ++
                        continue;
                    }
                }
            }
            pc += 1;
        }
        runtime.flush()
    }
}
