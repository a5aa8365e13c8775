use log::debug;

use crate::parser::{Block, Instruction, Program};

use super::{ByteCode, CodeGen};

#[derive(Debug, Default)]
pub struct ByteCodeGen {}

impl CodeGen for ByteCodeGen {
    type Output = Vec<ByteCode>;

    fn generate(&mut self, program: &Program) -> Vec<ByteCode> {
        let mut instructions = vec![];
        bytecode_write_block(&mut instructions, program);
        debug!("lowered to {} bytecode instructions", instructions.len());
        instructions
    }
}

pub fn to_bytecode(program: &Program) -> Vec<ByteCode> {
    ByteCodeGen::default().generate(program)
}

fn bytecode_write_block(instructions: &mut Vec<ByteCode>, block: &Block) {
    for instruction in block.instructions.iter() {
        match instruction {
            Instruction::Delta(i) => {
                // only the value mod 256 is observable
                let by = i.rem_euclid(256) as u8;
                if by != 0 {
                    instructions.push(ByteCode::Add(by));
                }
            }
            Instruction::Shift(i) => {
                if *i != 0 {
                    instructions.push(ByteCode::Shift(*i as isize));
                }
            }
            Instruction::Clear => instructions.push(ByteCode::Clear),
            Instruction::Output => instructions.push(ByteCode::Write),
            Instruction::Input => instructions.push(ByteCode::Read),
            Instruction::Loop(inner_block) => {
                // placeholder, patched once we know how long the body is
                let start = instructions.len();
                instructions.push(ByteCode::JumpForwardsIfZero(0));
                bytecode_write_block(instructions, inner_block);
                let offset = instructions.len() - start - 1;

                // i.e. if we have just [>] then it'll be JumpForwardsIfZero(3) & JumpBackwardsIfNonZero(1)
                // we want to jump past the last instruction (that we've not added yet)
                instructions[start] = ByteCode::JumpForwardsIfZero(offset + 2);
                // we want to jump to the first instruction of the body
                instructions.push(ByteCode::JumpBackwardsIfNonZero(offset));
            }
        }
    }
}
