//! Turns a tree back into source, mostly useful for checking what the optimizer did.

use std::fmt::{self, Display, Formatter, Write};

use crate::parser::{Block, Instruction, Program};

fn write_repeated(f: &mut Formatter<'_>, amount: i32, up: char, down: char) -> fmt::Result {
    let c = if amount < 0 { down } else { up };
    for _ in 0..amount.unsigned_abs() {
        f.write_char(c)?;
    }
    Ok(())
}

impl Display for Instruction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Delta(i) => write_repeated(f, *i, '+', '-'),
            Instruction::Shift(i) => write_repeated(f, *i, '>', '<'),
            Instruction::Clear => f.write_str("[+]"),
            Instruction::Output => f.write_char('.'),
            Instruction::Input => f.write_char(','),
            Instruction::Loop(body) => write!(f, "[{}]", body),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for instruction in self.instructions.iter() {
            write!(f, "{}", instruction)?;
        }
        Ok(())
    }
}

pub fn print_program(program: &Program) -> String {
    program.to_string()
}
