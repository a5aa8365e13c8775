use crate::parser::{Block, Instruction};

/// Rebuilds `block` merging neighbouring adds/shifts, dropping repeated clears and
/// anything that nets out to zero. Loop bodies are handled before their parent so
/// a loop that shrinks down to a single add still becomes a `Clear`.
pub fn peephole(block: &Block) -> Block {
    let mut instructions: Vec<Instruction> = Vec::with_capacity(block.len());

    for instruction in block.instructions.iter() {
        let instruction = match instruction {
            Instruction::Loop(body) => fold_loop(peephole(body)),
            other => other.clone(),
        };
        push_merged(&mut instructions, instruction);
    }

    Block { instructions }
}

fn fold_loop(body: Block) -> Instruction {
    match body.instructions.as_slice() {
        [Instruction::Delta(_)] => Instruction::Clear,
        _ => Instruction::Loop(body),
    }
}

fn push_merged(instructions: &mut Vec<Instruction>, instruction: Instruction) {
    let net_zero = match (instructions.last_mut(), &instruction) {
        (Some(Instruction::Delta(acc)), Instruction::Delta(i)) => {
            *acc = acc.wrapping_add(*i);
            *acc == 0
        }
        (Some(Instruction::Shift(acc)), Instruction::Shift(i)) => {
            *acc = acc.saturating_add(*i);
            *acc == 0
        }
        // the cell is already zero
        (Some(Instruction::Clear), Instruction::Clear) => false,
        (_, Instruction::Delta(0) | Instruction::Shift(0)) => false,
        _ => {
            instructions.push(instruction);
            false
        }
    };

    // the next sibling has to see the node before this one
    if net_zero {
        instructions.pop();
    }
}
