use crate::parser::{Block, Instruction};

/// If the program starts with `[` we can skip that whole block
pub fn comment_block(block: &mut Block) {
    // this block is the high level "program", every cell is 0 at the start so
    // a leading loop is never entered and a leading clear does nothing.
    // Neither moves the data pointer so the next one is dead as well.
    let dead = block
        .instructions
        .iter()
        .take_while(|i| matches!(i, Instruction::Loop(_) | Instruction::Clear))
        .count();
    block.instructions.drain(..dead);
}
