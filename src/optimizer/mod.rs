use std::collections::HashSet;

use clap::ValueEnum;
use log::trace;

use crate::parser::Program;

use self::{comment_block::comment_block, peephole::peephole};

pub mod comment_block;
pub mod peephole;

#[derive(ValueEnum, Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Optimizations {
    /// Merge adjacent adds/shifts and drop no-op instructions
    Peephole,
    /// Drop loops at the very start of the program, they can never run
    CommentBlock,
}

impl Optimizations {
    pub fn all() -> HashSet<Optimizations> {
        Optimizations::value_variants().iter().copied().collect()
    }
}

/// The default optimization pipeline
pub fn optimize(program: &Program) -> Program {
    peephole(program)
}

pub fn optimize_with(program: &Program, options: &HashSet<Optimizations>) -> Program {
    let mut optimized = if options.contains(&Optimizations::Peephole) {
        peephole(program)
    } else {
        program.clone()
    };
    trace!("peephole: {} -> {} instructions", program.len(), optimized.len());

    if options.contains(&Optimizations::CommentBlock) {
        comment_block(&mut optimized);
    }

    optimized
}
