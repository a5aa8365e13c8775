pub mod bytecode;

use crate::parser::Program;

pub use self::bytecode::{to_bytecode, ByteCodeGen};

/// A very simple bytecode set of instructions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteCode {
    /// Dereference the data pointer and add to the heap value (wrapping)
    Add(u8),

    /// Add the given value to the data pointer
    Shift(isize),

    /// Dereference the data pointer and zero the heap value
    Clear,

    /// Read a byte into the heap at the data pointer
    Read,

    /// Write the byte at the data pointer
    Write,

    /// Jump instructions forwards if zero
    JumpForwardsIfZero(usize),

    /// Jump instructions backwards if non-zero
    JumpBackwardsIfNonZero(usize),
}

/// Anything that lowers a program into some other form.
///
/// Whatever it produces has to behave exactly like the `AstInterpreter`:
/// byte wrapping, loops re-checking the cell after the whole body ran, same output.
pub trait CodeGen {
    type Output;

    fn generate(&mut self, program: &Program) -> Self::Output;
}
