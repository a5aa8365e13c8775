pub mod ast_interpreter;
pub mod bytecode_interpreter;

use std::io::{ErrorKind, Read, Write};

use clap::ValueEnum;
use thiserror::Error;

pub use self::{ast_interpreter::AstInterpreter, bytecode_interpreter::ByteCodeInterpreter};

/// Number of cells on the tape unless told otherwise
pub const DEFAULT_TAPE_SIZE: usize = 30_000;

/// What `,` does to the current cell once the input stream is exhausted
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EofBehavior {
    /// Leave the cell as it was
    #[default]
    Unchanged,
    /// Set the cell to 0
    Zero,
    /// Set the cell to 255 (what a C `getchar` truncated to a byte gives you)
    Max,
}

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Data pointer ({pointer}) out of bounds (max length {len})")]
    PointerOutOfBounds { pointer: usize, len: usize },

    #[error("IO Error")]
    Io(#[from] std::io::Error),
}

pub struct Runtime<'io> {
    /// Pointer into the heap
    data_pointer: usize,

    /// Our statically allocated heap
    heap: Vec<u8>,

    eof_behavior: EofBehavior,

    in_stream: Box<dyn Read + 'io>,
    out_stream: Box<dyn Write + 'io>,
}

impl<'io> Runtime<'io> {
    pub fn new(
        heap_size: usize,
        in_stream: Box<dyn Read + 'io>,
        out_stream: Box<dyn Write + 'io>,
    ) -> Self {
        Self {
            data_pointer: 0,
            heap: vec![0; heap_size],
            eof_behavior: EofBehavior::default(),
            in_stream,
            out_stream,
        }
    }

    pub fn with_eof_behavior(mut self, eof_behavior: EofBehavior) -> Self {
        self.eof_behavior = eof_behavior;
        self
    }

    /// Zero the tape and move back to the first cell, streams are left as is
    pub fn reset(&mut self) {
        self.heap.fill(0);
        self.data_pointer = 0;
    }

    /// Read a single byte from the input stream into the current cell
    pub fn read(&mut self) -> Result<(), RuntimeError> {
        let index = self.checked_data_pointer()?;
        // anything already written (e.g. a prompt) has to be visible before we block
        self.out_stream.flush()?;
        let mut byte = [0u8; 1];
        loop {
            match self.in_stream.read(&mut byte) {
                Ok(0) => {
                    match self.eof_behavior {
                        EofBehavior::Unchanged => {}
                        EofBehavior::Zero => self.heap[index] = 0,
                        EofBehavior::Max => self.heap[index] = u8::MAX,
                    }
                    return Ok(());
                }
                Ok(_) => {
                    self.heap[index] = byte[0];
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Write the current cell to the output stream
    pub fn write(&mut self) -> Result<(), RuntimeError> {
        let index = self.checked_data_pointer()?;
        self.out_stream.write_all(&self.heap[index..=index])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), RuntimeError> {
        self.out_stream.flush()?;
        Ok(())
    }

    /// Adds `by` to the current cell, wrapping around at 256 either way
    pub fn add(&mut self, by: i32) -> Result<(), RuntimeError> {
        let index = self.checked_data_pointer()?;
        // truncating is the same as reducing mod 256
        self.heap[index] = self.heap[index].wrapping_add(by as u8);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), RuntimeError> {
        let index = self.checked_data_pointer()?;
        self.heap[index] = 0;
        Ok(())
    }

    pub fn shift(&mut self, by: isize) {
        self.data_pointer = self.data_pointer.wrapping_add_signed(by);
        // we don't check that the data pointer is valid on shifts
        // we only check that it's valid once it's read/written to
    }

    /// is the value at the data pointer zero?
    pub fn value_is_zero(&self) -> Result<bool, RuntimeError> {
        Ok(self.current_value()? == 0)
    }

    pub fn current_value(&self) -> Result<u8, RuntimeError> {
        Ok(self.heap[self.checked_data_pointer()?])
    }

    pub fn data_pointer(&self) -> usize {
        self.data_pointer
    }

    pub fn tape(&self) -> &[u8] {
        &self.heap
    }

    /// check if the data pointer is within bounds
    fn checked_data_pointer(&self) -> Result<usize, RuntimeError> {
        if self.data_pointer >= self.heap.len() {
            return Err(RuntimeError::PointerOutOfBounds {
                pointer: self.data_pointer,
                len: self.heap.len(),
            });
        }
        Ok(self.data_pointer)
    }
}
