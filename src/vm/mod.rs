//! The virtual machine: one integer stack plus line-by-line dispatch.

mod dispatch;
pub mod opcodes;
mod stack;

pub use stack::Stack;

use crate::error::Result;
use crate::scanner;
use std::io::Write;

/// The bytecode machine. Owns the operand stack for the lifetime of a
/// run; nothing outside the opcode handlers mutates it.
pub struct Vm {
    stack: Stack,
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}

impl Vm {
    pub fn new() -> Self {
        Vm {
            stack: Stack::new(),
        }
    }

    /// Read-only view of the operand stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// Execute one raw script line. Blank lines dispatch nothing but the
    /// caller has already charged them a line number.
    pub fn run_line<W: Write>(&mut self, line: &str, number: usize, out: &mut W) -> Result<()> {
        if let Some(instruction) = scanner::scan_line(line, number) {
            self.dispatch(
                &instruction.opcode,
                instruction.arg.as_deref(),
                instruction.line,
                out,
            )?;
        }
        Ok(())
    }

    /// Execute a whole script, counting lines from 1. Stops at the first
    /// error; the stack keeps whatever state the failing line left.
    pub fn run_source<W: Write>(&mut self, source: &str, out: &mut W) -> Result<()> {
        for (index, line) in source.lines().enumerate() {
            self.run_line(line, index + 1, out)?;
        }
        Ok(())
    }

    /// Drop any values left on the stack so the machine can be reused by
    /// a longer-lived host.
    pub fn reset(&mut self) {
        self.stack.reset();
    }
}
