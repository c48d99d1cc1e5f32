//! Opcode dispatching for the interpreter.
//!
//! Resolves an opcode name through the registry and executes the bound
//! handler against the machine's stack.

use super::{opcodes, Vm};
use crate::error::{Error, Result};
use crate::opcode::OpCode;
use std::io::Write;
use tracing::trace;

impl Vm {
    /// Resolve and execute a single instruction.
    ///
    /// `arg` is the raw argument token if the line carried one; only
    /// `push` looks at it. Any error returned here is fatal to the run.
    pub fn dispatch<W: Write>(
        &mut self,
        opcode: &str,
        arg: Option<&str>,
        line: usize,
        out: &mut W,
    ) -> Result<()> {
        let Some(instruction) = OpCode::from_name(opcode) else {
            return Err(Error::UnknownInstruction {
                line,
                opcode: opcode.to_string(),
            });
        };

        trace!(line, opcode = instruction.name(), "dispatch");

        match instruction {
            OpCode::Push => opcodes::stack_ops::op_push(&mut self.stack, arg, line),
            OpCode::Pall => opcodes::io::op_pall(&self.stack, out),
            OpCode::Pint => opcodes::io::op_pint(&self.stack, line, out),
            OpCode::Pop => opcodes::stack_ops::op_pop(&mut self.stack, line),
            OpCode::Swap => opcodes::stack_ops::op_swap(&mut self.stack, line),
            OpCode::Add => opcodes::arithmetic::op_add(&mut self.stack, line),
            OpCode::Sub => opcodes::arithmetic::op_sub(&mut self.stack, line),
            OpCode::Mul => opcodes::arithmetic::op_mul(&mut self.stack, line),
            OpCode::Div => opcodes::arithmetic::op_div(&mut self.stack, line),
            OpCode::Mod => opcodes::arithmetic::op_mod(&mut self.stack, line),
            OpCode::Nop => opcodes::stack_ops::op_nop(),
            OpCode::Pchar => opcodes::io::op_pchar(&self.stack, line, out),
            OpCode::Pstr => opcodes::io::op_pstr(&self.stack, out),
        }
    }
}
