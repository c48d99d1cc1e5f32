//! Stack manipulation handlers: `push`, `pop`, `swap`, `nop`.

use crate::error::{Error, Result};
use crate::token;
use crate::vm::Stack;

/// Handler for `push` - parses the raw argument and pushes it.
///
/// A missing argument, or anything that is not an optional-sign base-10
/// integer literal, is fatal.
pub fn op_push(stack: &mut Stack, arg: Option<&str>, line: usize) -> Result<()> {
    let value = arg
        .and_then(token::parse_int_argument)
        .ok_or(Error::PushUsage { line })?;
    stack.push(value);
    Ok(())
}

/// Handler for `pop` - removes the top value.
pub fn op_pop(stack: &mut Stack, line: usize) -> Result<()> {
    stack.pop().ok_or(Error::PopEmpty { line })?;
    Ok(())
}

/// Handler for `swap` - exchanges the top two values in place.
pub fn op_swap(stack: &mut Stack, line: usize) -> Result<()> {
    if !stack.has_at_least(2) {
        return Err(Error::StackTooShort {
            line,
            opcode: "swap",
        });
    }
    stack.swap_top();
    Ok(())
}

/// Handler for `nop` - touches neither the stack nor the output.
pub fn op_nop() -> Result<()> {
    Ok(())
}
