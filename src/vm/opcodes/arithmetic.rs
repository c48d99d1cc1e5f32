//! Arithmetic handlers: `add`, `sub`, `mul`, `div`, `mod`.
//!
//! All five share one shape: take the top two values off the stack and
//! push the folded result, shrinking the stack by one. The second value
//! from the top is always the left operand.

use crate::error::{Error, Result};
use crate::vm::Stack;

/// Pops the top pair, returning `(second-from-top, top)` in operand
/// order. The depth is validated before anything is removed, so a short
/// stack is left exactly as it was.
fn operands(stack: &mut Stack, opcode: &'static str, line: usize) -> Result<(i64, i64)> {
    if !stack.has_at_least(2) {
        return Err(Error::StackTooShort { line, opcode });
    }
    match (stack.pop(), stack.pop()) {
        (Some(top), Some(second)) => Ok((second, top)),
        _ => Err(Error::StackTooShort { line, opcode }),
    }
}

/// Handler for `add` - replaces the top two values with their sum.
pub fn op_add(stack: &mut Stack, line: usize) -> Result<()> {
    let (lhs, rhs) = operands(stack, "add", line)?;
    stack.push(lhs + rhs);
    Ok(())
}

/// Handler for `sub` - replaces the top two values with second-from-top
/// minus top.
pub fn op_sub(stack: &mut Stack, line: usize) -> Result<()> {
    let (lhs, rhs) = operands(stack, "sub", line)?;
    stack.push(lhs - rhs);
    Ok(())
}

/// Handler for `mul` - replaces the top two values with their product.
pub fn op_mul(stack: &mut Stack, line: usize) -> Result<()> {
    let (lhs, rhs) = operands(stack, "mul", line)?;
    stack.push(lhs * rhs);
    Ok(())
}

/// Handler for `div` - replaces the top two values with second-from-top
/// divided by top, truncating toward zero.
pub fn op_div(stack: &mut Stack, line: usize) -> Result<()> {
    let (lhs, rhs) = operands(stack, "div", line)?;
    if rhs == 0 {
        return Err(Error::DivisionByZero { line });
    }
    // i64::MIN / -1 exceeds i64::MAX; `/` would trap instead of wrapping.
    if lhs == i64::MIN && rhs == -1 {
        return Err(Error::DivisionOverflow { line });
    }
    stack.push(lhs / rhs);
    Ok(())
}

/// Handler for `mod` - replaces the top two values with second-from-top
/// modulo top.
pub fn op_mod(stack: &mut Stack, line: usize) -> Result<()> {
    let (lhs, rhs) = operands(stack, "mod", line)?;
    if rhs == 0 {
        return Err(Error::DivisionByZero { line });
    }
    // `%` shares the division-overflow trap on i64::MIN % -1.
    if lhs == i64::MIN && rhs == -1 {
        return Err(Error::DivisionOverflow { line });
    }
    stack.push(lhs % rhs);
    Ok(())
}
