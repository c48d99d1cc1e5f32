//! Fatal errors raised while executing a bytecode script.
//!
//! Every variant ends the run: handlers hand the error upward untouched,
//! and the driver prints the rendered message to stderr before exiting
//! with a non-zero status. The `Display` text is the complete diagnostic,
//! line number included.

use thiserror::Error;

/// Interpreter result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that halt execution of a script.
#[derive(Debug, Error)]
pub enum Error {
    /// The opcode name is not in the instruction registry.
    #[error("L{line}: unknown instruction {opcode}")]
    UnknownInstruction { line: usize, opcode: String },

    /// `push` was given a missing or non-integer argument.
    #[error("L{line}: usage: push integer")]
    PushUsage { line: usize },

    /// `pint` needs at least one value on the stack.
    #[error("L{line}: can't pint, stack empty")]
    PintEmpty { line: usize },

    /// `pop` needs at least one value on the stack.
    #[error("L{line}: can't pop an empty stack")]
    PopEmpty { line: usize },

    /// `pchar` needs at least one value on the stack.
    #[error("L{line}: can't pchar, stack empty")]
    PcharEmpty { line: usize },

    /// A two-operand instruction found fewer than two values.
    #[error("L{line}: can't {opcode}, stack too short")]
    StackTooShort { line: usize, opcode: &'static str },

    /// `div` or `mod` was asked to divide by zero.
    #[error("L{line}: division by zero")]
    DivisionByZero { line: usize },

    /// `div` or `mod` result does not fit in an `i64`.
    #[error("L{line}: division overflow")]
    DivisionOverflow { line: usize },

    /// `pchar` found a value outside the ASCII range.
    #[error("L{line}: can't pchar, value out of range")]
    CharOutOfRange { line: usize },

    /// The output stream rejected a write.
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}
