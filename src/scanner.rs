//! Splits raw script lines into dispatchable instructions.

use crate::token::Token;
use logos::Logos;

/// One tokenized script line: an opcode name, an optional raw argument,
/// and the 1-based line number it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub opcode: String,
    pub arg: Option<String>,
    pub line: usize,
}

/// Splits one line of script text into an instruction.
///
/// The first token names the opcode and the second, when present, is kept
/// as the raw argument text; anything after that is ignored. Returns
/// `None` when the line holds no tokens at all; blank lines still consume
/// a line number at the caller.
pub fn scan_line(line: &str, number: usize) -> Option<Instruction> {
    let mut lexer = Token::lexer(line);

    let _ = lexer.next()?;
    let opcode = lexer.slice().to_string();

    let arg = lexer.next().map(|_| lexer.slice().to_string());

    Some(Instruction {
        opcode,
        arg,
        line: number,
    })
}
