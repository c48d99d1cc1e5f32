/// Represents the instructions the interpreter can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// Pushes its integer argument onto the stack.
    Push,
    /// Prints every value on the stack, top to bottom, one per line.
    Pall,
    /// Prints the value at the top of the stack.
    Pint,
    /// Removes the top value from the stack.
    Pop,
    /// Exchanges the top two values of the stack.
    Swap,
    /// Replaces the top two values with their sum.
    Add,
    /// Replaces the top two values with second-from-top minus top.
    Sub,
    /// Replaces the top two values with their product.
    Mul,
    /// Replaces the top two values with second-from-top divided by top.
    Div,
    /// Replaces the top two values with second-from-top modulo top.
    Mod,
    /// Does nothing.
    Nop,
    /// Prints the top value as an ASCII character.
    Pchar,
    /// Prints the stack as an ASCII string, top to bottom.
    Pstr,
}

/// The instruction registry: every dispatchable name and its opcode.
/// Lookup is by exact, case-sensitive match.
pub const NAMES: &[(&str, OpCode)] = &[
    ("push", OpCode::Push),
    ("pall", OpCode::Pall),
    ("pint", OpCode::Pint),
    ("pop", OpCode::Pop),
    ("swap", OpCode::Swap),
    ("add", OpCode::Add),
    ("sub", OpCode::Sub),
    ("mul", OpCode::Mul),
    ("div", OpCode::Div),
    ("mod", OpCode::Mod),
    ("nop", OpCode::Nop),
    ("pchar", OpCode::Pchar),
    ("pstr", OpCode::Pstr),
];

impl OpCode {
    /// Looks up an opcode by its textual name.
    pub fn from_name(name: &str) -> Option<OpCode> {
        NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, opcode)| opcode)
    }

    /// The textual name this opcode is dispatched under.
    pub fn name(self) -> &'static str {
        match self {
            OpCode::Push => "push",
            OpCode::Pall => "pall",
            OpCode::Pint => "pint",
            OpCode::Pop => "pop",
            OpCode::Swap => "swap",
            OpCode::Add => "add",
            OpCode::Sub => "sub",
            OpCode::Mul => "mul",
            OpCode::Div => "div",
            OpCode::Mod => "mod",
            OpCode::Nop => "nop",
            OpCode::Pchar => "pchar",
            OpCode::Pstr => "pstr",
        }
    }
}
