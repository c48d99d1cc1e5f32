use logos::Logos;

/// Defines the tokens recognized in one line of a bytecode script.
/// The `#[derive(Logos)]` macro from the `logos` crate generates the lexer implementation.
#[derive(Logos, Debug, Clone, PartialEq, Default)]
#[logos(skip r"[ \t\r\n\f]+")] // Ignore whitespace
pub enum Token {
    /// An optional-sign base-10 integer literal within `i64` range.
    /// The explicit priority settles exact-length ties against `Word`;
    /// longest-match already keeps mixed tokens like `12x` out of here.
    #[regex("[+-]?[0-9]+", |lex| lex.slice().parse::<i64>().ok(), priority = 3)]
    Int(i64),

    /// Any other run of non-whitespace characters: opcode names and
    /// malformed arguments alike.
    #[regex(r"[^ \t\r\n\f]+", |lex| lex.slice().to_string())]
    Word(String),

    #[default]
    Unknown,
}

/// Parses a raw argument token as an integer literal.
///
/// The text must lex to exactly one integer token: `12x`, `3.14`, an empty
/// string, or a literal outside the `i64` range all yield `None`.
pub fn parse_int_argument(raw: &str) -> Option<i64> {
    let mut lexer = Token::lexer(raw);
    match lexer.next() {
        Some(Ok(Token::Int(value))) => lexer.next().is_none().then_some(value),
        _ => None,
    }
}
