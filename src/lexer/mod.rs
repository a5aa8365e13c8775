pub mod lexer;

pub use self::lexer::{scan, Lexer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // `>`: Increment the `data pointer` by one
    ShiftRight,
    // `<`: Decrement the `data pointer` by one
    ShiftLeft,

    // `+`: Increment the byte at the `data pointer` by one
    Increment,
    // `-`: Decrement the byte at the `data pointer` by one
    Decrement,

    // `.`: Write the byte at the `data pointer` to the `output device`
    Write,
    // `,`: Read the next byte from the `input device` and write it to the `data pointer`
    Read,

    // `[`: If the byte at the `data pointer` is zero, then jump the `instruction pointer` forward to the instruction after the matching `]`
    JumpStart,
    // `]`: If the byte at the `data pointer` is non-zero then jump the `instruction pointer` back to the instruction after the matching `[`
    JumpEnd,

    // End of file: no more tokens left
    Eof,
}

impl TokenKind {
    /// Map a source character onto its command, everything else is a comment
    pub fn from_char(c: char) -> Option<TokenKind> {
        match c {
            '>' => Some(TokenKind::ShiftRight),
            '<' => Some(TokenKind::ShiftLeft),
            '+' => Some(TokenKind::Increment),
            '-' => Some(TokenKind::Decrement),
            '.' => Some(TokenKind::Write),
            ',' => Some(TokenKind::Read),
            '[' => Some(TokenKind::JumpStart),
            ']' => Some(TokenKind::JumpEnd),
            _ => None,
        }
    }

    /// The command character for this token, `None` for [`TokenKind::Eof`]
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenKind::ShiftRight => Some('>'),
            TokenKind::ShiftLeft => Some('<'),
            TokenKind::Increment => Some('+'),
            TokenKind::Decrement => Some('-'),
            TokenKind::Write => Some('.'),
            TokenKind::Read => Some(','),
            TokenKind::JumpStart => Some('['),
            TokenKind::JumpEnd => Some(']'),
            TokenKind::Eof => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line the token was found on
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }
}
