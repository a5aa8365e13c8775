use log::debug;

use super::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /** Human Readable position in file */
    pub cur_line: usize,

    chars: std::str::Chars<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(chars: &'a str) -> Lexer<'a> {
        Lexer {
            cur_line: 1,
            chars: chars.chars(),
        }
    }

    fn consume_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.cur_line += 1;
        }
        Some(c)
    }

    /// Returns the next command token, once the input runs out this keeps returning `Eof`
    pub fn next_token(&mut self) -> Token {
        while let Some(c) = self.consume_char() {
            // anything that isn't a command is a comment and just gets dropped
            if let Some(kind) = TokenKind::from_char(c) {
                return Token::new(kind, self.cur_line);
            }
        }

        Token::new(TokenKind::Eof, self.cur_line)
    }

    /// Scans the rest of the input, the result always ends in exactly one `Eof`
    pub fn collect_tokens(&mut self) -> Vec<Token> {
        let mut v = vec![];
        loop {
            let token = self.next_token();
            v.push(token);
            if token.kind == TokenKind::Eof {
                break v;
            }
        }
    }
}

pub fn scan(text: &str) -> Vec<Token> {
    let tokens = Lexer::new(text).collect_tokens();
    debug!("scanned {} tokens", tokens.len());
    tokens
}
