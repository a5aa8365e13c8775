use std::iter::Peekable;

use log::debug;

use crate::lexer::{Token, TokenKind};

use super::{Block, Instruction, ParseError, Program};

pub struct Parser<'a> {
    tokens: Peekable<std::slice::Iter<'a, Token>>,
    /// Line of the last token consumed, used if the stream is missing its `Eof`
    last_line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens: tokens.iter().peekable(),
            last_line: 1,
        }
    }

    fn advance(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) => {
                self.last_line = token.line;
                *token
            }
            None => Token::new(TokenKind::Eof, self.last_line),
        }
    }

    /// Parses instructions until the matching `]` (when `opened` is the line of a `[`)
    /// or until the end of input for the top level block.
    fn parse_block(&mut self, opened: Option<usize>) -> Result<Block, ParseError> {
        let mut instructions = vec![];

        loop {
            let token = self.advance();
            match (token.kind, opened) {
                // the loop has ended so we can break
                (TokenKind::JumpEnd, Some(_)) => break,
                (TokenKind::JumpEnd, None) => {
                    return Err(ParseError::UnmatchedJumpEnd { line: token.line })
                }
                (TokenKind::Eof, None) => break,
                (TokenKind::Eof, Some(opened)) => {
                    return Err(ParseError::UnmatchedJumpStart {
                        line: token.line,
                        opened,
                    })
                }
                _ => {
                    let instruction = self.parse_instruction(token)?;
                    push_fused(&mut instructions, instruction);
                }
            }
        }

        Ok(Block { instructions })
    }

    fn parse_instruction(&mut self, token: Token) -> Result<Instruction, ParseError> {
        Ok(match token.kind {
            TokenKind::ShiftRight => Instruction::Shift(1),
            TokenKind::ShiftLeft => Instruction::Shift(-1),
            TokenKind::Increment => Instruction::Delta(1),
            TokenKind::Decrement => Instruction::Delta(-1),
            TokenKind::Write => Instruction::Output,
            TokenKind::Read => Instruction::Input,
            TokenKind::JumpStart => {
                let body = self.parse_block(Some(token.line))?;
                // `[-]`, `[+]`, `[---]` all just zero the cell.
                // NOTE: this assumes the loop terminates, i.e. `[--]` on an odd cell
                // would spin forever but is still folded.
                match body.instructions.as_slice() {
                    [Instruction::Delta(_)] => Instruction::Clear,
                    _ => Instruction::Loop(body),
                }
            }
            kind @ (TokenKind::JumpEnd | TokenKind::Eof) => {
                return Err(ParseError::UnexpectedToken {
                    line: token.line,
                    kind,
                })
            }
        })
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.parse_block(None)
    }
}

/// Appends `instruction`, folding it into the previous sibling if both are `Delta` or both are `Shift`
fn push_fused(instructions: &mut Vec<Instruction>, instruction: Instruction) {
    match (instructions.last_mut(), &instruction) {
        (Some(Instruction::Delta(acc)), Instruction::Delta(i)) => *acc = acc.wrapping_add(*i),
        (Some(Instruction::Shift(acc)), Instruction::Shift(i)) => *acc = acc.saturating_add(*i),
        _ => instructions.push(instruction),
    }
}

pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    let program = Parser::new(tokens).parse_program()?;
    debug!("parsed {} top level instructions", program.len());
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use rstest::rstest;
    use Instruction::*;

    fn parse_str(text: &str) -> Result<Program, ParseError> {
        parse(&scan(text))
    }

    #[rstest]
    #[case("", 0)]
    #[case("[]", 1)]
    #[case("[[]]", 1)]
    #[case("+[>]-", 3)]
    fn test_balanced_brackets(#[case] text: &str, #[case] count: usize) {
        assert_eq!(parse_str(text).map(|p| p.len()), Ok(count));
    }

    #[rstest]
    #[case("]", ParseError::UnmatchedJumpEnd { line: 1 })]
    #[case("[[", ParseError::UnmatchedJumpStart { line: 1, opened: 1 })]
    #[case("+\n+]", ParseError::UnmatchedJumpEnd { line: 2 })]
    #[case("[\n\n+", ParseError::UnmatchedJumpStart { line: 3, opened: 1 })]
    #[case("[]]", ParseError::UnmatchedJumpEnd { line: 1 })]
    fn test_unbalanced_brackets(#[case] text: &str, #[case] error: ParseError) {
        let err = parse_str(text).unwrap_err();
        assert_eq!(err.line(), error.line());
        assert_eq!(err, error);
    }

    #[test]
    fn test_single_commands() {
        assert_eq!(
            parse_str(">.<,").unwrap().instructions,
            vec![Shift(1), Output, Shift(-1), Input]
        );
    }

    #[test]
    fn test_runs_are_fused() {
        assert_eq!(
            parse_str("+++>>--<").unwrap().instructions,
            vec![Delta(3), Shift(2), Delta(-2), Shift(-1)]
        );
    }

    #[test]
    fn test_mixed_direction_fuses_to_zero() {
        // dropping the zero is the optimizer's job
        assert_eq!(parse_str("+-").unwrap().instructions, vec![Delta(0)]);
        assert_eq!(parse_str("><<").unwrap().instructions, vec![Shift(-1)]);
    }

    #[test]
    fn test_fusion_stops_at_other_instructions() {
        assert_eq!(
            parse_str("+.+").unwrap().instructions,
            vec![Delta(1), Output, Delta(1)]
        );
    }

    #[rstest]
    #[case("[-]")]
    #[case("[+]")]
    #[case("[---]")]
    #[case("[+-+]")]
    #[case("[ - comment ]")]
    fn test_single_delta_loop_is_clear(#[case] text: &str) {
        assert_eq!(parse_str(text).unwrap().instructions, vec![Clear]);
    }

    #[test]
    fn test_clear_folding_at_depth() {
        assert_eq!(
            parse_str("[>[-]<[[+]]]").unwrap().instructions,
            vec![Loop(Block::new(vec![
                Shift(1),
                Clear,
                Shift(-1),
                Loop(Block::new(vec![Clear])),
            ]))]
        );
    }

    #[test]
    fn test_even_delta_loop_still_folds() {
        // `[--]` never terminates on an odd cell, folding assumes it always does
        assert_eq!(parse_str("[--]").unwrap().instructions, vec![Clear]);
    }

    #[test]
    fn test_loop_with_more_than_a_delta_stays_a_loop() {
        assert_eq!(
            parse_str("[->+<]").unwrap().instructions,
            vec![Loop(Block::new(vec![Delta(-1), Shift(1), Delta(1), Shift(-1)]))]
        );
    }

    #[test]
    fn test_comments_do_not_change_tree() {
        let plain = parse_str("++>+++[-<+>]<.").unwrap();
        let commented = parse_str("add two ++ then > move\n+++ [ loop - < + > ] < . done").unwrap();
        assert_eq!(plain, commented);
    }

    #[test]
    fn test_missing_eof_token() {
        let tokens = vec![Token::new(TokenKind::Increment, 3)];
        assert_eq!(parse(&tokens).unwrap().instructions, vec![Delta(1)]);

        let tokens = vec![Token::new(TokenKind::JumpStart, 2)];
        assert_eq!(
            parse(&tokens),
            Err(ParseError::UnmatchedJumpStart { line: 2, opened: 2 })
        );
    }
}
