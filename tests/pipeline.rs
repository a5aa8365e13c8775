use std::io::{self, Cursor};

use bfront::{
    bytecode::to_bytecode,
    compile,
    interpreter::{AstInterpreter, ByteCodeInterpreter},
    optimize, parse, print_program, run, scan, EofBehavior, Error, Instruction, ParseError,
    Runtime, DEFAULT_TAPE_SIZE,
};

const HELLO_WORLD: &str = "
    Prints Hello World! with a trailing newline
    ++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.
";

fn run_to_vec(source: &str, input: &[u8]) -> Vec<u8> {
    let program = compile(source).unwrap();
    let mut out = vec![];
    run(&program, Cursor::new(input), &mut out).unwrap();
    out
}

#[test]
fn test_end_to_end_moves_value() {
    assert_eq!(run_to_vec("++>+++[-<+>]<.", &[]), vec![5]);
}

#[test]
fn test_hello_world() {
    assert_eq!(run_to_vec(HELLO_WORLD, &[]), b"Hello World!\n");
}

#[test]
fn test_hello_world_bytecode() {
    let program = compile(HELLO_WORLD).unwrap();
    let mut out = vec![];
    {
        let mut runtime = Runtime::new(DEFAULT_TAPE_SIZE, Box::new(io::empty()), Box::new(&mut out));
        ByteCodeInterpreter::new().run(&mut runtime, &to_bytecode(&program)).unwrap();
    }
    assert_eq!(out, b"Hello World!\n");
}

#[test]
fn test_reverse_input() {
    // read until eof (cell left at 0 by the default policy), then print backwards
    assert_eq!(run_to_vec(">,[>,]<[.<]", b"abc"), b"cba");
}

#[test]
fn test_eof_max_sentinel() {
    let program = compile(",.").unwrap();
    let mut out = vec![];
    {
        let mut runtime = Runtime::new(8, Box::new(io::empty()), Box::new(&mut out))
            .with_eof_behavior(EofBehavior::Max);
        AstInterpreter::new().interpret(&mut runtime, &program).unwrap();
    }
    assert_eq!(out, vec![255]);
}

#[test]
fn test_arithmetic_on_tape() {
    let cell = |source: &str| {
        let program = compile(source).unwrap();
        let mut runtime = Runtime::new(8, Box::new(io::empty()), Box::new(io::sink()));
        AstInterpreter::new().interpret(&mut runtime, &program).unwrap();
        runtime.current_value().unwrap()
    };
    assert_eq!(cell("+++"), 3);
    assert_eq!(cell(&"+".repeat(256)), 0);
    assert_eq!(cell("-"), 255);
}

#[test]
fn test_pointer_past_end_is_an_error() {
    let program = compile(">>>>+").unwrap();
    let mut runtime = Runtime::new(4, Box::new(io::empty()), Box::new(io::sink()));
    let err = AstInterpreter::new().interpret(&mut runtime, &program).unwrap_err();
    assert_eq!(err.to_string(), "Data pointer (4) out of bounds (max length 4)");
}

#[test]
fn test_parse_errors_abort() {
    assert_eq!(compile("+]"), Err(ParseError::UnmatchedJumpEnd { line: 1 }));
    let err = compile("\n[[\n]").unwrap_err();
    assert_eq!(err.line(), 3);

    let err: Error = err.into();
    assert!(err.to_string().starts_with("Line 3:"));
}

#[test]
fn test_even_delta_clear_assumption() {
    // as a literal loop `+[--]` would never stop (1, 255, 253, ... never hits 0)
    // but the loop is folded to a clear, so it terminates with the cell at 0
    let program = compile("+[--].").unwrap();
    assert_eq!(program.instructions, vec![Instruction::Delta(1), Instruction::Clear, Instruction::Output]);
    assert_eq!(run_to_vec("+[--].", &[]), vec![0]);
}

#[test]
fn test_comment_tolerance() {
    let plain = parse(&scan(HELLO_WORLD.trim())).unwrap();
    let noisy: String = HELLO_WORLD
        .chars()
        .flat_map(|c| [c, 'x', ' ', '\n'])
        .collect();
    assert_eq!(parse(&scan(&noisy)).unwrap(), plain);
}

#[test]
fn test_optimize_is_idempotent_and_round_trips() {
    for source in [HELLO_WORLD, "++>+++[-<+>]<.", ">,[>,]<[.<]", "+[-][-]><+-[>><<+]"] {
        let once = optimize(&parse(&scan(source)).unwrap());
        assert_eq!(optimize(&once), once);

        let reparsed = parse(&scan(&print_program(&once))).unwrap();
        assert_eq!(reparsed, once);
    }
}

#[test]
fn test_deep_nesting() {
    let depth = 1_000;
    let source = format!("+{}-{}.", "[".repeat(depth), "]".repeat(depth));
    let program = compile(&source).unwrap();

    let mut innermost = &program.instructions[1];
    for _ in 1..depth {
        match innermost {
            Instruction::Loop(body) => innermost = &body.instructions[0],
            other => panic!("expected a loop, got {:?}", other),
        }
    }
    assert_eq!(*innermost, Instruction::Clear);
    assert_eq!(run_to_vec(&source, &[]), vec![0]);
}

#[test]
fn test_prompt_visible_before_input() {
    // 63 is '?'
    assert_eq!(run_to_vec("+++++++[>+++++++++<-]>.,.", b"y"), b"?y");
}
