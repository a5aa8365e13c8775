use std::{
    collections::HashSet,
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use bfront::{
    bytecode::to_bytecode,
    interpreter::{AstInterpreter, ByteCodeInterpreter, EofBehavior, Runtime},
    lexer::Lexer,
    optimizer::{optimize_with, Optimizations},
    parser::parse,
    printer::print_program,
    Error,
};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

/// Brainf**k front end: scanner, folding parser, optimizer and interpreter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to operate on
    #[arg()]
    file: PathBuf,

    /// What to do with the program, defaults to `run`
    #[arg(value_enum)]
    commands: Vec<Commands>,

    #[arg(short, long, value_enum)]
    optimizations: Vec<Optimizations>,

    #[arg(short, long)]
    all_optimizations: bool,

    /// Skip the optimizer entirely (parser folding still happens)
    #[arg(short, long, conflicts_with_all = ["optimizations", "all_optimizations"])]
    no_optimize: bool,

    #[arg(short, long, default_value_t = bfront::DEFAULT_TAPE_SIZE)]
    tape_size: usize,

    /// What `,` does once input runs out
    #[arg(short, long, value_enum, default_value_t = EofBehavior::Unchanged)]
    eof: EofBehavior,

    /// Increase logging, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Hash, PartialEq, Eq)]
enum Commands {
    /// Output the tokens
    Tokens,
    /// Output the ast as parsed
    Ast,
    /// Output the optimized ast
    OptimizedAst,
    /// Output the optimized program as source
    Print,
    /// Output bytecode
    Bytecode,

    /// Run the optimized ast
    Run,
    /// Run the bytecode interpreter
    RunBytecode,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG wins over -v when it's set
    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("{}: failed to set up logging: {}", "Warning".yellow(), e);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut commands: HashSet<Commands> = HashSet::from_iter(args.commands);
    if commands.is_empty() {
        commands.insert(Commands::Run);
    }

    let optimizations: HashSet<Optimizations> = if args.no_optimize {
        HashSet::new()
    } else if args.all_optimizations {
        Optimizations::all()
    } else if args.optimizations.is_empty() {
        HashSet::from([Optimizations::Peephole])
    } else {
        HashSet::from_iter(args.optimizations)
    };

    info!("Running {}", args.file.display());
    let text = std::fs::read_to_string(&args.file)?;

    let mut now = Instant::now();
    let tokens = Lexer::new(&text).collect_tokens();
    info!("Finished lexing {} tokens in {:.2?}", tokens.len(), now.elapsed());

    if commands.contains(&Commands::Tokens) {
        println!("{}", "Tokens".blue());
        for token in tokens.iter() {
            println!("{:>5} {}", token.line, token.kind.symbol().unwrap_or('$'));
        }
    }

    now = Instant::now();
    let program = parse(&tokens)?;
    info!("Finished parsing in {:.2?}", now.elapsed());

    if commands.contains(&Commands::Ast) {
        println!("{}", "Ast".blue());
        println!("{:#?}", program);
    }

    now = Instant::now();
    let optimized_program = optimize_with(&program, &optimizations);
    info!("Finished optimizations {:?} in {:.2?}", optimizations, now.elapsed());

    if commands.contains(&Commands::OptimizedAst) {
        println!("{}", "Optimized ast".blue());
        println!("{:#?}", optimized_program);
    }

    if commands.contains(&Commands::Print) {
        println!("{}", print_program(&optimized_program));
    }

    let bytecode = to_bytecode(&optimized_program);
    if commands.contains(&Commands::Bytecode) {
        println!("{}", "Bytecode".blue());
        for (pc, instruction) in bytecode.iter().enumerate() {
            println!("{:>6} {:?}", pc, instruction);
        }
    }

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let mut runtime = Runtime::new(args.tape_size, Box::new(stdin), Box::new(stdout))
        .with_eof_behavior(args.eof);

    if commands.contains(&Commands::Run) {
        now = Instant::now();
        AstInterpreter::new().interpret(&mut runtime, &optimized_program)?;
        runtime.reset();
        info!("Finished ast-interpreter in {:.2?}", now.elapsed());
    }

    if commands.contains(&Commands::RunBytecode) {
        now = Instant::now();
        ByteCodeInterpreter::new().run(&mut runtime, &bytecode)?;
        runtime.reset();
        info!("Finished bytecode-interpreter in {:.2?}", now.elapsed());
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}

/// Parse errors already read `Line N: message`, everything else gets an `Error:` prefix
fn report(error: &Error) -> String {
    match error {
        Error::Parse(_) => error.to_string().red().to_string(),
        _ => format!("{}: {}", "Error".red(), error),
    }
}
