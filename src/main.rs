use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use graphene::{
    errors::errors::{Diagnostic, ErrorTip},
    lexer::lexer::tokenize,
    parse_source,
    parser::parser::parse,
};
use tracing_subscriber::EnvFilter;

/// Front end for the graphene language.
#[derive(Parser, Debug)]
#[command(name = "graphene", author, version, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lex and parse a source file
    Build {
        /// Path to the source file
        path: PathBuf,

        /// File to write output to instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What to print for a successful parse
        #[arg(long, value_enum, default_value_t = Emit::Ast)]
        emit: Emit,
    },
    /// Parse source lines read from stdin, one at a time
    Repl,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// One S-expression per top-level expression
    Ast,
    /// One token per line
    Tokens,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so emitted output stays clean; RUST_LOG=debug shows pass summaries.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match args.command.unwrap_or(Command::Repl) {
        Command::Build { path, output, emit } => build(path, output, emit),
        Command::Repl => repl().map(|_| ExitCode::SUCCESS),
    }
}

fn build(path: PathBuf, output: Option<PathBuf>, emit: Emit) -> Result<ExitCode> {
    let start = Instant::now();

    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file = Rc::new(path.display().to_string());

    let (tokens, lines) = match tokenize(&source, Rc::clone(&file)) {
        Ok(lexed) => lexed,
        Err(errors) => {
            display_errors(&errors);
            return Ok(ExitCode::FAILURE);
        }
    };
    tracing::debug!("tokenized in {:?}", start.elapsed());

    let rendered: Vec<String> = match emit {
        Emit::Tokens => tokens
            .iter()
            .map(|token| format!("{} {}", token.position(), token))
            .collect(),
        Emit::Ast => match parse(&tokens, &lines, file) {
            Ok(exprs) => exprs.iter().map(|expr| expr.to_string()).collect(),
            Err(errors) => {
                display_errors(&errors);
                return Ok(ExitCode::FAILURE);
            }
        },
    };
    tracing::debug!("finished in {:?}", start.elapsed());

    let mut text = rendered.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }

    match output {
        Some(output) => fs::write(&output, text)
            .with_context(|| format!("failed to write {}", output.display()))?,
        None => print!("{}", text),
    }

    Ok(ExitCode::SUCCESS)
}

fn repl() -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        match parse_source(&line, None) {
            Ok(exprs) => {
                for expr in exprs {
                    println!("{}", expr);
                }
            }
            Err(errors) => display_errors(&errors),
        }

        print!("> ");
        stdout.flush()?;
    }

    println!();
    Ok(())
}

fn display_errors(errors: &[Diagnostic]) {
    for (index, error) in errors.iter().enumerate() {
        if index > 0 {
            eprintln!();
        }

        eprint!("{}", error);
        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            eprintln!("  = help: {}", tip);
        }
    }
}
