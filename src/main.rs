use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use moss::{
    interpreter::{environment::Environment, evaluator::core::eval},
    parse, repl,
};

/// moss is a small, dynamically typed, expression-oriented scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive shell.
    Repl,
    /// Execute a script file.
    Run {
        /// Path of the script to execute.
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Run { path }) => run_file(&path),
        Some(Command::Repl) | None => start_repl(),
    }
}

fn start_repl() {
    println!("moss {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = repl::start(&mut io::stdin().lock(), &mut io::stdout()) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run_file(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
                                             eprintln!("failed to read '{}': {e}", path.display());
                                             process::exit(1);
                                         });

    let program = match parse(&source) {
        Ok(program) => program,
        Err(errors) => {
            eprintln!("parser errors:");
            for error in &errors {
                eprintln!("\t{error}");
            }
            process::exit(1);
        },
    };

    let env = Environment::new().into_ref();

    match eval(&program, &env) {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(e) => {
            eprintln!("ERROR: {e}");
            process::exit(1);
        },
    }
}
