use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, ValueEnum};
use env_logger::Builder;
use log::{debug, info};

use jslox::ast_printer::AstPrinter;
use jslox::diagnostics::Diagnostics;
use jslox::parser::Parser;
use jslox::scanner;
use jslox::session::{Outcome, Session};
use jslox::token::Token;

const EXIT_USAGE: i32 = 64;
const EXIT_COMPILE_ERROR: i32 = 65;
const EXIT_RUNTIME_ERROR: i32 = 70;

#[derive(ClapParser, Debug)]
#[command(version, about = "Tree-walking interpreter for a small JavaScript-like language", long_about = None)]
pub struct Cli {
    /// Script to run.  Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Print an intermediate form of the script instead of running it
    #[arg(long, value_enum, requires = "script")]
    emit: Option<Emit>,

    /// Enable logging to jslox.log
    #[arg(long)]
    log: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Emit {
    /// One token per line
    Tokens,
    /// The token stream as a JSON array
    Json,
    /// The parenthesised syntax tree
    Ast,
}

/// Reads the contents of a file into a Vec<u8>
fn read_file(filename: &Path) -> Result<Vec<u8>> {
    info!("Reading file: {:?}", filename);
    let file = File::open(filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    let bytes = reader
        .read_to_end(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

fn init_logger() -> Result<()> {
    let log_file = File::create("jslox.log").context("Failed to create jslox.log")?;

    Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            // Strip 'jslox::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("jslox::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    info!("Logger initialized, writing to jslox.log");
    Ok(())
}

fn run_file(path: &Path) -> Result<()> {
    let buf = read_file(path)?;
    let source = String::from_utf8_lossy(&buf);

    let mut session = Session::new();

    match session.run(&source) {
        Outcome::Completed => {
            info!("Program executed successfully");
            Ok(())
        }
        Outcome::CompileError => {
            debug!("Compile errors, exiting with code {}", EXIT_COMPILE_ERROR);
            process::exit(EXIT_COMPILE_ERROR);
        }
        Outcome::RuntimeError => {
            debug!("Runtime error, exiting with code {}", EXIT_RUNTIME_ERROR);
            process::exit(EXIT_RUNTIME_ERROR);
        }
    }
}

fn run_prompt() -> Result<()> {
    info!("Starting interactive prompt");

    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        if session.run(&line) == Outcome::CompileError {
            process::exit(EXIT_COMPILE_ERROR);
        }
    }

    info!("Prompt closed");
    Ok(())
}

fn emit(path: &Path, form: Emit) -> Result<()> {
    let buf = read_file(path)?;
    let source = String::from_utf8_lossy(&buf);
    let mut diagnostics = Diagnostics::stderr();

    match form {
        Emit::Tokens => {
            for token in scanner::scan(&source, &mut diagnostics) {
                println!("{}", token);
            }
        }

        Emit::Json => {
            let tokens: Vec<Token> = scanner::scan(&source, &mut diagnostics);
            let json =
                serde_json::to_string_pretty(&tokens).context("Failed to serialize tokens")?;
            println!("{}", json);
        }

        Emit::Ast => {
            let tokens: Vec<Token> = scanner::scan(&source, &mut diagnostics);
            let statements = Parser::new(&tokens, &mut diagnostics).parse();
            println!("{}", AstPrinter::print_program(&statements));
        }
    }

    if diagnostics.had_compile_error() {
        process::exit(EXIT_COMPILE_ERROR);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Cli = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("{}", e);
            eprintln!("Usage: jslox [script]");
            process::exit(EXIT_USAGE);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    if args.log {
        init_logger()?;
    } else {
        Builder::new().filter_level(log::LevelFilter::Off).init();
    }

    info!("CLI arguments: {:?}", args);

    match (&args.script, args.emit) {
        (Some(path), Some(form)) => emit(path, form),
        (Some(path), None) => run_file(path),
        (None, _) => run_prompt(),
    }
}
