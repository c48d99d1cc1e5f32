//! Command-line drivers: argument handling, file and stream execution.
//!
//! All program output goes to stdout; every diagnostic and all logging
//! goes to stderr. Exit codes follow the sysexits convention.

use crate::vm::Vm;
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub fn run_main() -> Result<(), i32> {
    init_logging();
    let args: Vec<String> = env::args().skip(1).collect();
    run_main_with_args(&args)
}

pub fn run_main_with_args(args: &[String]) -> Result<(), i32> {
    handle_args(args)
}

pub fn handle_args(args: &[String]) -> Result<(), i32> {
    handle_args_with_stdin(args, run_stdin)
}

pub fn handle_args_with_stdin<F>(args: &[String], stdin_driver: F) -> Result<(), i32>
where
    F: FnOnce() -> Result<(), i32>,
{
    match args.len() {
        0 => stdin_driver(),
        1 => run_file(&args[0]),
        _ => {
            eprintln!("USAGE: monty file");
            Err(64) // Standard exit code for command-line usage error
        }
    }
}

/// Executes a script file from start to finish.
pub fn run_file(path: &str) -> Result<(), i32> {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("Error: Can't open file {}", path);
            return Err(74); // Standard exit code for I/O error
        }
    };
    debug!(path, lines = source.lines().count(), "executing script");

    let mut vm = Vm::new();
    let stdout = io::stdout();
    match vm.run_source(&source, &mut stdout.lock()) {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("{}", err);
            Err(65) // Standard exit code for data format error
        }
    }
}

/// Executes instructions piped through stdin. A terminal gets the usage
/// line instead of a silent hang on the first read.
pub fn run_stdin() -> Result<(), i32> {
    #[cfg(unix)]
    {
        if unsafe { libc::isatty(libc::STDIN_FILENO) } != 0 {
            eprintln!("USAGE: monty file");
            return Err(64);
        }
    }

    debug!("executing stream from stdin");
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_stream(&mut stdin.lock(), &mut stdout.lock(), false)
}

/// Line-at-a-time driver over arbitrary streams; tests and embedders
/// feed it cursors. With `prompt` set it acts as a minimal interactive
/// session, printing `> ` before each read. The fatal-error policy is
/// the same in every mode: the first failure ends the run.
pub fn run_stream<R, W>(reader: &mut R, writer: &mut W, prompt: bool) -> Result<(), i32>
where
    R: BufRead,
    W: Write,
{
    let mut vm = Vm::new();
    let mut line = String::new();
    let mut number = 0;

    loop {
        if prompt && write!(writer, "> ").and_then(|_| writer.flush()).is_err() {
            return Err(74);
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => return Err(74),
        }

        number += 1;
        if let Err(err) = vm.run_line(&line, number, writer) {
            eprintln!("{}", err);
            return Err(65);
        }
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
