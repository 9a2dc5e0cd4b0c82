//! Tealeaf CLI entry point.

use std::env;
use std::process::ExitCode;

use tealeaf_runtime::Repl;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut script: Option<String> = None;
    let mut script_args: Vec<String> = Vec::new();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" if script.is_none() => {
                print_help();
                return Ok(());
            }
            "-V" | "--version" if script.is_none() => {
                println!("tealeaf {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            flag if flag.starts_with('-') && script.is_none() => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ if script.is_none() => script = Some(arg),
            _ => script_args.push(arg),
        }
    }

    // With a script argument, run it and exit; otherwise go interactive.
    if let Some(path) = script {
        let repl = Repl::new()?.without_banner().with_args(script_args);
        repl.load_file(&path)?;
        return Ok(());
    }

    Repl::new()?.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTealeaf\x1b[0m - A small Lisp-family language

\x1b[1mUSAGE:\x1b[0m
    tealeaf [OPTIONS] [SCRIPT [ARGS...]]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPT]      File to run instead of starting the REPL
    [ARGS...]     Arguments exposed to the script as *ARGV*

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information

\x1b[1mEXAMPLES:\x1b[0m
    tealeaf                  Start interactive REPL
    tealeaf program.tl       Run program.tl and exit
    tealeaf program.tl a b   Run with *ARGV* bound to (\"a\" \"b\")

\x1b[1mREPL:\x1b[0m
    (def! name value)        Define a global
    (load-file \"path\")       Load and evaluate a file
    Ctrl+D                   Exit
    Ctrl+C                   Cancel current input"
    );
}
