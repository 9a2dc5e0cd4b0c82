//! The main REPL implementation.
//!
//! The REPL owns the global environment: it installs the core builtin
//! table, registers the host-side builtins that need the global scope
//! (`eval`, `*ARGV*`), and defines the bootstrap prelude in the language
//! itself before the first prompt.

use std::io::{self, Write};

use tealeaf_engine::eval;
use tealeaf_foundation::{Env, Error, Result, Value, intern_symbol};
use tealeaf_language::{pr_str, read};
use tealeaf_stdlib::{install, register};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// Forms evaluated at startup, written in the language itself.
const PRELUDE: &[&str] = &[
    "(def! not (fn* (a) (if a false true)))",
    // The trailing "\nnil)" keeps a final line comment in the file from
    // swallowing the closing paren, and makes load-file yield nil.
    "(def! load-file (fn* (f) (eval (read-string (str \"(do \" (slurp f) \"\\nnil)\")))))",
];

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The global environment; closures created at the prompt capture it.
    env: Env,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,

    /// Continuation prompt (for multi-line input).
    continuation_prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        let env = bootstrap_env();
        Self {
            editor,
            env,
            show_banner: true,
            prompt: "user> ".to_string(),
            continuation_prompt: ".. ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets `*ARGV*` to the given script arguments.
    #[must_use]
    pub fn with_args<I>(self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.env.set(
            intern_symbol("*ARGV*"),
            Value::list(args.into_iter().map(Value::string)),
        );
        self
    }

    /// Returns the global environment, the hook for host collaborators
    /// that register extra builtins before the loop starts.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Reads, evaluates, and prints one input string.
    ///
    /// # Errors
    ///
    /// Propagates reader and evaluation errors, including the
    /// recoverable empty-input case for blank lines.
    pub fn rep(&self, input: &str) -> Result<String> {
        let form = read(input)?;
        let value = eval(&form, &self.env)?;
        Ok(pr_str(&value, true))
    }

    /// Loads and evaluates a file via the `load-file` prelude function.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or any form in it fails.
    pub fn load_file(&self, path: &str) -> Result<String> {
        self.rep(&format!("(load-file \"{}\")", escape(path)))
    }

    /// Runs the REPL loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input fails fatally; evaluation
    /// errors are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let Some(input) = self.read_input()? else {
                break;
            };
            if input.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&input);

            match self.rep(&input) {
                Ok(printed) => println!("{printed}"),
                // A blank or comment-only line is a silent no-op.
                Err(err) if err.is_empty_input() => {}
                Err(err) => print_error(&err),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Reads a potentially multi-line input.
    ///
    /// Returns `None` on EOF at the primary prompt.
    fn read_input(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let mut first_line = true;

        loop {
            let prompt = if first_line {
                &self.prompt
            } else {
                &self.continuation_prompt
            };

            match self.editor.read_line(prompt)? {
                ReadResult::Line(line) => {
                    if first_line {
                        input = line;
                    } else {
                        input.push('\n');
                        input.push_str(&line);
                    }
                    if is_complete(&input) {
                        return Ok(Some(input));
                    }
                    first_line = false;
                }
                ReadResult::Interrupted => {
                    if !first_line {
                        println!("\nInput cancelled.");
                    }
                    return Ok(Some(String::new()));
                }
                ReadResult::Eof => {
                    if first_line {
                        return Ok(None);
                    }
                    return Err(Error::io(
                        "unexpected EOF in multi-line input".to_string(),
                    ));
                }
            }
        }
    }
}

/// Builds the global environment: core table, host builtins, prelude.
fn bootstrap_env() -> Env {
    let env = Env::new();
    install(&env);

    // `eval` runs against the global environment, not the caller's
    // scope, so evaluated definitions land at top level.
    let global = env.clone();
    register(&env, "eval", move |args| {
        if args.len() != 1 {
            return Err(Error::arity("eval", "1 argument", args.len()));
        }
        eval(&args[0], &global)
    });

    env.set(intern_symbol("*ARGV*"), Value::list([]));

    for form in PRELUDE {
        // The prelude is fixed source; a failure here is a programming
        // error surfaced at startup rather than silently ignored.
        if let Err(err) = read(form).and_then(|f| eval(&f, &env)) {
            eprintln!("prelude form failed: {err}");
        }
    }

    env
}

/// Checks if input is syntactically complete (balanced brackets).
fn is_complete(input: &str) -> bool {
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '(' | '[' | '{' if !in_string => depth += 1,
            ')' | ']' | '}' if !in_string => depth -= 1,
            _ => {}
        }
    }

    depth <= 0 && !in_string
}

/// Escapes a path for embedding in a string literal.
fn escape(path: &str) -> String {
    path.replace('\\', "\\\\").replace('"', "\\\"")
}

fn print_banner() {
    println!("Tealeaf {}", env!("CARGO_PKG_VERSION"));
    println!("Type Ctrl+D to exit.");
    let _ = io::stdout().flush();
}

fn print_error(err: &Error) {
    eprintln!("\x1b[31mError: {err}\x1b[0m");
}
