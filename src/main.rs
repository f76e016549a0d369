use std::{
    fs::File,
    io::{self, BufReader},
    process::ExitCode,
};

use calcium::{
    evaluate,
    interpreter::session::{DEFAULT_PROMPT, Session, SessionConfig, SessionOutcome},
    util::format::{DEFAULT_PRECISION, format_value},
};
use clap::Parser;
use log::LevelFilter;

/// calcium evaluates arithmetic expressions with `+`, `-`, `*`, `/`,
/// parentheses and unary signs.
///
/// Without arguments it starts an interactive session: end each statement
/// with `;` and type `quit;` to leave.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Runs the `;`-terminated statements of a file instead of reading stdin.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<String>,

    /// Digits printed after the decimal point.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Prompt shown in interactive mode.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Raises the log level; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// A single expression to evaluate, without a trailing `;`.
    expression: Option<String>,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if verbose > 0 || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.try_init().ok();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Some(expression) = &args.expression {
        return match evaluate(expression) {
            Ok(value) => {
                println!("{}", format_value(value, args.precision));
                ExitCode::SUCCESS
            },
            Err(e) if e.is_quit() => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let outcome = if let Some(path) = &args.file {
        let Ok(file) = File::open(path) else {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        let config = SessionConfig { prompt:    String::new(),
                                     precision: args.precision, };
        Session::new(BufReader::new(file), io::stdout(), io::stderr(), config).run()
    } else {
        let config = SessionConfig { prompt:    args.prompt,
                                     precision: args.precision, };
        Session::new(io::stdin().lock(), io::stdout(), io::stderr(), config).run()
    };

    match outcome {
        Ok(SessionOutcome::Quit | SessionOutcome::EndOfInput) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}
