use std::fs;

use clap::Parser;
use env_logger::Env;
use scicalc::{math::angle::AngleUnit, session::CalculatorState};

/// scicalc evaluates scientific-calculator expressions such as
/// `sin(30) + 2^10` or `comb(52, 5)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells scicalc to read expressions from a file, one per line, instead
    /// of evaluating the argument itself.
    #[arg(short, long)]
    file: bool,

    /// Interprets trigonometric arguments and results in radians instead of
    /// degrees.
    #[arg(short, long)]
    radians: bool,

    /// Significant digits used when printing results.
    #[arg(short, long, default_value_t = 10)]
    precision: usize,

    /// Logs every evaluation. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut state = CalculatorState::new();
    state.set_precision(args.precision);
    if args.radians {
        state.set_angle_unit(AngleUnit::Radians);
    }

    for line in script.lines()
                      .map(str::trim)
                      .filter(|line| !line.is_empty() && !line.starts_with('#'))
    {
        match state.evaluate(line) {
            Ok(value) => println!("{}", state.format(value)),
            Err(e) => println!("{e}"),
        }
    }
}
