//! Twist CLI - evaluate numbers against divisor/word tokens.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Main CLI structure.
#[derive(Parser)]
#[command(name = "twist")]
#[command(author, version, about = "Twist - FizzBuzz with your own tokens", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress error output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print results as a JSON array.
    #[arg(long, global = true)]
    json: bool,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single number.
    Number {
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        number: i64,

        #[command(flatten)]
        tokens: TokenArgs,
    },

    /// Evaluate a list of numbers, in the given order.
    Numbers {
        #[arg(required = true, allow_negative_numbers = true, value_parser = parse_number)]
        numbers: Vec<i64>,

        #[command(flatten)]
        tokens: TokenArgs,
    },

    /// Evaluate every number from START to END inclusive (counts down if START > END).
    Range {
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        start: i64,

        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        end: i64,

        /// Stop after this many results.
        #[arg(long)]
        limit: Option<u64>,

        #[command(flatten)]
        tokens: TokenArgs,
    },

    /// Classic FizzBuzz from 1 to N.
    Standard {
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        number: i64,
    },

    /// Fetch a token from the word service and evaluate a range with it.
    Fetch {
        #[arg(allow_negative_numbers = true, value_parser = parse_number, default_value = "1")]
        start: i64,

        #[arg(allow_negative_numbers = true, value_parser = parse_number, default_value = "100")]
        end: i64,
    },

    /// Run the showcase of built-in problems.
    Demo {
        /// Also fetch a token from the word service.
        #[arg(long)]
        fetch: bool,
    },
}

/// Token selection shared by the evaluation commands.
#[derive(Args, Debug, Default)]
pub struct TokenArgs {
    /// Custom token as DIVISOR=WORD; repeat for more, applied in order.
    #[arg(short = 't', long = "token", value_name = "DIVISOR=WORD")]
    pub tokens: Vec<String>,

    /// External token as JSON, e.g. '{"number":5,"word":"Foo"}'.
    #[arg(long, value_name = "JSON", conflicts_with = "tokens")]
    pub token_json: Option<String>,
}

fn parse_number(text: &str) -> Result<i64, String> {
    twist_eval::parse_number(text).map_err(|e| e.to_string())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TWIST_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main entry point.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let out = output::Format::new(cli.json);
    let result = match cli.command {
        Commands::Number { number, tokens } => commands::eval::number(number, &tokens, out),
        Commands::Numbers { numbers, tokens } => commands::eval::numbers(numbers, &tokens, out),
        Commands::Range {
            start,
            end,
            limit,
            tokens,
        } => commands::eval::range(start, end, limit, &tokens, out),
        Commands::Standard { number } => commands::eval::standard(number, out),
        Commands::Fetch { start, end } => commands::fetch::run(start, end, out),
        Commands::Demo { fetch } => commands::demo::run(fetch),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
