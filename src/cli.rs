use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// kata — textbook programming drills as a command-line toolbox
#[derive(Parser, Debug)]
#[command(
    name = "kata",
    version,
    about = "Reverse text, compute factorials, find maxima — each with cross-checked implementations",
    long_about = None
)]
pub struct Cli {
    /// Path to a TOML configuration file
    /// (default: ~/.kata/kata.toml)
    #[arg(short, long, global = true, env = "KATA_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reverse the textual form of a value
    Reverse(ReverseArgs),

    /// Compute n! (recursive and iterative implementations)
    Factorial(FactorialArgs),

    /// Find the largest of the given values
    Largest(LargestArgs),

    /// Run the built-in demonstration and self-checks
    Demo,

    /// Print the resolved configuration as JSON and exit
    Config,
}

#[derive(Args, Debug)]
pub struct ReverseArgs {
    /// Value to reverse (always treated as text)
    pub value: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct FactorialArgs {
    /// Non-negative integer to take the factorial of
    pub n: String,

    /// Algorithm to run (both runs the pair and checks agreement)
    #[arg(short, long, value_enum, default_value_t = Method::Both)]
    pub method: Method,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct LargestArgs {
    /// Values to compare; all-integer input is compared numerically,
    /// anything else lexicographically
    pub values: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Method {
    Recursive,
    Iterative,
    Both,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Recursive => "recursive",
            Method::Iterative => "iterative",
            Method::Both => "both",
        }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}
