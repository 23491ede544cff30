//! Command-line interface definitions.
//!
//! Defines the CLI structure for the solid-lessons application using `clap`.
//! The CLI runs the lesson sequence, explores the lessons, computes
//! discounts through the strategy registry and checks configuration files.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Bad-versus-good walkthroughs of the SOLID design principles
#[derive(Parser, Debug)]
#[command(name = "solid-lessons")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the solid-lessons CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the lessons in order (all five by default)
    Run(RunArgs),

    /// Explore the available lessons
    #[command(subcommand)]
    Lessons(LessonCommand),

    /// Compute discounts with the strategy registry
    #[command(subcommand)]
    Discount(DiscountCommand),

    /// Inspect configuration files
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `solid-lessons lessons`.
#[derive(Subcommand, Debug)]
pub enum LessonCommand {
    /// List all lessons.
    List,
    /// Explain one principle and what its lesson shows.
    Explain {
        /// Principle key or name (e.g., "ocp", "open-closed").
        name: String,
    },
}

/// Subcommands for `solid-lessons discount`.
#[derive(Subcommand, Debug)]
pub enum DiscountCommand {
    /// List registered categories with a sample discount.
    List(OptionalConfigArg),
    /// Compute the discount for a category and amount.
    Compute(ComputeArgs),
}

/// Subcommands for `solid-lessons config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    pub config: PathBuf,
}

/// Shared argument struct for commands that can run on defaults.
#[derive(Parser, Debug)]
pub struct OptionalConfigArg {
    /// Path to the configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run only these lessons (repeatable or comma-separated, e.g. "srp,ocp").
    #[arg(short, long, value_delimiter = ',')]
    pub lesson: Vec<String>,

    /// Wait for Enter before the first and after the last lesson.
    #[arg(long)]
    pub pause: bool,

    /// Skip the banner.
    #[arg(long)]
    pub no_banner: bool,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Arguments for the `discount compute` subcommand.
#[derive(Parser, Debug)]
pub struct ComputeArgs {
    /// Customer category (case-insensitive).
    pub category: String,

    /// Purchase amount; must not be negative.
    #[arg(allow_negative_numbers = true)]
    pub amount: Decimal,

    /// Path to the configuration file (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
