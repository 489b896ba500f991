//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.  Pattern and
//! category names are forwarded as strings and parsed by the command
//! handlers, so alias spellings (`factory`, `chain`, `behavioural`) resolve
//! in one place: the domain's `FromStr` impls.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "patina",
    bin_name = "patina",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4d6} Classic design patterns, demonstrated",
    long_about = "Patina is a runnable catalogue of the classic design patterns, \
                  each demonstrated with a small banking or trading example.",
    after_help = "EXAMPLES:\n\
        \x20 patina run strategy\n\
        \x20 patina demo creational\n\
        \x20 patina demo --all\n\
        \x20 patina describe chain-of-responsibility\n\
        \x20 patina list --category behavioral",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a single pattern demonstration.
    #[command(
        visible_alias = "r",
        about = "Run one pattern's demo",
        after_help = "EXAMPLES:\n\
            \x20 patina run strategy\n\
            \x20 patina run factory          # alias for factory-method\n\
            \x20 patina run object-pool --output-format json"
    )]
    Run(RunArgs),

    /// Run every demo of a category (or the whole catalogue).
    #[command(
        visible_alias = "d",
        about = "Run a category of demos",
        after_help = "EXAMPLES:\n\
            \x20 patina demo creational\n\
            \x20 patina demo behavioural     # British spelling accepted\n\
            \x20 patina demo --all"
    )]
    Demo(DemoArgs),

    /// List the catalogued patterns.
    #[command(
        visible_alias = "ls",
        about = "List catalogued patterns",
        after_help = "EXAMPLES:\n\
            \x20 patina list\n\
            \x20 patina list --category structural\n\
            \x20 patina list --format json"
    )]
    List(ListArgs),

    /// Show a pattern's documentation card.
    #[command(
        visible_alias = "info",
        about = "Describe a pattern",
        after_help = "EXAMPLES:\n\
            \x20 patina describe singleton\n\
            \x20 patina describe cor          # alias for chain-of-responsibility"
    )]
    Describe(DescribeArgs),

    /// Initialise a Patina configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 patina init\n\
            \x20 patina init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 patina completions bash > ~/.local/share/bash-completion/completions/patina\n\
            \x20 patina completions zsh  > ~/.zfunc/_patina\n\
            \x20 patina completions fish > ~/.config/fish/completions/patina.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Patina configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 patina config get output.format\n\
            \x20 patina config set output.format json\n\
            \x20 patina config list"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `patina run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Pattern slug or alias, e.g. `strategy` or `factory`.
    #[arg(value_name = "PATTERN", help = "Pattern to demonstrate")]
    pub pattern: String,

    /// Print the documentation card above the transcript.
    #[arg(long = "with-doc", help = "Show the doc card before the demo")]
    pub with_doc: bool,
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `patina demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Category to demonstrate: creational, structural, or behavioral.
    ///
    /// Optional so that `defaults.category` from the config file can stand
    /// in; the handler errors when neither is present.
    #[arg(value_name = "CATEGORY", conflicts_with = "all", help = "Pattern category")]
    pub category: Option<String>,

    /// Run the whole catalogue, category by category.
    #[arg(long = "all", help = "Run every catalogued demo")]
    pub all: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `patina list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by category.
    #[arg(long = "category", value_name = "CATEGORY", help = "Filter by category")]
    pub category: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One slug per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── describe ──────────────────────────────────────────────────────────────────

/// Arguments for `patina describe`.
#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Pattern slug or alias.
    #[arg(value_name = "PATTERN", help = "Pattern to describe")]
    pub pattern: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `patina init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `patina completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `patina config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
