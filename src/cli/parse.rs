use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "bar-race",
    version,
    about = "Animated bar chart races in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Log debug diagnostics to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a race from a data file
    Play(PlayArgs),
    /// Show what a data file contains without playing it
    Info(InfoArgs),
    /// Show the category palette
    Colors,
    /// Print example invocations
    Examples,
}

/// `bar-race play …`
#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// Data file (use `-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Bars per frame (at most 15)
    #[arg(short, long, value_name = "BARS")]
    pub bars: Option<usize>,

    /// Frames per second (at most 24)
    #[arg(short, long, default_value_t = 24)]
    pub fps: u64,

    /// Start right away instead of waiting for ENTER
    #[arg(long)]
    pub no_wait: bool,
}

/// `bar-race info …`
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Data file (use `-` for stdin)
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Bars per frame (at most 15)
    #[arg(short, long, value_name = "BARS")]
    pub bars: Option<usize>,
}
