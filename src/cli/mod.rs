mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::core::error::RaceError;

/// Diagnostics go to stderr so they never mix with frames on stdout.
/// `RUST_LOG` overrides the default level.
fn init_logging(debug: bool) {
    let default = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .try_init();
}

pub fn run() -> Result<(), RaceError> {
    let cli = parse::Cli::parse();
    init_logging(cli.debug);
    match cli.cmd {
        parse::Command::Play(a) => handlers::play(a),
        parse::Command::Info(a) => handlers::info(&a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
