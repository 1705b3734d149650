use std::process::ExitCode;

use bar_race::{AnsiCode, cli, core::colorize_bold};

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                colorize_bold(&AnsiCode::bright_red(), &format!("\n>>> [ERROR]: {e}\n"))
            );
            ExitCode::FAILURE
        }
    }
}
