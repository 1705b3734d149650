use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use crate::{
    core::{
        color::{AnsiCode, colorize, colorize_bold},
        config::Config,
        constants::{BAR_GLYPH, PALETTE_SIZE},
        data::read_dataset_from_path,
        error::RaceError,
        palette::{CategoryPalette, ColorId},
    },
    render::{Player, compose_intro},
};

use super::parse::{InfoArgs, PlayArgs};

fn banner(text: &str) -> String {
    colorize_bold(&AnsiCode::bright_blue(), text)
}

/// Block until the user presses ENTER (or stdin closes).
fn wait_for_enter<R: BufRead>(input: &mut R) -> io::Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

pub fn play(a: PlayArgs) -> Result<(), RaceError> {
    let cfg = Config::builder()
        .max_bars_opt(a.bars)
        .fps(a.fps)
        .wait_for_enter(!a.no_wait)
        .build()?;

    println!("{}", banner("\n>>> Welcome to the Bar Chart Race! Please enjoy!"));
    println!("{}", banner(">>> Reading your file. please wait..."));

    let t_ingest = Instant::now();
    let dataset = read_dataset_from_path(&a.file, cfg.max_bars)?;
    tracing::info!(
        file = %a.file,
        snapshots = dataset.len(),
        categories = dataset.palette().len(),
        ingest_us = t_ingest.elapsed().as_micros() as u64,
        "dataset ready"
    );

    let mut player = Player::stdout(&cfg);
    {
        let out = player.writer();
        write!(out, "{}", compose_intro(&dataset, cfg.fps))?;
        if cfg.wait_for_enter {
            write!(
                out,
                "{}",
                colorize_bold(&AnsiCode::blue(), "\n\n>>> Press ENTER to begin the race: \n")
            )?;
            out.flush()?;
            wait_for_enter(&mut io::stdin().lock())?;
        } else {
            writeln!(out)?;
        }
    }

    player.play(&dataset)?;

    println!(
        "{}",
        banner("\n>>> That's it for this race! Hope you enjoyed it!\n")
    );
    Ok(())
}

pub fn info(a: &InfoArgs) -> Result<(), RaceError> {
    let cfg = Config::builder().max_bars_opt(a.bars).build()?;
    let dataset = read_dataset_from_path(&a.file, cfg.max_bars)?;
    print!("{}", compose_intro(&dataset, cfg.fps));
    io::stdout().flush()?;
    Ok(())
}

/// Show every palette slot plus the shared overflow colour.
pub fn colors() {
    println!("\nCategory colours, in the order they are handed out:");
    let swatch = BAR_GLYPH.repeat(10);
    let mut palette = CategoryPalette::new();
    for slot in 1..=PALETTE_SIZE {
        let code = palette.color_for(&format!("category {slot}")).ansi();
        let name = code.as_str().escape_debug().to_string();
        println!("{slot:>3}  {}", colorize(&code, &format!("{swatch} {name}")));
    }
    println!(
        "\nPast {PALETTE_SIZE} categories every bar shares {}\n",
        colorize(&ColorId::Overflow.ansi(), &format!("{swatch} this colour"))
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Play a race         : {bin} play data/cities.txt
• Top 10 bars         : {bin} play data/cities.txt -b 10
• Slow motion         : {bin} play data/cities.txt -f 4
• No ENTER prompt     : {bin} play data/cities.txt --no-wait
• From stdin          : cat data/cities.txt | {bin} play - --no-wait
• Inspect a file      : {bin} info data/cities.txt
• Debug diagnostics   : {bin} play data/cities.txt --debug
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_gate_returns_on_newline_or_eof() {
        wait_for_enter(&mut "\n".as_bytes()).unwrap();
        wait_for_enter(&mut "".as_bytes()).unwrap();
    }
}
