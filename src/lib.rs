//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use std::io::Read;

pub use crate::core::{
    FULL_SCALE_WIDTH, MAX_BARS, PALETTE_SIZE,
    color::{AnsiCode, colorize},
    config::{Config, ConfigBuilder},
    data::{ParseDataError, ParseErrorKind, read_dataset, read_dataset_from_path},
    dataset::{Dataset, Header},
    error::{ConfigError, RaceError},
    palette::{CategoryPalette, ColorId},
    snapshot::{Bar, Snapshot},
};

pub use render::{AxisPlan, Player, Tick, compose_frame, plan_axis};

/// Convenience function: read a data file and return every frame's text,
/// in file order, without printing or pausing.
pub fn render_frames<R: Read>(src: R, max_bars: usize) -> Result<Vec<String>, RaceError> {
    let cfg = Config::builder().max_bars(max_bars).build()?;
    let dataset = read_dataset(src, cfg.max_bars)?;
    Ok(dataset
        .snapshots()
        .iter()
        .map(|s| compose_frame(&dataset.header, s, dataset.palette()))
        .collect())
}
