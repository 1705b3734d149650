//! A collection of constants.

/// Column width of a bar holding the snapshot's largest value.
pub const FULL_SCALE_WIDTH: usize = 150;

/// Number of intervals the axis is split into (six ticks).
pub const TICK_INTERVALS: u64 = 5;

/// Arrow appended after the last tick of every axis line.
pub const AXIS_TAIL: &str = "----------------------------->";

/// Widest line a frame prints: full scale plus the arrow tail.
pub const FRAME_WIDTH: usize = FULL_SCALE_WIDTH + AXIS_TAIL.len();

/// Glyph repeated to draw a bar (and shown in the legend).
pub const BAR_GLYPH: &str = "█";
/// Axis fill between ticks.
pub const AXIS_FILL: char = '-';
/// Axis tick mark.
pub const TICK_GLYPH: char = '+';

/// Distinct category colors before everything collapses to one.
pub const PALETTE_SIZE: usize = 14;

/// Hard cap for bars per frame
pub const MAX_BARS: usize = 15;
pub const DEFAULT_MAX_BARS: usize = 5;

/// Hard cap for the animation speed
pub const MAX_FPS: u64 = 24;
pub const DEFAULT_FPS: u64 = 24;

/// Column the title is centred on.
pub const TITLE_CENTER: usize = 80;
/// Column the timestamp line is centred on.
pub const TIMESTAMP_CENTER: usize = 75;
