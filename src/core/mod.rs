//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod dataset;
pub mod error;
pub mod palette;
pub mod scale;
pub mod snapshot;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, colorize, colorize_bold};
pub use config::{Config, ConfigBuilder};
pub use constants::{FULL_SCALE_WIDTH, MAX_BARS, PALETTE_SIZE};
pub use dataset::{Dataset, Header};
pub use error::{ConfigError, RaceError};
pub use palette::{CategoryPalette, ColorId};
pub use snapshot::{Bar, Snapshot};
