pub mod axis;
pub mod frame;
pub mod player;

pub use axis::{AxisPlan, Tick, plan_axis};
pub use frame::{compose_frame, compose_intro, compose_legend};
pub use player::Player;
