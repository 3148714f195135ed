//! Simulation timing.
//!
//! Movement speeds are expressed per simulation tick, so the render loop turns
//! wall-clock frame time into a whole number of fixed ticks:
//! - one `SimClock` per render loop
//! - call `tick()` once per presented frame and run `FrameTime::ticks` steps

mod sim_clock;

pub use sim_clock::{FrameTime, SimClock};
