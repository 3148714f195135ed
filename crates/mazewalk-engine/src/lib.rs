//! Mazewalk engine crate.
//!
//! Turns a generated maze into a walkable scene: input translation, tilt
//! steering, collision-checked movement, pickups and the fixed-step clock,
//! plus the vertex format and buffers the renderer draws from.

pub mod config;
pub mod control;
pub mod gpu;
pub mod input;
pub mod logging;
pub mod pickups;
pub mod session;
pub mod time;
pub mod walker;

pub use config::WorldConfig;
pub use session::{MazeSession, TickReport};
