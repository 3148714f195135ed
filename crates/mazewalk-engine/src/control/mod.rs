//! Steering input: device orientation math and the tilt controller.

mod orientation;
mod tilt;

pub use orientation::{EulerAngles, RotationMatrix, euler_angles, rotation_matrix};
pub use tilt::{Tilt, TiltController, forward_speed};
