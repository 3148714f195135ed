//! Device orientation to Euler angles.
//!
//! The rotation is the W3C DeviceOrientation Z-X'-Y'' composition with its
//! columns permuted so that an upright, screen-facing device sits away from
//! the gimbal-lock pole. Tilting the top of an upright device away from the
//! user lowers `right`; turning about the vertical axis shifts `up`.

use crate::input::DeviceOrientation;

/// Singularity threshold for the Euler extraction.
const GIMBAL_EPSILON: f32 = 1e-6;

/// Row-major 3x3 rotation matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationMatrix(pub [f32; 9]);

impl RotationMatrix {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[row * 3 + col]
    }
}

/// Euler angles in degrees.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EulerAngles {
    pub forward: f32,
    pub right: f32,
    pub up: f32,
}

/// Rotation matrix for a sensor reading given in degrees.
pub fn rotation_matrix(alpha: f32, beta: f32, gamma: f32) -> RotationMatrix {
    let (s_x, c_x) = beta.to_radians().sin_cos();
    let (s_y, c_y) = gamma.to_radians().sin_cos();
    let (s_z, c_z) = alpha.to_radians().sin_cos();

    let m11 = c_z * c_y - s_z * s_x * s_y;
    let m12 = -c_x * s_z;
    let m13 = c_y * s_z * s_x + c_z * s_y;

    let m21 = c_y * s_z + c_z * s_x * s_y;
    let m22 = c_z * c_x;
    let m23 = s_z * s_y - c_z * c_y * s_x;

    let m31 = -c_x * s_y;
    let m32 = s_x;
    let m33 = c_x * c_y;

    RotationMatrix([
        m13, m11, m12, //
        m23, m21, m22, //
        m33, m31, m32,
    ])
}

/// Euler angles of `m`, in degrees.
///
/// Near the singularity `up` is pinned to zero and `forward` absorbs the
/// remaining rotation.
pub fn euler_angles(m: &RotationMatrix) -> EulerAngles {
    let m = &m.0;
    let sy = (m[0] * m[0] + m[3] * m[3]).sqrt();

    let (x, y, z) = if sy >= GIMBAL_EPSILON {
        (m[7].atan2(m[8]), (-m[6]).atan2(sy), m[3].atan2(m[0]))
    } else {
        ((-m[5]).atan2(m[4]), (-m[6]).atan2(sy), 0.0)
    };

    EulerAngles {
        forward: x.to_degrees(),
        right: y.to_degrees(),
        up: z.to_degrees(),
    }
}

impl DeviceOrientation {
    /// Euler angles of this reading.
    pub fn euler(&self) -> EulerAngles {
        euler_angles(&rotation_matrix(self.alpha, self.beta, self.gamma))
    }
}
