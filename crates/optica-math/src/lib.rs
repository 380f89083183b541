#![warn(missing_docs)]

//! Math types for the optica ray kernel.
//!
//! Thin wrappers around nalgebra plus the small set of angle and rotation
//! helpers the tracing crates share: Euclidean distance, per-axis direction
//! angles in degrees, inter-vector angles, and Euler-style point rotation.
//!
//! All angles crossing this crate's API are in degrees; conversion to
//! radians happens at the trigonometric call sites only.

use nalgebra::{Matrix3, Unit, Vector3};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Errors for degenerate vector inputs.
///
/// These are detected eagerly so that no operation silently produces
/// NaN or infinity from a zero-length denominator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Two points expected to span a direction are coincident.
    #[error("points are coincident, direction is undefined")]
    CoincidentPoints,

    /// A vector expected to carry a direction has zero length.
    #[error("vector has zero length")]
    ZeroVector,
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}

/// Per-axis direction angles, in degrees, of the line from `a` to `b`.
///
/// For each axis, `cos(angle) = (b[axis] - a[axis]) / distance(a, b)`.
/// Coincident points leave the direction undefined and are rejected.
pub fn direction_angles(a: &Point3, b: &Point3) -> Result<[f64; 3]> {
    let d = distance(a, b);
    if d == 0.0 {
        return Err(MathError::CoincidentPoints);
    }
    Ok([
        ((b.x - a.x) / d).clamp(-1.0, 1.0).acos().to_degrees(),
        ((b.y - a.y) / d).clamp(-1.0, 1.0).acos().to_degrees(),
        ((b.z - a.z) / d).clamp(-1.0, 1.0).acos().to_degrees(),
    ])
}

/// Angle between two vectors, in degrees.
pub fn angle_between(u: &Vec3, v: &Vec3) -> Result<f64> {
    let nu = u.norm();
    let nv = v.norm();
    if nu == 0.0 || nv == 0.0 {
        return Err(MathError::ZeroVector);
    }
    Ok((u.dot(v) / (nu * nv)).clamp(-1.0, 1.0).acos().to_degrees())
}

/// Rotation about the X axis by `angle` radians.
fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, -s, //
        0.0, s, c,
    )
}

/// Rotation about the Y axis by `angle` radians.
fn rotation_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, s, //
        0.0, 1.0, 0.0, //
        -s, 0.0, c,
    )
}

/// Rotation about the Z axis by `angle` radians.
fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0, //
        s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Rotate `point` about `origin` by the Euler angle triple `angles`
/// (degrees, one angle per axis).
///
/// The composed matrix is `Rz * Ry * Rx`, applied to the point after
/// translating it to the rotation origin: the X rotation acts first,
/// then Y, then Z.
pub fn rotate_point(point: &Point3, angles: &[f64; 3], origin: &Point3) -> Point3 {
    let [ax, ay, az] = angles.map(f64::to_radians);
    let r = rotation_z(az) * rotation_y(ay) * rotation_x(ax);
    origin + r * (point - origin)
}
