//! Ray-primitive intersection solvers.
//!
//! Each primitive has a dedicated solver built on the shared secant
//! engine in [`crate::solve`]. Every solver treats its surface as
//! unbounded; clipping against finite extents (triangle corners, circle
//! radius) is an explicit membership test layered on top.

mod circle;
mod cylinder;
mod plane;
mod sphere;

pub use circle::{intersect_circle, intersect_circle_traced};
pub use cylinder::{cylinder_normal, intersect_cylinder, intersect_cylinder_traced};
pub use plane::{intersect_triangle, intersect_triangle_traced, triangle_normal};
pub use sphere::{intersect_sphere, intersect_sphere_traced, sphere_normal};

use crate::Ray;
use optica_math::Point3;

/// Result of a converged ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance along the ray, in units of the ray direction's magnitude.
    pub distance: f64,
    /// Point where the ray crosses the surface.
    pub point: Point3,
    /// Surface normal anchored at the intersection point.
    ///
    /// The direction magnitude follows the per-primitive convention
    /// (inward-pointing and scaled by `1/r` for spheres and cylinders,
    /// raw edge cross product for triangles); normalize when a unit
    /// normal is needed.
    pub normal: Ray,
}
