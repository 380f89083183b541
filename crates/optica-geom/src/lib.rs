#![warn(missing_docs)]

//! Primitive records and implicit surface evaluation for the optica kernel.
//!
//! Provides the analytic primitives an optical tracer intersects rays with:
//! triangular plane patches, spheres, infinite cylinders, and flat circular
//! apertures. Each closed primitive exposes an implicit surface function
//! that is zero exactly on the surface, negative inside, and positive
//! outside, evaluated for a single point or for a batch of points in one
//! call.
//!
//! Constructors validate their parameters up front; a degenerate primitive
//! (collinear corners, non-positive radius) is rejected instead of producing
//! a zero-length normal downstream.

use optica_math::{distance, rotate_point, Point3, Vec3};
use thiserror::Error;

/// Errors raised when constructing a primitive from invalid parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeomError {
    /// Triangle corners lie on one line; the normal is undefined.
    #[error("triangle corners are collinear")]
    CollinearCorners,

    /// A sphere, cylinder, or circle radius must be strictly positive.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// The two points defining a cylinder axis are coincident.
    #[error("cylinder axis direction has zero length")]
    ZeroAxis,
}

/// Result type for primitive construction.
pub type Result<T> = std::result::Result<T, GeomError>;

/// Corner points of the canonical axis-aligned patch used by
/// [`Triangle::from_pose`], before rotation and translation.
const CANONICAL_CORNERS: [[f64; 3]; 3] = [[10.0, 10.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 0.0]];

// =============================================================================
// Triangle / plane patch
// =============================================================================

/// A triangular plane patch defined by three corner points.
///
/// Doubles as the plane it spans: the intersection solver treats it as an
/// unbounded plane and clips against the corners with [`Triangle::contains`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner.
    pub p0: Point3,
    /// Second corner.
    pub p1: Point3,
    /// Third corner.
    pub p2: Point3,
}

impl Triangle {
    /// Create a triangle from three corners.
    ///
    /// Collinear corners are rejected; they would leave the surface normal
    /// degenerate and the intersection behavior undefined.
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Result<Self> {
        let n = (p1 - p0).cross(&(p2 - p0));
        if n.norm_squared() == 0.0 {
            return Err(GeomError::CollinearCorners);
        }
        Ok(Self { p0, p1, p2 })
    }

    /// Canonical axis-aligned patch, rotated by the Euler triple `angles`
    /// (degrees) about the world origin and then translated to `center`.
    pub fn from_pose(center: &Point3, angles: &[f64; 3]) -> Self {
        let world = Point3::origin();
        let mut corners =
            CANONICAL_CORNERS.map(|c| Point3::new(c[0], c[1], c[2]));
        for corner in &mut corners {
            *corner = rotate_point(corner, angles, &world) + center.coords;
        }
        // The canonical corners are never collinear and rotation plus
        // translation preserve that.
        Self {
            p0: corners[0],
            p1: corners[1],
            p2: corners[2],
        }
    }

    /// Cross product of the two edge vectors out of `p0`.
    ///
    /// Not normalized; callers needing a unit normal normalize explicitly.
    pub fn normal(&self) -> Vec3 {
        (self.p1 - self.p0).cross(&(self.p2 - self.p0))
    }

    /// Mean of the three corners.
    pub fn center(&self) -> Point3 {
        Point3::from((self.p0.coords + self.p1.coords + self.p2.coords) / 3.0)
    }

    /// Coefficients `[a, b, c, d]` of the implicit plane equation
    /// `a*x + b*y + c*z + d = 0` through this triangle.
    pub fn plane_coefficients(&self) -> [f64; 4] {
        let n = self.normal();
        [n.x, n.y, n.z, -n.dot(&self.p0.coords)]
    }

    /// Same-side membership test for a point assumed coplanar with the
    /// triangle (the intersection solver guarantees that for hit points).
    ///
    /// Corner and edge points are members.
    pub fn contains(&self, point: &Point3) -> bool {
        same_side(point, &self.p0, &self.p1, &self.p2)
            && same_side(point, &self.p1, &self.p0, &self.p2)
            && same_side(point, &self.p2, &self.p0, &self.p1)
    }
}

/// True when `point` and `reference` lie on the same side of the line
/// through `a` and `b` (cross-product sign test). Points on the line count
/// as the same side.
pub fn same_side(point: &Point3, reference: &Point3, a: &Point3, b: &Point3) -> bool {
    let edge = b - a;
    let cp_point = edge.cross(&(point - a));
    let cp_reference = edge.cross(&(reference - a));
    cp_point.dot(&cp_reference) >= 0.0
}

// =============================================================================
// Sphere
// =============================================================================

/// A sphere: center plus radius. Packed form `[cx, cy, cz, r]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point.
    pub center: Point3,
    /// Radius, strictly positive.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere; the radius must be strictly positive.
    pub fn new(center: Point3, radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            return Err(GeomError::NonPositiveRadius(radius));
        }
        Ok(Self { center, radius })
    }

    /// Implicit surface value at `point`:
    /// `(x-cx)^2 + (y-cy)^2 + (z-cz)^2 - r^2`.
    #[inline]
    pub fn implicit(&self, point: &Point3) -> f64 {
        (point - self.center).norm_squared() - self.radius * self.radius
    }

    /// Batched implicit evaluation: one value per input point, order
    /// preserving, each element independent of the rest.
    pub fn implicit_batch(&self, points: &[Point3]) -> Vec<f64> {
        points.iter().map(|p| self.implicit(p)).collect()
    }

    /// Packed parameter record `[cx, cy, cz, r]`.
    pub fn packed(&self) -> [f64; 4] {
        [self.center.x, self.center.y, self.center.z, self.radius]
    }
}

// =============================================================================
// Cylinder
// =============================================================================

/// An infinite cylinder: center, radius, and a second point on the axis one
/// unit away from the center. Packed form `[cx, cy, cz, r, ax, ay, az]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// A point on the axis.
    pub center: Point3,
    /// Radius, strictly positive.
    pub radius: f64,
    /// Second axis point, `center + unit axis direction`.
    pub axis_point: Point3,
}

impl Cylinder {
    /// Create a cylinder whose axis direction is the canonical +X unit
    /// vector rotated by the Euler triple `rotation` (degrees).
    pub fn new(center: Point3, radius: f64, rotation: &[f64; 3]) -> Result<Self> {
        let tip = rotate_point(&Point3::new(1.0, 0.0, 0.0), rotation, &Point3::origin());
        Self::from_axis_points(center, radius, center + tip.coords)
    }

    /// Create a cylinder from its packed representation: a point on the
    /// axis, the radius, and a second distinct axis point.
    pub fn from_axis_points(center: Point3, radius: f64, axis_point: Point3) -> Result<Self> {
        if radius <= 0.0 {
            return Err(GeomError::NonPositiveRadius(radius));
        }
        if (axis_point - center).norm_squared() == 0.0 {
            return Err(GeomError::ZeroAxis);
        }
        Ok(Self {
            center,
            radius,
            axis_point,
        })
    }

    /// Implicit surface value at `point`: squared distance from the point
    /// to the axis line, minus `r^2`.
    #[inline]
    pub fn implicit(&self, point: &Point3) -> f64 {
        point_to_line_distance_squared(point, &self.center, &self.axis_point)
            - self.radius * self.radius
    }

    /// Batched implicit evaluation, mirroring [`Sphere::implicit_batch`].
    pub fn implicit_batch(&self, points: &[Point3]) -> Vec<f64> {
        points.iter().map(|p| self.implicit(p)).collect()
    }

    /// Closest point on the axis line to `point`.
    pub fn axis_foot(&self, point: &Point3) -> Point3 {
        let axis = self.axis_point - self.center;
        let s = (point - self.center).dot(&axis) / axis.norm_squared();
        self.center + s * axis
    }

    /// Packed parameter record `[cx, cy, cz, r, ax, ay, az]`.
    pub fn packed(&self) -> [f64; 7] {
        [
            self.center.x,
            self.center.y,
            self.center.z,
            self.radius,
            self.axis_point.x,
            self.axis_point.y,
            self.axis_point.z,
        ]
    }
}

/// Squared distance from `point` to the infinite line through `a` and `b`.
pub fn point_to_line_distance_squared(point: &Point3, a: &Point3, b: &Point3) -> f64 {
    let axis = b - a;
    axis.cross(&(a - point)).norm_squared() / axis.norm_squared()
}

// =============================================================================
// Circle
// =============================================================================

/// A flat circular aperture: the plane patch it lies in, plus center and
/// radius for clipping hit points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Plane patch carrying the circle's orientation.
    pub plane: Triangle,
    /// Center of the circle.
    pub center: Point3,
    /// Radius, strictly positive.
    pub radius: f64,
}

impl Circle {
    /// Create a circle at `center`, tilted by the Euler triple `angles`
    /// (degrees).
    pub fn new(center: Point3, radius: f64, angles: &[f64; 3]) -> Result<Self> {
        if radius <= 0.0 {
            return Err(GeomError::NonPositiveRadius(radius));
        }
        Ok(Self {
            plane: Triangle::from_pose(&center, angles),
            center,
            radius,
        })
    }

    /// True when a point on the circle's plane lies within the radius.
    /// Boundary points are members.
    pub fn contains(&self, point: &Point3) -> bool {
        distance(point, &self.center) <= self.radius
    }
}
