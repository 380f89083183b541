//! Ray representation and constructors.

use crate::Result;
use optica_math::{MathError, Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is guaranteed non-zero but is not forcibly re-normalized:
/// surface normals travel as rays whose direction magnitude follows the
/// convention of the primitive that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray; magnitude is caller-managed.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from origin and direction. The direction must be
    /// non-zero.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self> {
        if direction.norm_squared() == 0.0 {
            return Err(MathError::ZeroVector.into());
        }
        Ok(Self { origin, direction })
    }

    /// Unit-direction ray from `p1` toward `p2`. The points must be
    /// distinct.
    pub fn between(p1: Point3, p2: Point3) -> Result<Self> {
        let d = p2 - p1;
        let len = d.norm();
        if len == 0.0 {
            return Err(MathError::CoincidentPoints.into());
        }
        Ok(Self {
            origin: p1,
            direction: d / len,
        })
    }

    /// Ray whose direction components are the cosines of the per-axis
    /// angle triple `angles` (degrees).
    pub fn from_angles(origin: Point3, angles: &[f64; 3]) -> Self {
        let direction = Vec3::new(
            angles[0].to_radians().cos(),
            angles[1].to_radians().cos(),
            angles[2].to_radians().cos(),
        );
        Self { origin, direction }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TraceError;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 2.0)).unwrap();
        let p = ray.at(2.5);
        assert!((p - Point3::new(1.0, 2.0, 8.0)).norm() < 1e-12);
    }

    #[test]
    fn test_ray_between_is_unit() {
        let ray = Ray::between(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)).unwrap();
        assert!((ray.direction.norm() - 1.0).abs() < 1e-12);
        assert!((ray.direction - Vec3::new(0.6, 0.8, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_ray_between_coincident() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(
            Ray::between(p, p),
            Err(TraceError::Degenerate(MathError::CoincidentPoints))
        );
    }

    #[test]
    fn test_ray_new_zero_direction() {
        assert!(Ray::new(Point3::origin(), Vec3::zeros()).is_err());
    }

    #[test]
    fn test_ray_from_angles() {
        // Angles (0, 90, 90) point straight down the +X axis.
        let ray = Ray::from_angles(Point3::origin(), &[0.0, 90.0, 90.0]);
        assert!((ray.direction.x - 1.0).abs() < 1e-12);
        assert!(ray.direction.y.abs() < 1e-12);
        assert!(ray.direction.z.abs() < 1e-12);
    }
}
