//! Law-of-reflection operator.

use crate::{Ray, Result};
use optica_math::MathError;

/// Reflect `ray` about the surface normal `normal`.
///
/// The normal's origin is the hit point and becomes the reflected ray's
/// origin. The normal need not be unit length; its magnitude cancels in
/// the projection. A zero-length normal is rejected.
pub fn reflect(ray: &Ray, normal: &Ray) -> Result<Ray> {
    let div = normal.direction.norm_squared();
    if div == 0.0 {
        return Err(MathError::ZeroVector.into());
    }
    let a = ray.direction.dot(&normal.direction) / div;
    Ok(Ray {
        origin: normal.origin,
        direction: ray.direction - 2.0 * a * normal.direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use optica_math::{Point3, Vec3};

    #[test]
    fn test_reflect_head_on() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0)).unwrap();
        let normal = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, -1.0)).unwrap();

        let reflected = reflect(&ray, &normal).unwrap();
        assert_eq!(reflected.origin, normal.origin);
        assert!((reflected.direction - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_reflect_45_degrees() {
        let ray = Ray::new(Point3::new(-5.0, 5.0, 0.0), Vec3::new(1.0, -1.0, 0.0)).unwrap();
        let normal = Ray::new(Point3::origin(), Vec3::new(0.0, 1.0, 0.0)).unwrap();

        let reflected = reflect(&ray, &normal).unwrap();
        assert!((reflected.direction - Vec3::new(1.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_reflect_twice_restores_direction() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.3, -0.7, 0.2)).unwrap();
        // A non-unit normal; the magnitude must not matter.
        let normal = Ray::new(Point3::new(4.0, 4.0, 4.0), Vec3::new(1.0, 2.0, -2.0)).unwrap();

        let once = reflect(&ray, &normal).unwrap();
        let twice = reflect(&once, &normal).unwrap();
        assert!((twice.direction - ray.direction).norm() < 1e-12);
    }

    #[test]
    fn test_reflect_zero_normal() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0)).unwrap();
        let degenerate = Ray {
            origin: Point3::origin(),
            direction: Vec3::zeros(),
        };
        assert!(reflect(&ray, &degenerate).is_err());
    }
}
