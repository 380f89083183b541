//! Ray-cylinder intersection via secant iteration on the implicit surface
//! function.

use super::Intersection;
use crate::solve::{secant, Observer, SolverConfig};
use crate::{Ray, Result};
use optica_geom::Cylinder;
use optica_math::Point3;

/// Find where `ray` crosses the infinite cylindrical surface.
pub fn intersect_cylinder(
    ray: &Ray,
    cylinder: &Cylinder,
    cfg: &SolverConfig,
) -> Result<Intersection> {
    intersect_cylinder_traced(ray, cylinder, cfg, None)
}

/// As [`intersect_cylinder`], reporting each secant step to `observer`.
pub fn intersect_cylinder_traced(
    ray: &Ray,
    cylinder: &Cylinder,
    cfg: &SolverConfig,
    observer: Option<Observer<'_>>,
) -> Result<Intersection> {
    let t = secant(|t| cylinder.implicit(&ray.at(t)), cfg, observer)?;
    let point = ray.at(t);

    Ok(Intersection {
        distance: t,
        point,
        normal: cylinder_normal(cylinder, point),
    })
}

/// Surface normal at a point on the cylinder.
///
/// Mirrors the sphere convention: the direction points from the surface
/// point toward the nearest point on the axis, scaled by `1/radius`.
pub fn cylinder_normal(cylinder: &Cylinder, point: Point3) -> Ray {
    Ray {
        origin: point,
        direction: (cylinder.axis_foot(&point) - point) / cylinder.radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optica_math::Vec3;

    #[test]
    fn test_cylinder_perpendicular_hit() {
        // Axis along +X through the origin, radius 3; ray fired along +Y
        // toward the axis crosses the near wall at y = -3.
        let cyl = Cylinder::new(Point3::origin(), 3.0, &[0.0, 0.0, 0.0]).unwrap();
        let ray = Ray::new(Point3::new(0.0, -10.0, 0.0), Vec3::new(0.0, 1.0, 0.0)).unwrap();

        let hit = intersect_cylinder(&ray, &cyl, &SolverConfig::SPHERE).unwrap();
        assert!((hit.distance - 7.0).abs() < 1e-6);
        assert!((hit.point - Point3::new(0.0, -3.0, 0.0)).norm() < 1e-6);
        assert!((hit.normal.direction - Vec3::new(0.0, 1.0, 0.0)).norm() < 1e-6);
        assert_eq!(hit.normal.origin, hit.point);
    }

    #[test]
    fn test_cylinder_residual_vanishes_at_hit() {
        let cyl = Cylinder::new(Point3::new(1.0, 2.0, 3.0), 2.0, &[0.0, 0.0, 90.0]).unwrap();
        let ray = Ray::new(Point3::new(-10.0, 2.0, 3.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();

        let hit = intersect_cylinder(&ray, &cyl, &SolverConfig::SPHERE).unwrap();
        assert!(cyl.implicit(&hit.point).abs() < 1e-5);
        // Axis runs along +Y at x = 1, z = 3; the near wall is at x = -1.
        assert!((hit.distance - 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_cylinder_parallel_ray_fails() {
        // A ray parallel to the axis keeps a constant implicit value.
        let cyl = Cylinder::new(Point3::origin(), 3.0, &[0.0, 0.0, 0.0]).unwrap();
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(intersect_cylinder(&ray, &cyl, &SolverConfig::SPHERE).is_err());
    }
}
