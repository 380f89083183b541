#![warn(missing_docs)]

//! Ray-surface interaction solvers for the optica kernel.
//!
//! This crate computes the geometric optics of a single ray against the
//! primitives defined in `optica-geom`: where the ray crosses a surface,
//! the local surface normal there, and the reflected and refracted rays
//! that leave the crossing point.
//!
//! # Architecture
//!
//! - [`Ray`] - ray representation and constructors
//! - [`solve`] - secant and Newton-Raphson root-finding engines with an
//!   optional per-iteration observer hook
//! - [`intersect`] - per-primitive intersection solvers built on the
//!   secant engine
//! - [`reflect`] - law-of-reflection operator
//! - [`refract`] - Snell's-law refraction via Newton-Raphson
//!
//! Intersection and refraction are iterative with data-dependent
//! termination; exceeding an iteration cap is reported as an explicit
//! [`TraceError::NonConvergence`] value rather than a sentinel distance.
//!
//! # Example
//!
//! ```
//! use optica_geom::Sphere;
//! use optica_trace::{intersect_sphere, reflect, Ray, SolverConfig};
//! use optica_math::Point3;
//!
//! let sphere = Sphere::new(Point3::origin(), 5.0).unwrap();
//! let ray = Ray::between(Point3::new(0.0, 0.0, -10.0), Point3::origin()).unwrap();
//!
//! let hit = intersect_sphere(&ray, &sphere, &SolverConfig::SPHERE).unwrap();
//! let bounced = reflect(&ray, &hit.normal).unwrap();
//! assert!((hit.distance - 5.0).abs() < 1e-6);
//! assert_eq!(bounced.origin, hit.point);
//! ```

mod error;
mod ray;
mod reflect;
mod refract;

pub mod intersect;
pub mod solve;

pub use error::{Result, TraceError};
pub use intersect::{
    intersect_circle, intersect_cylinder, intersect_sphere, intersect_triangle, Intersection,
};
pub use ray::Ray;
pub use reflect::reflect;
pub use refract::{refract, refract_or_incident};
pub use solve::{IterationStep, SolverConfig};
