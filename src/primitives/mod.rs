//! This module is full of primitives that all impl Intersect

mod sphere;

pub use sphere::*;

use crate::ray::{Hit, Ray};

/// Computes whether a ray intersects a primitive
pub trait Intersect: Send + Sync {
    /// Computes the intersection between the ray and the primitive.
    /// Only hits with `t_min < t <= t_max` count.
    fn intersection(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Hit<'_>>;

    /// Computes whether there is an intersection between the ray and the primitive.
    /// Could be cheaper than "intersection".
    fn has_intersection(&self, ray: &Ray, t_min: f64, t_max: f64) -> bool {
        self.intersection(ray, t_min, t_max).is_some()
    }
}

/// Every kind of geometry a scene can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl Intersect for Primitive {
    fn intersection(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Hit<'_>> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersection(ray, t_min, t_max),
        }
    }

    fn has_intersection(&self, ray: &Ray, t_min: f64, t_max: f64) -> bool {
        match self {
            Primitive::Sphere(sphere) => sphere.has_intersection(ray, t_min, t_max),
        }
    }
}
