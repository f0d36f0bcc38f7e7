use crate::{material::Material, math::Vec3};

/// The ray data type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Where a ray met a surface, borrowed from the scene that owns the surface.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    pub t: f64,
    pub point: Vec3,
    /// Unit length, pointing away from the primitive's interior.
    pub normal: Vec3,
    pub material: &'a Material,
}
