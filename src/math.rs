//! Vector algebra shared by the whole renderer.
//!
//! Points, directions and linear RGB colors are all `glam::DVec3`. The arithmetic itself
//! (`+`, `-`, scaling, component-wise `*`, `dot`, `cross`, `length`, `length_squared`) comes
//! straight from glam; [`VecExt`] adds the few operations the renderer needs on top.

pub use glam::{dvec3 as vec3, DVec3 as Vec3};

pub trait VecExt {
    /// Unit vector in the same direction, or the zero vector if the length is exactly zero.
    fn normalized(self) -> Self;

    /// Clamps every component to `[lo, hi]`.
    fn clamp_scalar(self, lo: f64, hi: f64) -> Self;

    /// Average of the three components.
    fn mean(self) -> f64;
}

impl VecExt for Vec3 {
    fn normalized(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            Vec3::ZERO
        } else {
            self / length
        }
    }

    fn clamp_scalar(self, lo: f64, hi: f64) -> Self {
        vec3(
            self.x.max(lo).min(hi),
            self.y.max(lo).min(hi),
            self.z.max(lo).min(hi),
        )
    }

    fn mean(self) -> f64 {
        (self.x + self.y + self.z) / 3.0
    }
}

#[cfg(test)]
pub(crate) fn approx_eq(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-9
}
