use crate::{
    material::Material,
    math::{Vec3, VecExt},
    primitives::Intersect,
    ray::{Hit, Ray},
    Error,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, material: Material) -> Result<Self, Error> {
        if !center.is_finite() {
            return Err(Error::NonFiniteCenter);
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(Error::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material,
        })
    }

    // Nearest root of the ray/sphere quadratic in (t_min, t_max]
    fn root(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<f64> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let half_b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;

        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let in_range = |t: f64| t_min < t && t <= t_max;

        let near = (-half_b - sqrtd) / a;
        if in_range(near) {
            return Some(near);
        }
        let far = (-half_b + sqrtd) / a;
        if in_range(far) {
            return Some(far);
        }

        None
    }
}

impl Intersect for Sphere {
    fn intersection(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Hit<'_>> {
        let t = self.root(ray, t_min, t_max)?;
        let point = ray.at(t);

        Some(Hit {
            t,
            point,
            normal: ((point - self.center) / self.radius).normalized(),
            material: &self.material,
        })
    }

    fn has_intersection(&self, ray: &Ray, t_min: f64, t_max: f64) -> bool {
        self.root(ray, t_min, t_max).is_some()
    }
}
