use crate::{
    math::{vec3, Vec3, VecExt},
    Error,
};
use rand::Rng;
use rand_distr::{Distribution, UnitBall};

// Samples a random point inside the unit ball
pub fn sample_unit_ball<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let [x, y, z]: [f64; 3] = UnitBall.sample(rng);
    vec3(x, y, z)
}

// Reflect vector v around normal n
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * 2.0 * v.dot(n)
}

/// Surface response of a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Diffuse { albedo: Vec3 },
    Metal { albedo: Vec3, fuzz: f64 },
    /// Glass. Shaded like a white diffuse surface; refraction is not traced.
    Dielectric { index_of_refraction: f64 },
}

impl Material {
    pub fn diffuse(albedo: Vec3) -> Self {
        Material::Diffuse { albedo }
    }

    /// `fuzz` is clamped to `[0, 1]`.
    pub fn metal(albedo: Vec3, fuzz: f64) -> Self {
        Material::Metal {
            albedo,
            fuzz: fuzz.max(0.0).min(1.0),
        }
    }

    pub fn dielectric(index_of_refraction: f64) -> Result<Self, Error> {
        if index_of_refraction > 0.0 && index_of_refraction.is_finite() {
            Ok(Material::Dielectric {
                index_of_refraction,
            })
        } else {
            Err(Error::InvalidRefractiveIndex(index_of_refraction))
        }
    }

    pub fn albedo(&self) -> Vec3 {
        match *self {
            Material::Diffuse { albedo } | Material::Metal { albedo, .. } => albedo,
            Material::Dielectric { .. } => Vec3::ONE,
        }
    }

    /// Direction and weight of the mirror bounce, or `None` if the material doesn't reflect.
    ///
    /// `incoming` doesn't need to be normalized. The weight is the mean of the albedo channels.
    pub fn reflection<R: Rng + ?Sized>(
        &self,
        incoming: Vec3,
        normal: Vec3,
        rng: &mut R,
    ) -> Option<(Vec3, f64)> {
        match *self {
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(incoming.normalized(), normal);
                let direction = (reflected + fuzz * sample_unit_ball(rng)).normalized();
                Some((direction, albedo.mean()))
            }
            Material::Diffuse { .. } | Material::Dielectric { .. } => None,
        }
    }
}
