//! Scene container and its on-disk description.
//!
//! A [`SceneDescription`] is plain data deserialized from TOML. [`Scene::build`] validates it
//! into the runtime types: a [`World`] of primitives, a [`Camera`] and a [`PointLight`].

use crate::{
    camera::Camera,
    material::Material,
    math::{vec3, Vec3},
    primitives::{Intersect, Primitive, Sphere},
    ray::{Hit, Ray},
    Error,
};
use serde::Deserialize;

/// An ordered list of primitives. Order only matters to break exact ties in `t`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World {
    primitives: Vec<Primitive>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Nearest hit in `(t_min, t_max]`. Each primitive is tested against the closest `t`
    /// found so far, so a later primitive only wins with a strictly smaller `t`.
    pub fn intersection(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;

        for primitive in &self.primitives {
            let bound = closest.map_or(t_max, |hit| hit.t);
            if let Some(hit) = primitive.intersection(ray, t_min, bound) {
                if closest.map_or(true, |best| hit.t < best.t) {
                    closest = Some(hit);
                }
            }
        }

        closest
    }

    /// Whether anything blocks the ray in `(t_min, t_max]`.
    pub fn occluded(&self, ray: &Ray, t_min: f64, t_max: f64) -> bool {
        self.primitives
            .iter()
            .any(|primitive| primitive.has_intersection(ray, t_min, t_max))
    }
}

impl FromIterator<Primitive> for World {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: vec3(5.0, 10.0, 5.0),
            color: Vec3::ONE,
        }
    }
}

/// Everything the renderer needs besides the image settings.
#[derive(Debug)]
pub struct Scene {
    pub world: World,
    pub camera: Camera,
    pub light: PointLight,
}

impl Scene {
    /// Validates `description` into a renderable scene. `default_aspect_ratio` is used when
    /// the description doesn't fix one, normally the image width over its height.
    pub fn build(description: &SceneDescription, default_aspect_ratio: f64) -> Result<Self, Error> {
        let world = description
            .spheres
            .iter()
            .map(|sphere| {
                let material = sphere.material.build()?;
                Sphere::new(sphere.center, sphere.radius, material).map(Primitive::from)
            })
            .collect::<Result<World, Error>>()?;

        let camera = &description.camera;
        let camera = Camera::new(
            camera.look_from,
            camera.look_at,
            camera.up,
            camera.vfov,
            camera.aspect_ratio.unwrap_or(default_aspect_ratio),
        )?;

        Ok(Self {
            world,
            camera,
            light: description.light,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    #[serde(default)]
    pub light: PointLight,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CameraDescription {
    pub look_from: Vec3,
    pub look_at: Vec3,
    #[serde(default = "default_up")]
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub vfov: f64,
    pub aspect_ratio: Option<f64>,
}

fn default_up() -> Vec3 {
    Vec3::Y
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SphereDescription {
    pub center: Vec3,
    pub radius: f64,
    pub material: MaterialDescription,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialDescription {
    Diffuse {
        albedo: Vec3,
    },
    Metal {
        albedo: Vec3,
        #[serde(default)]
        fuzz: f64,
    },
    Dielectric {
        index_of_refraction: f64,
    },
}

impl MaterialDescription {
    pub fn build(&self) -> Result<Material, Error> {
        match *self {
            MaterialDescription::Diffuse { albedo } => Ok(Material::diffuse(albedo)),
            MaterialDescription::Metal { albedo, fuzz } => Ok(Material::metal(albedo, fuzz)),
            MaterialDescription::Dielectric {
                index_of_refraction,
            } => Material::dielectric(index_of_refraction),
        }
    }
}

impl Default for SceneDescription {
    /// Ground plane, a blue diffuse ball flanked by a gold mirror and a brushed silver ball.
    fn default() -> Self {
        let sphere = |center: Vec3, radius: f64, material: MaterialDescription| SphereDescription {
            center,
            radius,
            material,
        };

        Self {
            camera: CameraDescription {
                look_from: vec3(0.0, 1.0, 5.0),
                look_at: vec3(0.0, 0.5, 0.0),
                up: Vec3::Y,
                vfov: 60.0,
                aspect_ratio: None,
            },
            light: PointLight::default(),
            spheres: vec![
                sphere(
                    vec3(0.0, -1000.5, 0.0),
                    1000.0,
                    MaterialDescription::Diffuse {
                        albedo: vec3(0.8, 0.8, 0.0),
                    },
                ),
                sphere(
                    vec3(0.0, 0.5, 0.0),
                    0.5,
                    MaterialDescription::Diffuse {
                        albedo: vec3(0.1, 0.2, 0.5),
                    },
                ),
                sphere(
                    vec3(-1.2, 0.5, -0.5),
                    0.5,
                    MaterialDescription::Metal {
                        albedo: vec3(0.8, 0.6, 0.2),
                        fuzz: 0.0,
                    },
                ),
                sphere(
                    vec3(1.2, 0.5, -0.5),
                    0.5,
                    MaterialDescription::Metal {
                        albedo: vec3(0.8, 0.8, 0.8),
                        fuzz: 0.3,
                    },
                ),
            ],
        }
    }
}
