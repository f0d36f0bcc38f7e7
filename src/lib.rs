//! A small Whitted-style ray tracer.
//!
//! Spheres with diffuse, metal and dielectric materials, lit by a single point light with
//! hard shadows and (optionally fuzzy) mirror reflections.

pub mod buffer;
pub mod camera;
pub mod config;
pub mod error;
pub mod integrator;
pub mod material;
pub mod math;
pub mod primitives;
pub mod ray;
pub mod render;
pub mod scene;

pub use error::Error;

/// The generator used for every stochastic decision during a render.
pub type DefaultRng = rand_xoshiro::Xoshiro256Plus;
