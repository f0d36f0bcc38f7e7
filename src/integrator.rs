//! Whitted-style shading: flat ambient, one shadowed point light and mirror reflections.

use crate::{
    math::{vec3, Vec3, VecExt},
    ray::Ray,
    scene::{PointLight, World},
};
use rand::Rng;

/// Keeps secondary rays from hitting the surface they start on, and shadow rays from
/// hitting the light itself.
pub const EPSILON: f64 = 1e-4;

/// Fraction of the albedo returned regardless of lighting.
pub const AMBIENT: f64 = 0.05;

/// Light falloff is `1 / max(1, ATTENUATION_SCALE * distance²)`.
pub const ATTENUATION_SCALE: f64 = 0.01;

/// Sky gradient seen by rays that escape the scene.
pub fn background(direction: Vec3) -> Vec3 {
    let t = 0.5 * (direction.normalized().y + 1.0);
    (1.0 - t) * vec3(1.0, 1.0, 1.0) + t * vec3(0.5, 0.7, 1.0)
}

// Computes the color seen along a ray, following at most `depth` bounces
pub fn ray_color<R: Rng + ?Sized>(
    ray: &Ray,
    world: &World,
    light: &PointLight,
    depth: u32,
    rng: &mut R,
) -> Vec3 {
    if depth == 0 {
        return Vec3::ZERO;
    }

    let hit = match world.intersection(ray, EPSILON, f64::INFINITY) {
        Some(hit) => hit,
        None => return background(ray.direction),
    };

    let albedo = hit.material.albedo();
    let ambient = albedo * AMBIENT;

    let to_light = light.position - hit.point;
    let distance_squared = to_light.length_squared();
    let light_direction = to_light.normalized();

    let shadow_ray = Ray::new(hit.point, light_direction);
    let in_shadow = world.occluded(&shadow_ray, EPSILON, to_light.length() - EPSILON);

    let direct = if in_shadow {
        Vec3::ZERO
    } else {
        let n_dot_l = hit.normal.dot(light_direction).max(0.0);
        let attenuation = 1.0 / (ATTENUATION_SCALE * distance_squared).max(1.0);
        albedo * light.color * (n_dot_l * attenuation)
    };

    let reflected = match hit.material.reflection(ray.direction, hit.normal, rng) {
        Some((direction, weight)) => {
            let bounce = Ray::new(hit.point, direction);
            ray_color(&bounce, world, light, depth - 1, rng) * weight
        }
        None => Vec3::ZERO,
    };

    (ambient + direct + reflected).clamp_scalar(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::Material,
        math::approx_eq,
        primitives::Sphere,
        DefaultRng,
    };
    use rand::SeedableRng;

    const ALBEDO: Vec3 = Vec3::new(0.5, 0.25, 0.1);

    fn light_above() -> PointLight {
        PointLight {
            position: vec3(0.0, 0.0, 10.0),
            color: Vec3::ONE,
        }
    }

    // A diffuse ball whose front pole (0, 0, 1) faces the light
    fn lit_world() -> World {
        let mut world = World::new();
        world.add(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(ALBEDO)).unwrap());
        world
    }

    fn toward_pole() -> Ray {
        Ray::new(vec3(0.0, 0.0, 3.0), vec3(0.0, 0.0, -1.0))
    }

    #[test]
    fn zero_depth_is_black() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let world = lit_world();

        assert_eq!(
            ray_color(&toward_pole(), &world, &light_above(), 0, &mut rng),
            Vec3::ZERO
        );
        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(ray_color(&up, &World::new(), &light_above(), 0, &mut rng), Vec3::ZERO);
    }

    #[test]
    fn miss_returns_sky_gradient() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let world = World::new();
        let light = light_above();

        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(ray_color(&up, &world, &light, 5, &mut rng), vec3(0.5, 0.7, 1.0));

        let down = Ray::new(Vec3::ZERO, vec3(0.0, -3.0, 0.0));
        assert_eq!(ray_color(&down, &world, &light, 5, &mut rng), Vec3::ONE);

        let horizon = Ray::new(Vec3::ZERO, vec3(1.0, 0.0, 0.0));
        assert!(approx_eq(
            ray_color(&horizon, &world, &light, 5, &mut rng),
            vec3(0.75, 0.85, 1.0)
        ));
    }

    #[test]
    fn unshadowed_point_gets_direct_light() {
        let mut rng = DefaultRng::seed_from_u64(0);
        // Light 9 units away: attenuation is 1 / max(1, 0.81) = 1 and n.l = 1.
        let color = ray_color(&toward_pole(), &lit_world(), &light_above(), 5, &mut rng);
        assert!(approx_eq(color, ALBEDO * (1.0 + AMBIENT)));
    }

    #[test]
    fn occluder_leaves_only_ambient() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let mut world = lit_world();
        world.add(Sphere::new(vec3(0.0, 0.0, 6.0), 0.5, Material::diffuse(Vec3::ONE)).unwrap());

        let color = ray_color(&toward_pole(), &world, &light_above(), 5, &mut rng);
        assert!(approx_eq(color, ALBEDO * AMBIENT));
    }

    #[test]
    fn occluder_behind_light_casts_no_shadow() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let mut world = lit_world();
        world.add(Sphere::new(vec3(0.0, 0.0, 12.0), 0.5, Material::diffuse(Vec3::ONE)).unwrap());

        let color = ray_color(&toward_pole(), &world, &light_above(), 5, &mut rng);
        assert!(approx_eq(color, ALBEDO * (1.0 + AMBIENT)));
    }

    #[test]
    fn distant_light_is_attenuated() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let light = PointLight {
            position: vec3(0.0, 0.0, 21.0),
            color: Vec3::ONE,
        };
        // distance 20, attenuation 1 / (0.01 * 400) = 0.25
        let color = ray_color(&toward_pole(), &lit_world(), &light, 5, &mut rng);
        assert!(approx_eq(color, ALBEDO * (0.25 + AMBIENT)));
    }

    #[test]
    fn dielectric_shades_as_white_surface() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let mut world = World::new();
        world.add(Sphere::new(Vec3::ZERO, 1.0, Material::dielectric(1.5).unwrap()).unwrap());
        let light = PointLight {
            position: vec3(0.0, 0.0, 21.0),
            color: Vec3::ONE,
        };

        // White albedo, no reflection term: ambient plus attenuated direct light only.
        let color = ray_color(&toward_pole(), &world, &light, 5, &mut rng);
        assert!(approx_eq(color, Vec3::splat(0.25 + AMBIENT)));
    }

    #[test]
    fn surface_facing_away_gets_ambient_only() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let light = PointLight {
            position: vec3(0.0, 0.0, -10.0),
            color: Vec3::ONE,
        };
        let color = ray_color(&toward_pole(), &lit_world(), &light, 5, &mut rng);
        assert!(approx_eq(color, ALBEDO * AMBIENT));
    }

    #[test]
    fn mirror_adds_weighted_reflection() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let albedo = vec3(0.9, 0.6, 0.3);
        let mut world = World::new();
        world.add(Sphere::new(Vec3::ZERO, 1.0, Material::metal(albedo, 0.0)).unwrap());
        // Light sits behind the ball so only ambient and the reflected sky remain.
        let light = PointLight {
            position: vec3(0.0, 0.0, -10.0),
            color: Vec3::ONE,
        };

        // Straight down onto the top pole bounces straight up into the sky.
        let ray = Ray::new(vec3(0.0, 3.0, 0.0), vec3(0.0, -1.0, 0.0));
        let color = ray_color(&ray, &world, &light, 5, &mut rng);
        let sky = vec3(0.5, 0.7, 1.0);
        assert!(approx_eq(color, albedo * AMBIENT + sky * 0.6));

        // With a single bounce left the reflection itself is cut off.
        let color = ray_color(&ray, &world, &light, 1, &mut rng);
        assert!(approx_eq(color, albedo * AMBIENT));
    }

    #[test]
    fn output_is_clamped() {
        let mut rng = DefaultRng::seed_from_u64(0);
        let mut world = World::new();
        world.add(Sphere::new(Vec3::ZERO, 1.0, Material::diffuse(Vec3::splat(0.9))).unwrap());
        let light = PointLight {
            position: vec3(0.0, 0.0, 2.0),
            color: Vec3::splat(50.0),
        };

        let color = ray_color(&toward_pole(), &world, &light, 5, &mut rng);
        assert_eq!(color, Vec3::ONE);
    }
}
