use crate::{
    math::{Vec3, VecExt},
    ray::Ray,
    Error,
};

/// Pinhole camera. The projection basis is computed once and never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// `vfov` is the vertical field of view in degrees, `aspect` is width over height.
    pub fn new(origin: Vec3, target: Vec3, up: Vec3, vfov: f64, aspect: f64) -> Result<Self, Error> {
        if !(vfov > 0.0 && vfov < 180.0) {
            return Err(Error::InvalidFieldOfView(vfov));
        }
        if !(aspect > 0.0 && aspect.is_finite()) {
            return Err(Error::InvalidAspectRatio(aspect));
        }

        let w = (origin - target).normalized();
        if w == Vec3::ZERO {
            return Err(Error::CoincidentEyeAndTarget);
        }
        let u = up.cross(w).normalized();
        if u == Vec3::ZERO {
            return Err(Error::DegenerateUpVector);
        }
        let v = w.cross(u);

        let half_height = (vfov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * half_height;
        let viewport_width = aspect * viewport_height;

        let lower_left_corner = origin - u * (viewport_width / 2.0) - v * (viewport_height / 2.0) - w;
        let horizontal = u * viewport_width;
        let vertical = v * viewport_height;

        Ok(Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        })
    }

    /// Ray through the image plane at `(s, t)`, both in `[0, 1]` from the lower left corner.
    /// The direction is normalized.
    pub fn ray(&self, s: f64, t: f64) -> Ray {
        let direction = self.lower_left_corner + self.horizontal * s + self.vertical * t - self.origin;
        Ray::new(self.origin, direction.normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, vec3};

    fn looking_down_z(vfov: f64, aspect: f64) -> Camera {
        Camera::new(Vec3::ZERO, vec3(0.0, 0.0, -1.0), Vec3::Y, vfov, aspect).unwrap()
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = Camera::new(
            vec3(0.0, 1.0, 5.0),
            vec3(0.0, 0.5, 0.0),
            Vec3::Y,
            60.0,
            1.6,
        )
        .unwrap();
        let ray = camera.ray(0.5, 0.5);

        assert_eq!(ray.origin, vec3(0.0, 1.0, 5.0));
        assert!(approx_eq(ray.direction, vec3(0.0, -0.5, -5.0).normalized()));
    }

    #[test]
    fn corners_span_the_field_of_view() {
        // 90 degrees vertically with a 2:1 aspect puts the image plane corners at (+-2, +-1, -1).
        let camera = looking_down_z(90.0, 2.0);

        let lower_left = camera.ray(0.0, 0.0);
        assert!(approx_eq(lower_left.direction, vec3(-2.0, -1.0, -1.0).normalized()));

        let upper_right = camera.ray(1.0, 1.0);
        assert!(approx_eq(upper_right.direction, vec3(2.0, 1.0, -1.0).normalized()));

        let top_middle = camera.ray(0.5, 1.0);
        assert!(approx_eq(top_middle.direction, vec3(0.0, 1.0, -1.0).normalized()));
    }

    #[test]
    fn rays_are_normalized() {
        let camera = looking_down_z(40.0, 1.5);
        for &(s, t) in &[(0.0, 0.0), (0.3, 0.9), (1.0, 0.5)] {
            assert!((camera.ray(s, t).direction.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rejects_degenerate_setups() {
        let eye = vec3(1.0, 2.0, 3.0);
        assert_eq!(
            Camera::new(eye, eye, Vec3::Y, 60.0, 1.0),
            Err(Error::CoincidentEyeAndTarget)
        );
        assert_eq!(
            Camera::new(Vec3::ZERO, vec3(0.0, -5.0, 0.0), Vec3::Y, 60.0, 1.0),
            Err(Error::DegenerateUpVector)
        );
        assert_eq!(
            Camera::new(Vec3::ZERO, Vec3::Z, Vec3::Y, 0.0, 1.0),
            Err(Error::InvalidFieldOfView(0.0))
        );
        assert_eq!(
            Camera::new(Vec3::ZERO, Vec3::Z, Vec3::Y, 180.0, 1.0),
            Err(Error::InvalidFieldOfView(180.0))
        );
        assert_eq!(
            Camera::new(Vec3::ZERO, Vec3::Z, Vec3::Y, 60.0, -1.0),
            Err(Error::InvalidAspectRatio(-1.0))
        );
    }
}
