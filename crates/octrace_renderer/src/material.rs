//! Surface scattering.

use octrace_math::{Ray, Vector3};
use rand::RngCore;

use crate::{Color, HitRecord};

/// Index of a material in the owning [`Scene`](crate::Scene)'s material table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub(crate) usize);

impl MaterialId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The outcome of a ray scattering off a surface.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    pub attenuation: Color,
    pub scattered: Ray,
}

/// How light interacts with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Ideal diffuse reflector.
    Lambertian { albedo: Color },
    /// Perfect mirror, tinted by its albedo.
    Metal { albedo: Color },
}

impl Material {
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian { albedo }
    }

    pub fn metal(albedo: Color) -> Self {
        Material::Metal { albedo }
    }

    pub fn albedo(&self) -> Color {
        match *self {
            Material::Lambertian { albedo } | Material::Metal { albedo } => albedo,
        }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed. Neither current variant
    /// absorbs, but the render loop treats `None` as a black terminal.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        match *self {
            Material::Lambertian { albedo } => {
                let direction = lambertian_direction(rec.normal, Vector3::random_unit(rng));
                Some(ScatterResult {
                    attenuation: albedo,
                    scattered: Ray::new(rec.point, direction),
                })
            }
            Material::Metal { albedo } => {
                let reflected = ray_in.direction().reflect(rec.normal);
                Some(ScatterResult {
                    attenuation: albedo,
                    scattered: Ray::new(rec.point, reflected),
                })
            }
        }
    }
}

/// Normal plus a unit offset, falling back to the normal when the two cancel.
#[inline]
fn lambertian_direction(normal: Vector3, offset: Vector3) -> Vector3 {
    let direction = normal + offset;
    if direction.near_zero() {
        normal
    } else {
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octrace_math::Point3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(normal: Vector3) -> HitRecord {
        HitRecord {
            point: Point3::new(0.0, 0.0, -1.0),
            normal,
            t: 1.0,
            front_face: true,
            material: MaterialId(0),
        }
    }

    #[test]
    fn test_lambertian_scatters_into_hemisphere() {
        let albedo = Color::new(0.8, 0.3, 0.1);
        let material = Material::lambertian(albedo);
        let rec = record(Vector3::Z);
        let ray_in = Ray::new(Point3::ORIGIN, -Vector3::Z);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let result = material.scatter(&ray_in, &rec, &mut rng).expect("lambertian always scatters");
            assert_eq!(result.attenuation, albedo);
            assert_eq!(result.scattered.origin(), rec.point);
            assert!(result.scattered.direction().dot(rec.normal) >= 0.0);
            assert!(!result.scattered.direction().near_zero());
        }
    }

    #[test]
    fn test_lambertian_degenerate_direction_falls_back_to_normal() {
        let normal = Vector3::Y;
        assert_eq!(lambertian_direction(normal, -normal), normal);
        assert_eq!(lambertian_direction(normal, Vector3::X), Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_metal_reflects() {
        let albedo = Color::new(0.8, 0.8, 0.8);
        let material = Material::metal(albedo);
        let rec = record(Vector3::Y);
        let ray_in = Ray::new(Point3::new(-1.0, 1.0, -1.0), Vector3::new(1.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(1);

        let result = material.scatter(&ray_in, &rec, &mut rng).unwrap();
        assert_eq!(result.attenuation, albedo);
        assert_eq!(result.scattered.direction(), Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(result.scattered.origin(), rec.point);
    }

    #[test]
    fn test_albedo() {
        let c = Color::new(0.1, 0.2, 0.3);
        assert_eq!(Material::lambertian(c).albedo(), c);
        assert_eq!(Material::metal(c).albedo(), c);
    }
}
