//! octrace renderer - CPU path tracing
//!
//! A Monte Carlo path tracer over spheres and triangle meshes. Meshes are
//! accelerated with an octree; materials scatter rays diffusely (Lambertian)
//! or specularly (Metal). The render loop fills a caller-provided pixel
//! buffer row by row in parallel.

mod camera;
mod color;
mod hittable;
mod image;
mod material;
mod mesh;
mod octree;
mod renderer;
mod scene;
mod sphere;

pub use camera::Camera;
pub use color::{Color, DEFAULT_GAMMA};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use image::{write_ppm, ImageError, ImageResult, ImageView, Raster, Rgba8, RgbaImage, PIXEL_SIZE};
pub use material::{Material, MaterialId, ScatterResult};
pub use mesh::{MeshObject, TriangleMesh};
pub use octree::{Octree, OctreeHit, OctreeNode, DEFAULT_MAX_LEVELS};
pub use renderer::{ray_color, render, render_pixel, sky_color, RenderConfig};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export the geometric types from octrace_math
pub use octrace_math::{Aabb, Interval, Point2, Point3, Ray, Real, Triangle, Vector2, Vector3};
