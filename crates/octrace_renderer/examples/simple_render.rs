//! Simple path tracer example.
//!
//! Renders spheres and a small mesh, saves the frame as PPM, then turns
//! the camera and saves a second frame.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use octrace_renderer::{
    render, write_ppm, Camera, Color, Material, MeshObject, Point3, Real, RenderConfig, RgbaImage, Scene,
    Sphere, Triangle, TriangleMesh, Vector2, Vector3,
};

const WIDTH: usize = 320;
const HEIGHT: usize = 240;

fn main() -> Result<()> {
    env_logger::init();

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let mut camera = Camera::new(1.0, 90.0).with_position(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, -1.0),
        Vector3::Y,
    );

    let config = RenderConfig {
        max_bounces: 10,
        samples_per_pixel: 20,
        seed: Some(1),
        ..Default::default()
    };

    let mut image = RgbaImage::new(WIDTH, HEIGHT);

    println!("Rendering {}x{} @ {} spp...", WIDTH, HEIGHT, config.samples_per_pixel);
    render(&mut camera, &scene, &mut image.view_mut(), &config);
    save("output.ppm", &image)?;

    // Look a little to the left and down, then step back
    camera.rotate(Vector2::new(20.0, -10.0));
    camera.pan(Vector2::new(0.0, 0.5));
    render(&mut camera, &scene, &mut image.view_mut(), &config);
    save("output_rotated.ppm", &image)?;

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let ground = scene.add_material(Material::lambertian(Color::new(0.8, 0.8, 0.0)));
    let center = scene.add_material(Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    let left = scene.add_material(Material::metal(Color::new(0.8, 0.8, 0.8)));
    let right = scene.add_material(Material::metal(Color::new(0.8, 0.6, 0.2)));
    let red = scene.add_material(Material::lambertian(Color::new(0.7, 0.1, 0.1)));

    scene.add(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0, ground));
    scene.add(Sphere::new(Point3::new(0.0, 0.0, -1.2), 0.5, center));
    scene.add(Sphere::new(Point3::new(-1.0, 0.0, -1.0), 0.5, left));
    scene.add(Sphere::new(Point3::new(1.0, 0.0, -1.0), 0.5, right));

    scene.add(MeshObject::new(&tetrahedron(Point3::new(0.0, -0.3, -0.5), 0.2), red));

    scene
}

/// Regular-ish tetrahedron with outward-facing triangles.
fn tetrahedron(center: Point3, size: Real) -> TriangleMesh {
    let apex = center + Vector3::new(0.0, size, 0.0);
    let a = center + Vector3::new(-size, -size, size);
    let b = center + Vector3::new(size, -size, size);
    let c = center + Vector3::new(0.0, -size, -size);

    TriangleMesh::from_triangles(vec![
        Triangle::new(a, b, apex),
        Triangle::new(b, c, apex),
        Triangle::new(c, a, apex),
        Triangle::new(a, c, b),
    ])
}

fn save(path: &str, image: &RgbaImage) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path))?;
    write_ppm(BufWriter::new(file), image).with_context(|| format!("writing {}", path))?;
    println!("Saved to {}", path);
    Ok(())
}
