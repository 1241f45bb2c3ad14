//! Camera for ray generation.

use octrace_math::{degrees_to_radians, Point3, Ray, Real, Vector2, Vector3};
use rand::{Rng, RngCore};

/// Pinhole camera generating jittered rays through a pixel grid.
#[derive(Debug, Clone)]
pub struct Camera {
    focal_length: Real,
    vfov: Real, // Vertical field of view in degrees

    // Camera positioning
    center: Point3,
    look_at: Point3,
    up: Vector3,

    // Cached computed values (set by calculate_viewport_parameters())
    pixel00_loc: Point3,
    pixel_delta_u: Vector3,
    pixel_delta_v: Vector3,
}

impl Camera {
    /// Camera at the origin looking down -Z with +Y up.
    pub fn new(focal_length: Real, vfov: Real) -> Self {
        Self {
            focal_length,
            vfov,
            center: Point3::ORIGIN,
            look_at: Point3::new(0.0, 0.0, -1.0),
            up: Vector3::Y,
            pixel00_loc: Point3::ORIGIN,
            pixel_delta_u: Vector3::ZERO,
            pixel_delta_v: Vector3::ZERO,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, center: Point3, look_at: Point3, up: Vector3) -> Self {
        self.center = center;
        self.look_at = look_at;
        self.up = up;
        self
    }

    pub fn focal_length(&self) -> Real {
        self.focal_length
    }

    pub fn vfov(&self) -> Real {
        self.vfov
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn look_at(&self) -> Point3 {
        self.look_at
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn set_look_at(&mut self, look_at: Point3) {
        self.look_at = look_at;
    }

    /// Lay out the viewport for an image of the given size.
    ///
    /// Must be called before generating rays, and again whenever the camera
    /// moves or the image is resized.
    pub fn calculate_viewport_parameters(&mut self, width: usize, height: usize) {
        let aspect_ratio = width as Real / height as Real;
        let theta = degrees_to_radians(self.vfov);
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focal_length;
        let viewport_width = viewport_height * aspect_ratio;

        // Calculate camera basis vectors
        let w = (self.center - self.look_at).normalized();
        let u = self.up.cross(w).normalized();
        let v = w.cross(u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        // Calculate pixel delta vectors
        self.pixel_delta_u = viewport_u / width as Real;
        self.pixel_delta_v = viewport_v / height as Real;

        // Calculate upper left pixel location
        let viewport_upper_left = self.center - self.focal_length * w - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    /// Generate a ray for pixel (i, j), jittered within the pixel.
    pub fn random_ray_at(&self, i: usize, j: usize, rng: &mut dyn RngCore) -> Ray {
        let x_offset = rng.gen::<Real>() - 0.5;
        let y_offset = rng.gen::<Real>() - 0.5;
        self.ray_through(i as Real + x_offset, j as Real + y_offset)
    }

    /// Ray through a point of the pixel grid, in pixel units.
    fn ray_through(&self, x: Real, y: Real) -> Ray {
        let pixel_sample = self.pixel00_loc + x * self.pixel_delta_u + y * self.pixel_delta_v;
        Ray::new(self.center, pixel_sample - self.center)
    }

    /// Turn the view by `angles` degrees: `x` yaws about world +Y, then `y`
    /// pitches about the camera's right axis. The camera center stays put.
    pub fn rotate(&mut self, angles: Vector2) {
        self.look_at = self.look_at.rotate_around(self.center, Vector3::Y, angles.x());

        let (_, right) = self.basis();
        self.look_at = self.look_at.rotate_around(self.center, right, angles.y());
    }

    /// Move the camera and its look-at point together: `y` along the
    /// backward axis, `x` along the right axis.
    pub fn pan(&mut self, delta: Vector2) {
        let (backward, _) = self.basis();
        self.center += backward * delta.y();
        self.look_at += backward * delta.y();

        let (_, right) = self.basis();
        self.center += right * delta.x();
        self.look_at += right * delta.x();
    }

    /// Unit backward and right axes.
    fn basis(&self) -> (Vector3, Vector3) {
        let backward = (self.center - self.look_at).normalized();
        let right = self.up.cross(backward).normalized();
        (backward, right)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0, 90.0)
    }
}
