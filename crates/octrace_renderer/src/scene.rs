//! Scene container: objects plus the material table they index into.

use octrace_math::{Interval, Ray};

use crate::{HitRecord, Hittable, HittableList, Material, MaterialId};

#[derive(Debug, Clone, Default)]
pub struct Scene {
    materials: Vec<Material>,
    objects: HittableList,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material and get the id objects use to refer to it.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Look up a material.
    ///
    /// # Panics
    ///
    /// If `id` came from a different scene and is out of range.
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn add(&mut self, object: impl Into<Hittable>) {
        self.objects.add(object);
    }

    pub fn objects(&self) -> &HittableList {
        &self.objects
    }

    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        self.objects.hit(ray, ray_t)
    }
}
