use crate::{Bvh, Error, Light, Material, Mesh, Triangle};

/// Flattened scene: every mesh's triangles merged into one array, each
/// triangle stamped with its mesh's material id on the way in.
///
/// The tracing kernel addresses triangles by index into this single array, so
/// the BVH is built over it as a whole - see [`Scene::build_bvh()`].
#[derive(Clone, Debug, Default)]
pub struct Scene {
    materials: Vec<Material>,
    lights: Vec<Light>,
    triangles: Vec<Triangle>,
}

impl Scene {
    /// Adds a material and returns its id, for use with
    /// [`Self::add_mesh()`].
    pub fn add_material(&mut self, material: Material) -> i32 {
        self.materials.push(material);

        (self.materials.len() - 1) as i32
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Appends `mesh`'s triangles, overwriting each triangle's material id
    /// with `material_id` (use [`Triangle::NO_MATERIAL`] to keep none).
    pub fn add_mesh(&mut self, mesh: &Mesh, material_id: i32) {
        self.triangles.extend(
            mesh.triangles()
                .iter()
                .map(|triangle| triangle.with_material_id(material_id)),
        );
    }

    /// Builds the BVH over the scene's triangles, reordering them in place.
    ///
    /// Call after the last mesh has been added - the node array refers to
    /// triangles by index, so appending afterwards would invalidate it.
    pub fn build_bvh(&mut self, max_leaf_size: usize) -> Result<Bvh, Error> {
        Bvh::build_with_max_leaf_size(&mut self.triangles, max_leaf_size)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Triangle array as raw bytes, ready for a buffer upload.
    pub fn triangles_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn materials_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.materials)
    }

    pub fn lights_as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}
