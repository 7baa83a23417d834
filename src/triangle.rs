use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4, Vec4Swizzles};

/// Triangle in the device-facing layout: three positions, three per-vertex
/// normals (all `Vec4` with `w = 0`) and a material id, padded to a 16-byte
/// multiple so a `[Triangle]` uploads as-is.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Triangle {
    pub positions: [Vec4; 3],
    pub normals: [Vec4; 3],
    pub material_id: i32,
    pub _pad: [i32; 3],
}

impl Triangle {
    /// Material id of a triangle that has no material assigned.
    pub const NO_MATERIAL: i32 = -1;

    pub fn new(positions: [Vec3; 3]) -> Self {
        Self {
            positions: positions.map(|p| p.extend(0.0)),
            normals: Default::default(),
            material_id: Self::NO_MATERIAL,
            _pad: Default::default(),
        }
    }

    pub fn with_normals(mut self, normals: [Vec3; 3]) -> Self {
        self.normals = normals.map(|n| n.extend(0.0));
        self
    }

    pub fn with_material_id(mut self, material_id: i32) -> Self {
        self.material_id = material_id;
        self
    }

    pub fn positions(&self) -> [Vec4; 3] {
        self.positions
    }

    /// Average of the three vertices; the key the BVH builder partitions by.
    pub fn center(&self) -> Vec3 {
        self.positions.into_iter().sum::<Vec4>().xyz() / 3.0
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new([Vec3::ZERO; 3])
    }
}
