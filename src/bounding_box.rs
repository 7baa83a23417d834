use std::ops::Add;

use bytemuck::{Pod, Zeroable};
use glam::{vec4, Vec3, Vec4, Vec4Swizzles};

use crate::Axis;

/// Axis-aligned bounding box.
///
/// The `w` components exist only for GPU-friendly alignment and carry no
/// meaning; they stay zero throughout. A default-constructed box is the
/// degenerate "inside-out" box (min = `f32::MAX`, max = `f32::MIN` per used
/// component) that encloses nothing - growing it by any point makes it valid.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BoundingBox {
    min: Vec4,
    max: Vec4,
}

impl BoundingBox {
    pub fn from_points(points: impl IntoIterator<Item = Vec4>) -> Self {
        points.into_iter().fold(Self::default(), Self::add)
    }

    pub fn grow(&mut self, p: Vec4) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn min(&self) -> Vec4 {
        self.min
    }

    pub fn max(&self) -> Vec4 {
        self.max
    }

    pub fn extent(&self) -> Vec3 {
        self.max.xyz() - self.min.xyz()
    }

    /// Returns the axis along which this box is widest.
    ///
    /// Ties go to the later axis: X wins only when it strictly dominates both
    /// Y and Z, and Y wins only when it strictly dominates Z, so a cube (or a
    /// point) splits along Z. The rule is arbitrary but fixed - given the same
    /// geometry, the same axis comes out every time.
    pub fn longest_axis(&self) -> Axis {
        let extent = self.extent();

        if extent.x > extent.y && extent.x > extent.z {
            Axis::X
        } else if extent.y > extent.z {
            Axis::Y
        } else {
            Axis::Z
        }
    }

    /// Returns whether `other` fits entirely inside this box (on x, y and z).
    pub fn contains(&self, other: Self) -> bool {
        self.min.xyz().cmple(other.min.xyz()).all()
            && self.max.xyz().cmpge(other.max.xyz()).all()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: vec4(f32::MAX, f32::MAX, f32::MAX, 0.0),
            max: vec4(f32::MIN, f32::MIN, f32::MIN, 0.0),
        }
    }
}

impl Add<Vec4> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Vec4) -> Self::Output {
        self.grow(rhs);
        self
    }
}
