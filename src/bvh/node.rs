use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::BoundingBox;

/// Single node of the flattened hierarchy.
///
/// Children and triangle ranges are encoded the way the tracing kernel reads
/// them: a leaf has `left == right == -1` and owns the triangle range
/// `[start, start + count)`; an internal node has `start == count == -1` and
/// points at two later slots in the node array. Node 0 is always the root.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BvhNode {
    pub bounds: BoundingBox,
    pub left: i32,
    pub right: i32,
    pub start: i32,
    pub count: i32,
}

impl BvhNode {
    pub const NONE: i32 = -1;

    pub(crate) fn leaf(bounds: BoundingBox, start: usize, count: usize) -> Self {
        Self {
            bounds,
            left: Self::NONE,
            right: Self::NONE,
            start: start as i32,
            count: count as i32,
        }
    }

    pub(crate) fn internal(bounds: BoundingBox, left: usize, right: usize) -> Self {
        Self {
            bounds,
            left: left as i32,
            right: right as i32,
            start: Self::NONE,
            count: Self::NONE,
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn is_leaf(&self) -> bool {
        self.left == Self::NONE
    }

    /// Indices of the left and right child, if this node is internal.
    pub fn children(&self) -> Option<(usize, usize)> {
        if self.is_leaf() {
            None
        } else {
            Some((self.left as usize, self.right as usize))
        }
    }

    /// Triangle range owned by this node, if it is a leaf.
    pub fn triangles(&self) -> Option<Range<usize>> {
        if self.is_leaf() {
            let start = self.start as usize;

            Some(start..(start + (self.count as usize)))
        } else {
            None
        }
    }
}

impl Default for BvhNode {
    fn default() -> Self {
        Self {
            bounds: Default::default(),
            left: Self::NONE,
            right: Self::NONE,
            start: 0,
            count: 0,
        }
    }
}
