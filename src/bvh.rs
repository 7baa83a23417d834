mod builder;
mod node;

use thiserror::Error;

pub use self::node::*;
use crate::Triangle;

/// Bounding volume hierarchy over a triangle slice.
///
/// The tree is stored as a flat node array with the root at index 0;
/// children always live at higher indices than their parent, so the array
/// uploads to the tracing kernel without any pointer patching.
#[derive(Clone, Debug)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
}

impl Bvh {
    /// Default leaf-size threshold; callers with measured workloads can pick
    /// their own through [`Self::build_with_max_leaf_size()`].
    pub const DEFAULT_MAX_LEAF_SIZE: usize = 2;

    /// Builds the hierarchy with [`Self::DEFAULT_MAX_LEAF_SIZE`].
    ///
    /// See [`Self::build_with_max_leaf_size()`].
    pub fn build(triangles: &mut [Triangle]) -> Result<Self, Error> {
        Self::build_with_max_leaf_size(triangles, Self::DEFAULT_MAX_LEAF_SIZE)
    }

    /// Builds the hierarchy, physically reordering `triangles` so that every
    /// leaf's range is contiguous.
    ///
    /// The reordered slice and the node array belong together - downstream
    /// code must upload the slice as it is left by this call, and code that
    /// needs a triangle's pre-build identity has to track the correspondence
    /// itself.
    ///
    /// Runs synchronously on the calling thread; the exclusive borrow on
    /// `triangles` lasts exactly as long as the build.
    ///
    /// Coordinates are not sanitized: NaN or infinite vertices flow straight
    /// through the min/max arithmetic and yield garbage bounds.
    pub fn build_with_max_leaf_size(
        triangles: &mut [Triangle],
        max_leaf_size: usize,
    ) -> Result<Self, Error> {
        if triangles.is_empty() {
            return Err(Error::EmptyGeometry);
        }

        if max_leaf_size == 0 {
            return Err(Error::InvalidLeafSize);
        }

        log::debug!(
            "Building BVH; triangles={}, max-leaf-size={}",
            triangles.len(),
            max_leaf_size
        );

        let this = Self {
            nodes: builder::run(triangles, max_leaf_size),
        };

        log::debug!("Built BVH; nodes={}", this.nodes.len());

        if cfg!(debug_assertions) {
            this.validate(triangles.len());
        }

        Ok(this)
    }

    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    pub fn root(&self) -> &BvhNode {
        &self.nodes[0]
    }

    /// Node array as raw bytes, ready for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.nodes)
    }

    /// Walks the tree and asserts its structural invariants: children sit at
    /// higher indices than their parent, parent bounds contain child bounds,
    /// and the leaf ranges cover `[0, triangle_count)` exactly once each.
    ///
    /// A violation is a builder bug, not a runtime condition, hence the
    /// panicking contract.
    pub fn validate(&self, triangle_count: usize) {
        let mut coverage = vec![0u32; triangle_count];
        let mut stack = vec![0];

        while let Some(node_id) = stack.pop() {
            let node = self.nodes[node_id];

            if let Some((left, right)) = node.children() {
                assert!(left > node_id && right > node_id);
                assert!(left < self.nodes.len() && right < self.nodes.len());

                assert!(node.bounds().contains(self.nodes[left].bounds()));
                assert!(node.bounds().contains(self.nodes[right].bounds()));

                stack.push(left);
                stack.push(right);
            } else {
                let range = node.triangles().unwrap();

                assert!(!range.is_empty());
                assert!(range.end <= triangle_count);

                for id in range {
                    coverage[id] += 1;
                }
            }
        }

        assert!(coverage.iter().all(|&visits| visits == 1));
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("cannot build a BVH over zero triangles")]
    EmptyGeometry,

    #[error("max-leaf-size must be positive")]
    InvalidLeafSize,
}

#[cfg(test)]
mod tests {
    use glam::{vec3, Vec3};

    use super::*;

    fn tri(center: Vec3) -> Triangle {
        Triangle::new([
            center + vec3(-0.5, -0.5, 0.0),
            center + vec3(0.5, -0.5, 0.0),
            center + vec3(0.0, 1.0, 0.0),
        ])
    }

    fn line_of_triangles(n: usize) -> Vec<Triangle> {
        (0..n)
            .map(|id| tri(vec3(3.0 * (id as f32), 0.0, 0.0)))
            .collect()
    }

    fn leaves(target: &Bvh) -> Vec<std::ops::Range<usize>> {
        target
            .nodes()
            .iter()
            .filter_map(|node| node.triangles())
            .collect()
    }

    #[test]
    fn single_triangle() {
        let mut triangles = line_of_triangles(1);

        let target = Bvh::build(&mut triangles).unwrap();

        assert_eq!(1, target.nodes().len());
        assert_eq!(Some(0..1), target.root().triangles());
    }

    #[test]
    fn five_triangles_with_max_leaf_size_two() {
        let mut triangles = line_of_triangles(5);

        let target =
            Bvh::build_with_max_leaf_size(&mut triangles, 2).unwrap();

        assert!(!target.root().is_leaf());

        let leaves = leaves(&target);
        let covered: usize = leaves.iter().map(|range| range.len()).sum();

        assert_eq!(5, covered);
        assert!(leaves.iter().all(|range| range.len() <= 2));

        // [0, 5) splits at 2, then [2, 5) splits at 3 - three leaves, two
        // internal nodes
        assert_eq!(3, leaves.len());
        assert_eq!(5, target.nodes().len());
    }

    #[test]
    fn max_leaf_size_larger_than_input() {
        let mut triangles = line_of_triangles(3);

        let target =
            Bvh::build_with_max_leaf_size(&mut triangles, 5).unwrap();

        assert_eq!(1, target.nodes().len());
        assert_eq!(Some(0..3), target.root().triangles());
    }

    #[test]
    fn degenerate_geometry() {
        // Every triangle is the same, so every centroid ties on every axis;
        // the build must still terminate and keep the leaves within bounds
        let mut triangles = vec![tri(vec3(1.0, 2.0, 3.0)); 9];

        let target =
            Bvh::build_with_max_leaf_size(&mut triangles, 2).unwrap();

        target.validate(triangles.len());

        assert!(leaves(&target).iter().all(|range| range.len() <= 2));
    }

    #[test]
    fn root_bounds_cover_all_vertices() {
        let mut triangles = vec![
            tri(vec3(-4.0, 1.0, 0.5)),
            tri(vec3(2.0, -3.0, 8.0)),
            tri(vec3(0.0, 7.0, -2.0)),
            tri(vec3(5.0, 5.0, 5.0)),
        ];

        let expected = crate::BoundingBox::from_points(
            triangles
                .iter()
                .flat_map(|triangle| triangle.positions()),
        );

        let target = Bvh::build(&mut triangles).unwrap();

        assert_eq!(expected, target.root().bounds());
    }

    #[test]
    fn leaf_ranges_partition_the_input() {
        let mut triangles: Vec<_> = (0..64)
            .map(|id| {
                let id = id as f32;

                tri(vec3(
                    (1.3 * id).sin() * 10.0,
                    (0.7 * id).cos() * 10.0,
                    (2.1 * id).sin() * 10.0,
                ))
            })
            .collect();

        let target =
            Bvh::build_with_max_leaf_size(&mut triangles, 3).unwrap();

        target.validate(triangles.len());

        assert!(leaves(&target).iter().all(|range| range.len() <= 3));
    }

    #[test]
    fn rebuild_is_deterministic() {
        let triangles = line_of_triangles(21);

        let mut triangles_a = triangles.clone();
        let mut triangles_b = triangles;

        let target_a =
            Bvh::build_with_max_leaf_size(&mut triangles_a, 2).unwrap();

        let target_b =
            Bvh::build_with_max_leaf_size(&mut triangles_b, 2).unwrap();

        assert_eq!(target_a.nodes(), target_b.nodes());
        assert_eq!(triangles_a, triangles_b);
    }

    #[test]
    fn rejects_empty_geometry() {
        assert_eq!(Err(Error::EmptyGeometry), Bvh::build(&mut []).map(drop));
    }

    #[test]
    fn rejects_zero_max_leaf_size() {
        let mut triangles = line_of_triangles(2);

        assert_eq!(
            Err(Error::InvalidLeafSize),
            Bvh::build_with_max_leaf_size(&mut triangles, 0).map(drop),
        );
    }

    #[test]
    fn as_bytes_spans_all_nodes() {
        let mut triangles = line_of_triangles(5);

        let target = Bvh::build(&mut triangles).unwrap();

        assert_eq!(
            target.nodes().len() * std::mem::size_of::<BvhNode>(),
            target.as_bytes().len(),
        );
    }
}
