//! Bounding volume hierarchy construction for triangle meshes.
//!
//! This crate builds the acceleration structure consumed by an external
//! tracing kernel: a binary tree of axis-aligned bounding boxes stored as a
//! flat, index-addressed node array. All of the public types are plain-old
//! data (`bytemuck::Pod`), so the node array and the triangle slice can be
//! uploaded to the device as single contiguous buffers.
//!
//! ```
//! use mesh_bvh::{Bvh, Triangle};
//! use glam::vec3;
//!
//! let mut triangles = vec![
//!     Triangle::new([vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0)]),
//!     Triangle::new([vec3(4.0, 0.0, 0.0), vec3(5.0, 0.0, 0.0), vec3(4.0, 1.0, 0.0)]),
//!     Triangle::new([vec3(8.0, 0.0, 0.0), vec3(9.0, 0.0, 0.0), vec3(8.0, 1.0, 0.0)]),
//! ];
//!
//! let bvh = Bvh::build_with_max_leaf_size(&mut triangles, 4).unwrap();
//!
//! // Three triangles fit into one leaf, so the root covers them all:
//! assert_eq!(Some(0..3), bvh.root().triangles());
//! ```

mod axis;
mod bounding_box;
mod bvh;
mod light;
mod material;
mod mesh;
mod scene;
mod triangle;

pub use self::axis::*;
pub use self::bounding_box::*;
pub use self::bvh::*;
pub use self::light::*;
pub use self::material::*;
pub use self::mesh::*;
pub use self::scene::*;
pub use self::triangle::*;
