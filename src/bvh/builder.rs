use crate::{Axis, BoundingBox, BvhNode, Triangle};

/// Builds the node array over `triangles`, reordering them in place so that
/// every leaf ends up owning a contiguous range.
///
/// Runs iteratively over an explicit task stack - tree depth degenerates to
/// O(n) on skewed input, which would be a stack overflow risk if this
/// recursed.
pub(super) fn run(
    triangles: &mut [Triangle],
    max_leaf_size: usize,
) -> Vec<BvhNode> {
    let mut nodes = Vec::with_capacity(2 * triangles.len());
    let mut stack = Vec::new();

    nodes.push(BvhNode::default());

    stack.push(Task {
        start: 0,
        end: triangles.len(),
        node_id: 0,
    });

    while let Some(Task {
        start,
        end,
        node_id,
    }) = stack.pop()
    {
        let bounds = bounds_of(&triangles[start..end]);
        let count = end - start;

        if count <= max_leaf_size {
            nodes[node_id] = BvhNode::leaf(bounds, start, count);
            continue;
        }

        // count >= 2 here, so start < mid < end and both halves are non-empty
        let mid = (start + end) / 2;

        partition(&mut triangles[start..end], mid - start, bounds.longest_axis());

        let left_id = nodes.len();
        nodes.push(BvhNode::default());

        let right_id = nodes.len();
        nodes.push(BvhNode::default());

        nodes[node_id] = BvhNode::internal(bounds, left_id, right_id);

        stack.push(Task {
            start: mid,
            end,
            node_id: right_id,
        });

        stack.push(Task {
            start,
            end: mid,
            node_id: left_id,
        });
    }

    nodes
}

fn bounds_of(triangles: &[Triangle]) -> BoundingBox {
    BoundingBox::from_points(
        triangles.iter().flat_map(|triangle| triangle.positions()),
    )
}

/// Reorders `triangles` so that the element landing at `mid` separates the
/// range by centroid coordinate along `axis`: everything before `mid`
/// compares less-or-equal to it, everything after compares greater-or-equal.
///
/// This is a selection, not a sort - the order within each half, and the
/// placement of triangles whose centroids tie, are left unspecified.
fn partition(triangles: &mut [Triangle], mid: usize, axis: Axis) {
    triangles.select_nth_unstable_by(mid, |a, b| {
        a.center()[axis].total_cmp(&b.center()[axis])
    });
}

#[derive(Clone, Copy, Debug)]
struct Task {
    start: usize,
    end: usize,
    node_id: usize,
}
