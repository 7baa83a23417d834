use crate::Triangle;

/// Triangle soup for a single object, before it gets flattened into the
/// scene-wide triangle array.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn add(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn accumulates_triangles() {
        let mut target = Mesh::default();

        assert!(target.is_empty());

        target.add(Triangle::new([
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        ]));

        assert_eq!(1, target.len());

        let rebuilt = Mesh::new(target.triangles().to_vec());

        assert_eq!(target.triangles(), rebuilt.triangles());
    }
}
