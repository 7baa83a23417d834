use bytemuck::{Pod, Zeroable};
use glam::Vec4;

/// Phong-style material in the device-facing layout.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Material {
    pub diffuse_color: Vec4,
    pub specular_color: Vec4,
    pub shininess: f32,
    pub reflectivity: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl Material {
    pub fn with_diffuse_color(mut self, diffuse_color: Vec4) -> Self {
        self.diffuse_color = diffuse_color;
        self
    }

    pub fn with_specular_color(mut self, specular_color: Vec4) -> Self {
        self.specular_color = specular_color;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }
}
