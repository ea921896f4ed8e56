use lumen_core::LightDesc;

use crate::{Color, Vec3};

/// A point light. The color is an intensity and may exceed 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }
}

impl From<&LightDesc> for Light {
    fn from(desc: &LightDesc) -> Self {
        Self::new(desc.position, desc.color)
    }
}
