//! Phong surface material.

use lumen_core::MaterialDesc;

use crate::Color;

/// Surface reflectance for the Phong model.
///
/// The diffuse color also scales the ambient term. The specular color scales
/// both the highlight and the light carried by mirror bounces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    /// Specular exponent
    pub shininess: f32,
}

impl Material {
    pub fn new(diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
        }
    }

    /// A matte material with no highlight and no mirror component.
    pub fn diffuse(diffuse: Color) -> Self {
        Self::new(diffuse, Color::ZERO, 1.0)
    }

    /// Reflectance towards the viewer for one light.
    ///
    /// `light_cosine` is `normal · to_light`, `reflect_cosine` is the cosine
    /// between the mirrored light direction and the view direction. Only the
    /// positive lobe of the highlight contributes.
    #[inline]
    pub fn response(&self, light_cosine: f32, reflect_cosine: f32) -> Color {
        let highlight = if reflect_cosine > 0.0 {
            self.specular * reflect_cosine.powf(self.shininess)
        } else {
            Color::ZERO
        };
        self.diffuse * light_cosine + highlight
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5))
    }
}

impl From<&MaterialDesc> for Material {
    fn from(desc: &MaterialDesc) -> Self {
        Self::new(desc.diffuse, desc.specular, desc.shininess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diffuse_response() {
        let material = Material::diffuse(Color::new(0.8, 0.4, 0.2));
        assert_eq!(material.response(0.5, 1.0), Color::new(0.4, 0.2, 0.1));
    }

    #[test]
    fn test_highlight_only_for_positive_lobe() {
        let material = Material::new(Color::ZERO, Color::ONE, 2.0);

        assert_eq!(material.response(1.0, 0.5), Color::splat(0.25));
        assert_eq!(material.response(1.0, -0.5), Color::ZERO);
        assert_eq!(material.response(1.0, 0.0), Color::ZERO);
    }

    #[test]
    fn test_from_desc() {
        let desc = MaterialDesc::new(Color::X, Color::Y, 32.0);
        let material = Material::from(&desc);

        assert_eq!(material.diffuse, Color::X);
        assert_eq!(material.specular, Color::Y);
        assert_eq!(material.shininess, 32.0);
    }
}
