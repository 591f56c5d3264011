use crate::color::{Color, apply_lighting};
use crate::point3d::{Point3D, dot3};
use crate::texture::TextureMap;

/// How a triangle's covered pixels get their color. Chosen per draw call.
#[derive(Copy, Clone)]
pub enum Shading<'a> {
    /// One color, no lighting.
    Flat(Color),
    /// One light intensity for the whole face.
    FlatLit { color: Color, intensity: f32 },
    /// Per-vertex intensities interpolated across the face (Gouraud).
    Smooth { color: Color, intensities: Point3D },
    /// Texture color lit by interpolated per-vertex intensities.
    Textured { map: TextureMap<'a>, intensities: Point3D },
}

impl Shading<'_> {
    /// Color at the given barycentric weights, or `None` when the fragment is
    /// unlit and should be dropped.
    #[inline(always)]
    pub fn shade(&self, bary: Point3D) -> Option<Color> {
        match *self {
            Shading::Flat(color) => Some(color),
            Shading::FlatLit { color, intensity } => Some(apply_lighting(color, intensity)),
            Shading::Smooth { color, intensities } => {
                let intensity = dot3(bary, intensities);
                if intensity <= 0.0 {
                    return None;
                }
                Some(apply_lighting(color, intensity))
            }
            Shading::Textured { map, intensities } => {
                let intensity = dot3(bary, intensities);
                if intensity <= 0.0 {
                    return None;
                }
                Some(apply_lighting(map.sample(bary), intensity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{RED, WHITE};
    use crate::point2d::Point2D;
    use crate::texture::Texture;

    #[test]
    fn test_flat_ignores_weights() {
        let s = Shading::Flat(RED);
        assert_eq!(s.shade(Point3D::new(0.2, 0.3, 0.5)), Some(RED));
    }

    #[test]
    fn test_flat_lit() {
        let s = Shading::FlatLit { color: WHITE, intensity: 0.5 };
        assert_eq!(s.shade(Point3D::new(1.0, 0.0, 0.0)), Some(Color::rgb(127, 127, 127)));
    }

    #[test]
    fn test_smooth_interpolates_and_discards_unlit() {
        let s = Shading::Smooth { color: WHITE, intensities: Point3D::new(1.0, 0.0, -1.0) };
        assert_eq!(s.shade(Point3D::new(1.0, 0.0, 0.0)), Some(WHITE));
        assert_eq!(s.shade(Point3D::new(0.5, 0.5, 0.0)), Some(Color::rgb(127, 127, 127)));
        assert_eq!(s.shade(Point3D::new(0.0, 1.0, 0.0)), None);
        assert_eq!(s.shade(Point3D::new(0.0, 0.0, 1.0)), None);
    }

    #[test]
    fn test_textured() {
        let t = Texture::from_pixels(1, 1, vec![Color::rgb(200, 100, 0)]).unwrap();
        let map = TextureMap::new(&t, [Point2D::default(); 3]);
        let s = Shading::Textured { map, intensities: Point3D::new(0.5, 0.5, 0.5) };
        assert_eq!(s.shade(Point3D::new(1.0, 0.0, 0.0)), Some(Color::rgb(100, 50, 0)));
    }
}
