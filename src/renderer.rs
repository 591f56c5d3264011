use anyhow::{Result, bail};

use crate::camera::Camera;
use crate::color::Color;
use crate::config::{Config, ShadingMode};
use crate::depth::DepthBuffer;
use crate::matrix::{Mat4f, viewport};
use crate::mesh::{Face, Mesh};
use crate::point2d::{Point2D, Point2Di};
use crate::point3d::{Point3D, cross3, dot3, length, normalize};
use crate::raster::{draw_line, draw_triangle};
use crate::screen::PixelSurface;
use crate::shader::Shading;
use crate::texture::{Texture, TextureMap};
use crate::transform::Transform;
use crate::triangle::Triangle;

/// Everything a frame is drawn from. Read-only while rendering.
pub struct Scene {
    pub mesh: Mesh,
    pub texture: Option<Texture>,
    pub camera: Camera,
    pub model: Transform,
    /// Unit direction the light travels in.
    pub light_dir: Point3D,
    pub shading: ShadingMode,
    pub base_color: Color,
}

impl Scene {
    pub fn new(mesh: Mesh, texture: Option<Texture>, config: &Config) -> Result<Self> {
        let shading = config.render.shading;
        if shading == ShadingMode::Textured {
            if texture.is_none() {
                bail!("textured shading needs a texture");
            }
            let untextured = mesh.faces.iter().filter(|f| f.texcoords.is_none()).count();
            if untextured > 0 {
                log::warn!("{untextured} faces have no texture coordinates");
            }
        }
        if matches!(shading, ShadingMode::Smooth | ShadingMode::Textured) {
            let unnormaled = mesh.faces.iter().filter(|f| f.normals.is_none()).count();
            if unnormaled > 0 {
                log::warn!("{unnormaled} faces have no vertex normals, using the face normal");
            }
        }

        let light_dir = config.lighting.direction();
        if length(light_dir) == 0.0 {
            log::warn!("light direction is zero, every lit face will be culled");
        }

        Ok(Self {
            mesh,
            texture,
            camera: config.camera.camera(),
            model: Transform::default(),
            light_dir: normalize(light_dir),
            shading,
            base_color: config.render.base_color,
        })
    }

    /// Loads the configured mesh and texture. Any failure is fatal to the caller.
    pub fn load(config: &Config) -> Result<Self> {
        let mesh = Mesh::load(&config.assets.mesh)?;
        let texture = match &config.assets.texture {
            Some(path) if config.render.shading == ShadingMode::Textured => Some(Texture::load(path)?),
            _ => None,
        };
        Self::new(mesh, texture, config)
    }

    /// Light intensity at each corner, from the face's vertex normals when it has them.
    fn vertex_intensities(&self, face: &Face, to_light: Point3D, fallback: f32) -> Point3D {
        match self.mesh.face_normals(face) {
            Some(normals) => {
                let [a, b, c] =
                    normals.map(|n| dot3(normalize(self.model.transform_direction(n)), to_light));
                Point3D { x: a, y: b, z: c }
            }
            None => Point3D { x: fallback, y: fallback, z: fallback },
        }
    }

    fn uvs(&self, face: &Face) -> [Point2D; 3] {
        match self.mesh.face_texcoords(face) {
            Some(texcoords) => texcoords.map(|t| t.xy()),
            None => [Point2D::default(); 3],
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub faces: usize,
    pub drawn: usize,
    pub culled: usize,
    pub pixels: usize,
}

/// Owns the pixel surface and depth buffer, both sized once at startup.
pub struct Renderer {
    surface: PixelSurface,
    depth: DepthBuffer,
    viewport: Mat4f,
    clear_color: Color,
}

impl Renderer {
    pub fn new(width: usize, height: usize, depth_range: f32, margin: f32, clear_color: Color) -> Self {
        let (w, h) = (width as f32, height as f32);
        let viewport = viewport(w * margin, h * margin, w * (1.0 - 2.0 * margin), h * (1.0 - 2.0 * margin), depth_range);
        log::debug!("renderer {width}x{height}, depth range {depth_range}, margin {margin}");
        Self {
            surface: PixelSurface::new(width, height),
            depth: DepthBuffer::new(width, height),
            viewport,
            clear_color,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.window.width,
            config.window.height,
            config.render.depth_range,
            config.render.viewport_margin,
            config.render.clear_color,
        )
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    /// `viewport * projection * view`: world space to screen space.
    pub fn world_to_screen(&self, camera: &Camera) -> Mat4f {
        self.viewport * camera.view_projection()
    }

    /// Draws one full frame of `scene`, overwriting the previous one.
    pub fn render(&mut self, scene: &Scene) -> FrameStats {
        self.surface.clear(self.clear_color);
        self.depth.clear();

        let transform = self.world_to_screen(&scene.camera);
        let to_light = -scene.light_dir;
        let mut stats = FrameStats { faces: scene.mesh.faces.len(), ..FrameStats::default() };

        for face in &scene.mesh.faces {
            let world = scene.mesh.face_positions(face).map(|p| scene.model.to_world_point(p));
            let [a, b, c] = world.map(|p| transform.transform_point(p));
            let triangle = Triangle::new(a, b, c);

            let normal = normalize(cross3(world[1] - world[0], world[2] - world[0]));
            let face_intensity = dot3(normal, to_light);

            let shading = match scene.shading {
                ShadingMode::Wireframe => {
                    self.draw_outline(&triangle, scene.base_color);
                    stats.drawn += 1;
                    continue;
                }
                ShadingMode::Flat => Shading::Flat(scene.base_color),
                _ if face_intensity <= 0.0 => {
                    stats.culled += 1;
                    continue;
                }
                ShadingMode::FlatLit => Shading::FlatLit { color: scene.base_color, intensity: face_intensity },
                ShadingMode::Smooth => Shading::Smooth {
                    color: scene.base_color,
                    intensities: scene.vertex_intensities(face, to_light, face_intensity),
                },
                ShadingMode::Textured => {
                    let intensities = scene.vertex_intensities(face, to_light, face_intensity);
                    match &scene.texture {
                        Some(texture) => Shading::Textured { map: TextureMap::new(texture, scene.uvs(face)), intensities },
                        None => Shading::Smooth { color: scene.base_color, intensities },
                    }
                }
            };

            stats.pixels += draw_triangle(&mut self.surface, &mut self.depth, &triangle, &shading);
            stats.drawn += 1;
        }

        log::trace!("{stats:?}");
        stats
    }

    /// Edges with a corner on the camera plane (non-finite after the divide) are skipped.
    fn draw_outline(&mut self, triangle: &Triangle, color: Color) {
        let corner = |p: Point3D| {
            (p.x.is_finite() && p.y.is_finite()).then(|| Point2Di { x: p.x as i32, y: p.y as i32 })
        };
        let corners = [corner(triangle.p1), corner(triangle.p2), corner(triangle.p3)];
        for i in 0..3 {
            if let (Some(a), Some(b)) = (corners[i], corners[(i + 1) % 3]) {
                draw_line(&mut self.surface, a, b, color);
            }
        }
    }
}
