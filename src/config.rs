//! Startup configuration.
//!
//! Every section has defaults, so a config file only needs the keys it wants
//! to change. Without a file the renderer draws `data/african_head.obj` with
//! its diffuse texture in an 800x800 window, as seen from (0, 0, 3).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::color::{self, Color};
use crate::point3d::Point3D;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub assets: AssetConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub render: RenderConfig,
}

/// Output size. Fixed for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: usize,
    pub height: usize,
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 800, height: 800, title: "Renderer".to_string(), target_fps: 60 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    pub mesh: PathBuf,
    /// Only needed for textured shading.
    pub texture: Option<PathBuf>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            mesh: PathBuf::from("data/african_head.obj"),
            texture: Some(PathBuf::from("data/african_head_diffuse.tga")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { eye: [0.0, 0.0, 3.0], target: [0.0, 0.0, 0.0], up: [0.0, 1.0, 0.0] }
    }
}

impl CameraConfig {
    pub fn camera(&self) -> Camera {
        Camera { eye: point(self.eye), target: point(self.target), up: point(self.up) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Direction the light travels in, world space.
    pub direction: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self { direction: [0.0, 0.0, -1.0] }
    }
}

impl LightingConfig {
    pub fn direction(&self) -> Point3D {
        point(self.direction)
    }
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShadingMode {
    /// Triangle outlines only.
    Wireframe,
    /// Every face in `base_color`, unlit.
    Flat,
    /// One light intensity per face.
    FlatLit,
    /// Per-vertex normals interpolated over `base_color`.
    Smooth,
    /// Texture lit by per-vertex normals.
    #[default]
    Textured,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub shading: ShadingMode,
    pub base_color: Color,
    pub clear_color: Color,
    /// Depth values land in [0, depth_range].
    pub depth_range: f32,
    /// Fraction of the window left empty on each side of the viewport.
    pub viewport_margin: f32,
    /// Model yaw added every frame, radians.
    pub spin: f32,
    /// Where a headless run writes its frame.
    pub snapshot: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shading: ShadingMode::default(),
            base_color: color::WHITE,
            clear_color: color::BLACK,
            depth_range: 255.0,
            viewport_margin: 0.125,
            spin: 0.0,
            snapshot: PathBuf::from("frame.bmp"),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Config from the given file, or defaults when there is none.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

fn point([x, y, z]: [f32; 3]) -> Point3D {
    Point3D { x, y, z }
}
