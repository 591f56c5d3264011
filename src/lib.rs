//! Software triangle rasterizer: a textured mesh goes through a
//! model/view/projection/viewport pipeline and comes out as lit,
//! depth-tested pixels in an in-memory ARGB surface.

// Geometry
pub mod point2d;
pub mod point3d;
pub mod point4d;
pub mod matrix;
pub mod transform;
pub mod camera;
pub mod triangle;

// Pixels
pub mod color;
pub mod screen;
pub mod depth;
pub mod texture;
pub mod shader;
pub mod raster;

// Frame driver
pub mod mesh;
pub mod config;
pub mod renderer;
#[cfg(feature = "window")]
pub mod window;
