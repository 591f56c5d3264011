use crate::matrix::{Mat4f, look_at, projection, projection_coeff};
use crate::point3d::Point3D;

/// Fixed camera looking from `eye` at `target`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Point3D,
    pub target: Point3D,
    pub up: Point3D,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            eye: Point3D { x: 0.0, y: 0.0, z: 3.0 },
            target: Point3D::default(),
            up: Point3D { x: 0.0, y: 1.0, z: 0.0 },
        }
    }
}

impl Camera {
    pub fn view(&self) -> Mat4f {
        look_at(self.eye, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4f {
        projection(projection_coeff(self.eye, self.target))
    }

    /// `projection * view`, ready to be left-multiplied by a viewport.
    pub fn view_projection(&self) -> Mat4f {
        self.projection() * self.view()
    }
}
