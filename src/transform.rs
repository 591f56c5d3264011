use crate::matrix::Mat3f;
use crate::point3d::Point3D;

/// Model placement: a yaw about +y, then a pitch about +x, then a translation.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Transform {
    pub yaw: f32,
    pub pitch: f32,
    pub position: Point3D,
}

impl Transform {
    pub fn update_transform(&mut self, new_yaw: f32, new_pitch: f32, new_position: Point3D) {
        self.yaw = new_yaw;
        self.pitch = new_pitch;
        self.position = new_position;
    }

    /// Rotation as a matrix whose columns are the rotated i, j and k basis vectors.
    pub fn basis(&self) -> Mat3f {
        let yaw = Mat3f::from_columns(
            Point3D { x: self.yaw.cos(), y: 0.0, z: self.yaw.sin() },
            Point3D { x: 0.0, y: 1.0, z: 0.0 },
            Point3D { x: -self.yaw.sin(), y: 0.0, z: self.yaw.cos() },
        );
        let pitch = Mat3f::from_columns(
            Point3D { x: 1.0, y: 0.0, z: 0.0 },
            Point3D { x: 0.0, y: self.pitch.cos(), z: -self.pitch.sin() },
            Point3D { x: 0.0, y: self.pitch.sin(), z: self.pitch.cos() },
        );
        yaw * pitch
    }

    /// Rotations are orthonormal, so the inverse is the transpose.
    pub fn inverse_basis(&self) -> Mat3f {
        self.basis().transpose()
    }

    pub fn to_world_point(&self, point: Point3D) -> Point3D {
        self.basis() * point + self.position
    }

    pub fn to_local_point(&self, world_point: Point3D) -> Point3D {
        self.inverse_basis() * (world_point - self.position)
    }

    pub fn transform_direction(&self, dir: Point3D) -> Point3D {
        self.basis() * dir
    }
}
