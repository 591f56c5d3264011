use std::ops::{Add, Mul};

use crate::point3d::{Point3D, cross3, length, normalize};
use crate::point4d::Point4D;

/// Row-major 3x3 matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3f {
    pub dim: [f32; 9],
}

/// Row-major 4x4 matrix. Transforms compose by left-multiplication:
/// `viewport * projection * view * vertex`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4f {
    pub dim: [f32; 16],
}

impl Mat3f {
    pub const IDENTITY: Mat3f = Mat3f {
        dim: [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ],
    };

    /// Matrix whose columns are the given basis vectors.
    pub fn from_columns(i: Point3D, j: Point3D, k: Point3D) -> Mat3f {
        Mat3f {
            dim: [
                i.x, j.x, k.x,
                i.y, j.y, k.y,
                i.z, j.z, k.z,
            ],
        }
    }

    pub fn column(&self, col: usize) -> Point3D {
        Point3D { x: self.get(0, col), y: self.get(1, col), z: self.get(2, col) }
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.dim[row * 3 + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.dim[row * 3 + col] = value;
    }

    pub fn transpose(&self) -> Mat3f {
        let mut result = *self;
        for row in 0..3 {
            for col in 0..3 {
                result.set(col, row, self.get(row, col));
            }
        }
        result
    }
}

impl Add for Mat3f {
    type Output = Mat3f;
    fn add(self, rhs: Mat3f) -> Mat3f {
        let mut result = self;
        for (lhs, rhs) in result.dim.iter_mut().zip(rhs.dim) {
            *lhs += rhs;
        }
        result
    }
}

impl Mul for Mat3f {
    type Output = Mat3f;
    fn mul(self, rhs: Mat3f) -> Mat3f {
        let mut result = Mat3f { dim: [0.0; 9] };
        for row in 0..3 {
            for col in 0..3 {
                let value = (0..3).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
                result.set(row, col, value);
            }
        }
        result
    }
}

impl Mul<Point3D> for Mat3f {
    type Output = Point3D;
    fn mul(self, v: Point3D) -> Point3D {
        let row = |r: usize| self.get(r, 0) * v.x + self.get(r, 1) * v.y + self.get(r, 2) * v.z;
        Point3D { x: row(0), y: row(1), z: row(2) }
    }
}

impl Mat4f {
    pub const IDENTITY: Mat4f = Mat4f {
        dim: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.dim[row * 4 + col]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.dim[row * 4 + col] = value;
    }

    /// Transform a model-space point all the way to screen space, including
    /// the perspective divide.
    pub fn transform_point(&self, point: Point3D) -> Point3D {
        (*self * point).project_to_3()
    }
}

impl Add for Mat4f {
    type Output = Mat4f;
    fn add(self, rhs: Mat4f) -> Mat4f {
        let mut result = self;
        for (lhs, rhs) in result.dim.iter_mut().zip(rhs.dim) {
            *lhs += rhs;
        }
        result
    }
}

impl Mul for Mat4f {
    type Output = Mat4f;
    fn mul(self, rhs: Mat4f) -> Mat4f {
        let mut result = Mat4f { dim: [0.0; 16] };
        for row in 0..4 {
            for col in 0..4 {
                let value = (0..4).map(|k| self.get(row, k) * rhs.get(k, col)).sum();
                result.set(row, col, value);
            }
        }
        result
    }
}

impl Mul<Point4D> for Mat4f {
    type Output = Point4D;
    fn mul(self, v: Point4D) -> Point4D {
        let row = |r: usize| {
            self.get(r, 0) * v.x + self.get(r, 1) * v.y + self.get(r, 2) * v.z + self.get(r, 3) * v.w
        };
        Point4D { x: row(0), y: row(1), z: row(2), w: row(3) }
    }
}

/// Homogeneous multiply with w = 1.
impl Mul<Point3D> for Mat4f {
    type Output = Point4D;
    fn mul(self, v: Point3D) -> Point4D {
        self * v.extend(1.0)
    }
}

/// Maps [-1,1]^2 onto the `width` x `height` rectangle at (`x`, `y`) and
/// z from [-1,1] onto [0, `depth`].
pub fn viewport(x: f32, y: f32, width: f32, height: f32, depth: f32) -> Mat4f {
    let mut m = Mat4f::IDENTITY;
    m.set(0, 3, x + width * 0.5);
    m.set(1, 3, y + height * 0.5);
    m.set(2, 3, depth * 0.5);

    m.set(0, 0, width * 0.5);
    m.set(1, 1, height * 0.5);
    m.set(2, 2, depth * 0.5);
    m
}

/// Simple central projection: w becomes `1 + coeff * z`.
/// For a camera at distance c from its target, `coeff = -1 / c`.
pub fn projection(coeff: f32) -> Mat4f {
    let mut m = Mat4f::IDENTITY;
    m.set(3, 2, coeff);
    m
}

/// View matrix placing `eye` on the +z axis of the result, looking at `target`
/// which lands on the origin.
pub fn look_at(eye: Point3D, target: Point3D, up: Point3D) -> Mat4f {
    let z = normalize(eye - target);
    let x = normalize(cross3(up, z));
    let y = normalize(cross3(z, x));

    let mut rotation = Mat4f::IDENTITY;
    let mut translation = Mat4f::IDENTITY;
    for (row, axis) in [x, y, z].into_iter().enumerate() {
        rotation.set(row, 0, axis.x);
        rotation.set(row, 1, axis.y);
        rotation.set(row, 2, axis.z);
    }
    translation.set(0, 3, -target.x);
    translation.set(1, 3, -target.y);
    translation.set(2, 3, -target.z);
    rotation * translation
}

/// Projection coefficient for a camera at `eye` looking at `target`.
pub fn projection_coeff(eye: Point3D, target: Point3D) -> f32 {
    let distance = length(eye - target);
    if distance == 0.0 { 0.0 } else { -1.0 / distance }
}
