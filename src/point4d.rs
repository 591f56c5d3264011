use std::ops::{Add, Mul, Sub};

use crate::point3d::Point3D;

/// Homogeneous point, as produced by a 4x4 matrix multiply.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point4D<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Point4D<T> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Point4D { x, y, z, w }
    }
}

impl<T: Copy> Point4D<T> {
    pub fn xyz(&self) -> Point3D<T> {
        Point3D { x: self.x, y: self.y, z: self.z }
    }
}

impl Point4D<f32> {
    /// Perspective divide: x, y and z over w.
    pub fn project_to_3(&self) -> Point3D {
        Point3D { x: self.x / self.w, y: self.y / self.w, z: self.z / self.w }
    }
}

impl<T: Add<Output = T>> Add for Point4D<T> {
    type Output = Point4D<T>;
    fn add(self, other: Point4D<T>) -> Point4D<T> {
        Point4D { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z, w: self.w + other.w }
    }
}

impl<T: Sub<Output = T>> Sub for Point4D<T> {
    type Output = Point4D<T>;
    fn sub(self, other: Point4D<T>) -> Point4D<T> {
        Point4D { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z, w: self.w - other.w }
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Point4D<T> {
    type Output = Point4D<T>;
    fn mul(self, scalar: T) -> Point4D<T> {
        Point4D { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar, w: self.w * scalar }
    }
}
