use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::point2d::Point2D;
use crate::point4d::Point4D;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3D<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point3D<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Point3D { x, y, z }
    }
}

impl<T: Copy> Point3D<T> {
    /// The x/y components as a 2D point.
    pub fn xy(&self) -> Point2D<T> {
        Point2D { x: self.x, y: self.y }
    }

    /// Homogeneous point with the given w.
    pub fn extend(&self, w: T) -> Point4D<T> {
        Point4D { x: self.x, y: self.y, z: self.z, w }
    }
}

impl<T: Add<Output = T>> Add for Point3D<T> {
    type Output = Point3D<T>;
    fn add(self, other: Point3D<T>) -> Point3D<T> {
        Point3D { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl<T: Add<Output = T> + Copy> AddAssign for Point3D<T> {
    fn add_assign(&mut self, other: Point3D<T>) {
        *self = *self + other;
    }
}

impl<T: Sub<Output = T>> Sub for Point3D<T> {
    type Output = Point3D<T>;
    fn sub(self, other: Point3D<T>) -> Point3D<T> {
        Point3D { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl<T: Sub<Output = T> + Copy> SubAssign for Point3D<T> {
    fn sub_assign(&mut self, other: Point3D<T>) {
        *self = *self - other;
    }
}

impl<T: Neg<Output = T>> Neg for Point3D<T> {
    type Output = Point3D<T>;
    fn neg(self) -> Point3D<T> {
        Point3D { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Point3D<T> {
    type Output = Point3D<T>;
    fn mul(self, scalar: T) -> Point3D<T> {
        Point3D { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar }
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Point3D<T> {
    type Output = Point3D<T>;
    fn div(self, scalar: T) -> Point3D<T> {
        Point3D { x: self.x / scalar, y: self.y / scalar, z: self.z / scalar }
    }
}

#[inline(always)]
pub fn dot3<T: Mul<Output = T> + Add<Output = T>>(a: Point3D<T>, b: Point3D<T>) -> T {
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[inline(always)]
pub fn cross3<T: Mul<Output = T> + Sub<Output = T> + Copy>(a: Point3D<T>, b: Point3D<T>) -> Point3D<T> {
    Point3D {
        x: a.y * b.z - a.z * b.y,
        y: a.z * b.x - a.x * b.z,
        z: a.x * b.y - a.y * b.x,
    }
}

pub fn length(vec: Point3D) -> f32 {
    dot3(vec, vec).sqrt()
}

/// Unit-length copy. A zero vector comes back unchanged.
pub fn normalize(vec: Point3D) -> Point3D {
    let length = length(vec);
    if length != 0.0 { vec / length } else { vec }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_and_cross() {
        let a: Point3D = Point3D::new(1.0, 2.0, 3.0);
        let b: Point3D = Point3D::new(4.0, 5.0, 6.0);
        assert!((dot3(a, b) - 32.0).abs() < 1e-6);

        let c: Point3D = cross3(Point3D::new(1.0, 0.0, 0.0), Point3D::new(0.0, 1.0, 0.0));
        assert!((c.z - 1.0).abs() < 1e-6);
        assert!(c.x.abs() < 1e-6 && c.y.abs() < 1e-6);
    }

    #[test]
    fn test_integer_cross() {
        let c = cross3(Point3D::new(2, 0, 0), Point3D::new(0, 3, 0));
        assert_eq!(c, Point3D::new(0, 0, 6));
    }

    #[test]
    fn test_normalize() {
        let n = normalize(Point3D::new(3.0, 0.0, 4.0));
        assert!((length(n) - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
        assert_eq!(normalize(Point3D::default()), Point3D::default());
    }

    #[test]
    fn test_xy_and_extend() {
        let p: Point3D = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(p.xy(), Point2D::new(1.0, 2.0));
        assert_eq!(p.extend(1.0), Point4D::new(1.0, 2.0, 3.0, 1.0));
    }
}
