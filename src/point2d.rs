use std::ops::{Add, Div, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point2D<T = f32> {
    pub x: T,
    pub y: T,
}

/// Integer screen position, used by line drawing.
pub type Point2Di = Point2D<i32>;

impl<T> Point2D<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2D { x, y }
    }
}

impl<T: Add<Output = T>> Add for Point2D<T> {
    type Output = Point2D<T>;
    fn add(self, other: Point2D<T>) -> Point2D<T> {
        Point2D { x: self.x + other.x, y: self.y + other.y }
    }
}

impl<T: Sub<Output = T>> Sub for Point2D<T> {
    type Output = Point2D<T>;
    fn sub(self, other: Point2D<T>) -> Point2D<T> {
        Point2D { x: self.x - other.x, y: self.y - other.y }
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Point2D<T> {
    type Output = Point2D<T>;
    fn mul(self, scalar: T) -> Point2D<T> {
        Point2D { x: self.x * scalar, y: self.y * scalar }
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Point2D<T> {
    type Output = Point2D<T>;
    fn div(self, scalar: T) -> Point2D<T> {
        Point2D { x: self.x / scalar, y: self.y / scalar }
    }
}

#[inline(always)]
pub fn dot2<T: Mul<Output = T> + Add<Output = T>>(a: Point2D<T>, b: Point2D<T>) -> T {
    a.x * b.x + a.y * b.y
}
