use crate::point3d::{Point3D, cross3};

/// Below this |cross.z| (twice the screen-space area) a triangle is treated as degenerate.
pub const DEGENERATE_EPSILON: f32 = 0.01;
/// How far the weights may sum away from 1 before the solve is rejected.
pub const BARYCENTRIC_SUM_TOLERANCE: f32 = 0.001;

/// Returned for points that can't be expressed in a triangle. Negative first
/// weight, so callers discard it like any outside point.
pub const OUTSIDE: Point3D = Point3D { x: -1.0, y: 1.0, z: 1.0 };

/// Screen-space triangle. x and y are pixels; z is only carried along for
/// depth interpolation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub p1: Point3D,
    pub p2: Point3D,
    pub p3: Point3D,
}

impl Triangle {
    pub fn new(p1: Point3D, p2: Point3D, p3: Point3D) -> Self {
        Triangle { p1, p2, p3 }
    }

    /// Barycentric weights of (x, y) for (p1, p2, p3). Any negative weight
    /// means the point lies outside.
    #[inline(always)]
    pub fn barycentric(&self, x: f32, y: f32) -> Point3D {
        let (p1, p2, p3) = (self.p1, self.p2, self.p3);
        let u = Point3D { x: p3.x - p1.x, y: p2.x - p1.x, z: p1.x - x };
        let v = Point3D { x: p3.y - p1.y, y: p2.y - p1.y, z: p1.y - y };
        let c = cross3(u, v);

        if c.z.abs() < DEGENERATE_EPSILON {
            return OUTSIDE;
        }

        let normalized_x = c.x / c.z;
        let normalized_y = c.y / c.z;
        let bary = Point3D { x: 1.0 - (normalized_x + normalized_y), y: normalized_y, z: normalized_x };

        if ((bary.x + bary.y + bary.z) - 1.0).abs() > BARYCENTRIC_SUM_TOLERANCE {
            return OUTSIDE;
        }
        bary
    }

    /// Depth at the given weights.
    #[inline(always)]
    pub fn interpolate_z(&self, bary: Point3D) -> f32 {
        self.p1.z * bary.x + self.p2.z * bary.y + self.p3.z * bary.z
    }

    /// (min_x, min_y, max_x, max_y) of the 2D projection.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let (a, b, c) = (self.p1, self.p2, self.p3);
        (
            a.x.min(b.x).min(c.x),
            a.y.min(b.y).min(c.y),
            a.x.max(b.x).max(c.x),
            a.y.max(b.y).max(c.y),
        )
    }
}
