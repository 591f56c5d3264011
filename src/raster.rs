use crate::color::Color;
use crate::depth::DepthBuffer;
use crate::point2d::Point2Di;
use crate::screen::PixelSurface;
use crate::shader::Shading;
use crate::triangle::Triangle;

/// Scan-converts one triangle into `surface`, depth testing against `depth`.
/// Returns how many pixels were written.
///
/// Candidate pixels are the triangle's bounding box, half-open on the high
/// side and clamped to the surface. A pixel is covered when none of its
/// barycentric weights is negative.
pub fn draw_triangle(
    surface: &mut PixelSurface,
    depth: &mut DepthBuffer,
    triangle: &Triangle,
    shading: &Shading,
) -> usize {
    debug_assert_eq!((surface.width(), surface.height()), (depth.width(), depth.height()));

    let (min_x, min_y, max_x, max_y) = triangle.bounds();
    let start_x = min_x.max(0.0).floor() as usize;
    let start_y = min_y.max(0.0).floor() as usize;
    let end_x = max_x.min(surface.width() as f32).ceil() as usize;
    let end_y = max_y.min(surface.height() as f32).ceil() as usize;

    let mut written = 0;
    for y in start_y..end_y {
        for x in start_x..end_x {
            let weights = triangle.barycentric(x as f32, y as f32);
            // written so NaN weights count as outside
            if !(weights.x >= 0.0 && weights.y >= 0.0 && weights.z >= 0.0) {
                continue;
            }

            let z = triangle.interpolate_z(weights);
            let index = depth.index(x, y);
            if !depth.passes(index, z) {
                continue;
            }
            let Some(color) = shading.shade(weights) else {
                continue;
            };
            depth.test_and_write(index, z);

            surface.set(x as i32, y as i32, color);
            written += 1;
        }
    }
    written
}

/// Bresenham line from `p1` to `p2`, both ends included. No depth test.
///
/// The segment is clipped to the surface first, so endpoints anywhere in the
/// `i32` range are fine.
pub fn draw_line(surface: &mut PixelSurface, p1: Point2Di, p2: Point2Di, color: Color) {
    let Some((mut p1, mut p2)) = clip_line(surface, p1, p2) else {
        return;
    };
    let mut steep = false;
    if (p1.x - p2.x).abs() < (p1.y - p2.y).abs() {
        std::mem::swap(&mut p1.x, &mut p1.y);
        std::mem::swap(&mut p2.x, &mut p2.y);
        steep = true;
    }
    if p1.x > p2.x {
        std::mem::swap(&mut p1, &mut p2);
    }

    let delta = p2 - p1;
    let derror = delta.y.abs() * 2;
    let mut error = 0;
    let mut y = p1.y;
    for x in p1.x..=p2.x {
        if steep {
            surface.set(y, x, color);
        } else {
            surface.set(x, y, color);
        }
        error += derror;
        if error > delta.x {
            y += if p2.y > p1.y { 1 } else { -1 };
            error -= delta.x * 2;
        }
    }
}

/// Liang-Barsky clip of `p1..p2` against the surface rectangle. None when the
/// segment misses the surface.
fn clip_line(surface: &PixelSurface, p1: Point2Di, p2: Point2Di) -> Option<(Point2Di, Point2Di)> {
    if surface.width() == 0 || surface.height() == 0 {
        return None;
    }
    let max_x = (surface.width() - 1) as f64;
    let max_y = (surface.height() - 1) as f64;
    let (x1, y1) = (p1.x as f64, p1.y as f64);
    let dx = p2.x as f64 - x1;
    let dy = p2.y as f64 - y1;

    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, x1), (dx, max_x - x1), (-dy, y1), (dy, max_y - y1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Point2Di::new((x1 + t * dx).round() as i32, (y1 + t * dy).round() as i32);
    Some((at(t0), at(t1)))
}
