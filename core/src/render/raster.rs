//! Translation of vector shapes into discrete pixels in the framebuffer.
//!
//! A triangle is rasterized by visiting every pixel in its screen-space
//! bounding box and computing the barycentric coordinates of the pixel with
//! respect to the triangle. Pixels whose coordinates are all non-negative
//! are inside the triangle (edges included) and are emitted as *fragments*
//! that carry an interpolated depth value.
//!
//! If depth testing (z-buffering) is enabled, the fragments are then tested
//! against the current depth value in their position by the render
//! [target][super::target]. Fragments that fail the test are discarded.

use crate::math::{Vec2, Vec3, vec2, vec3};
use crate::util::rect::Rect;

/// Point in screen space.
/// `x` and `y` are viewport pixel coordinates, `z` is depth.
pub type ScreenPt = Vec3;

/// A fragment, or a single "pixel" in a rasterized primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frag {
    /// The column of the pixel.
    pub x: usize,
    /// The row of the pixel.
    pub y: usize,
    /// The interpolated depth of the fragment; greater is nearer.
    pub z: f64,
    /// The barycentric weights of the triangle's vertices at this pixel.
    pub bary: Vec3,
}

/// Barycentric coordinates returned for degenerate triangles.
///
/// The negative first weight causes the pixel to be rejected.
pub const DEGENERATE: Vec3 = vec3(-1.0, 1.0, 1.0);

/// Returns the pixel-space bounding box of a triangle, clamped to a target
/// of size `w` × `h`.
///
/// The box covers pixels `floor(min)..=ceil(max)` on each axis, intersected
/// with `0..w` and `0..h`. The result is empty if the triangle lies
/// entirely outside the target.
///
/// # Examples
/// ```
/// use tinyrast_core::math::vec3;
/// use tinyrast_core::render::raster::bounding_box;
///
/// let tri = [vec3(-5.5, 2.2, 0.0), vec3(3.0, 8.9, 0.0), vec3(1.0, 1.0, 0.0)];
/// let bb = bounding_box(&tri, (5, 5));
/// assert_eq!(bb.x_range(), 0..4);
/// assert_eq!(bb.y_range(), 1..5);
/// ```
pub fn bounding_box(verts: &[ScreenPt; 3], (w, h): (usize, usize)) -> Rect {
    use crate::math::float::f64;

    let (mut min, mut max) = (verts[0], verts[0]);
    for v in &verts[1..] {
        min = min.zip_map(*v, |a, b| a.min(b));
        max = max.zip_map(*v, |a, b| a.max(b));
    }
    // Float-to-int casts saturate; NaN maps to zero
    let extent = |lo, hi, n: usize| {
        let lo = (f64::floor(lo) as i64).max(0);
        let hi = (f64::ceil(hi) as i64).min(n as i64 - 1);
        if lo > hi {
            0..0
        } else {
            lo as usize..hi as usize + 1
        }
    };
    let xs = extent(min.x(), max.x(), w);
    let ys = extent(min.y(), max.y(), h);
    if xs.is_empty() || ys.is_empty() {
        Rect::default()
    } else {
        (xs, ys).into()
    }
}

/// Returns the barycentric coordinates of `p` with respect to the triangle
/// `verts`, considering only the x and y components of the vertices.
///
/// The returned weights (u, v, w) belong to the first, second, and third
/// vertex, respectively, and sum to one. If the triangle is degenerate
/// (its doubled area is less than one pixel), returns [`DEGENERATE`].
///
/// # Examples
/// ```
/// use tinyrast_core::math::{vec2, vec3};
/// use tinyrast_core::render::raster::barycentric;
///
/// let tri = [vec3(0.0, 0.0, 0.0), vec3(4.0, 0.0, 0.0), vec3(0.0, 4.0, 0.0)];
/// assert_eq!(barycentric(&tri, vec2(0.0, 0.0)), vec3(1.0, 0.0, 0.0));
/// assert_eq!(barycentric(&tri, vec2(1.0, 2.0)), vec3(0.25, 0.25, 0.5));
/// ```
pub fn barycentric(verts: &[ScreenPt; 3], p: Vec2) -> Vec3 {
    use crate::math::float::f64;

    let [a, b, c] = verts;
    let s = vec3(c.x() - a.x(), b.x() - a.x(), a.x() - p.x())
        .cross(&vec3(c.y() - a.y(), b.y() - a.y(), a.y() - p.y()));

    if f64::abs(s.z()) < 1.0 {
        return DEGENERATE;
    }
    vec3(1.0 - (s.x() + s.y()) / s.z(), s.y() / s.z(), s.x() / s.z())
}

/// Rasterizes a filled triangle defined by three screen-space points.
///
/// Invokes `frag_fn` for each pixel of the `w` × `h` target whose
/// barycentric coordinates are all non-negative, in row-major order.
/// Pixels exactly on an edge are included, so pixels on an edge shared by
/// two triangles are emitted for both.
///
/// Returns the number of fragments emitted.
pub fn tri_fill<F>(
    verts: [ScreenPt; 3],
    dims: (usize, usize),
    mut frag_fn: F,
) -> usize
where
    F: FnMut(Frag),
{
    let [z0, z1, z2] = verts.map(|v| v.z());
    let bb = bounding_box(&verts, dims);
    let mut n = 0;
    for y in bb.y_range() {
        for x in bb.x_range() {
            let bary = barycentric(&verts, vec2(x as f64, y as f64));
            if bary.0.iter().any(|&c| c < 0.0) {
                continue;
            }
            let z = z0 * bary.x() + z1 * bary.y() + z2 * bary.z();
            frag_fn(Frag { x, y, z, bary });
            n += 1;
        }
    }
    n
}

/// Rasterizes a one-pixel-thick line between two endpoints using
/// Bresenham's algorithm.
///
/// The endpoints are rounded to the nearest pixel. The segment is then
/// clipped to the `w` × `h` target, so arbitrarily distant endpoints cost
/// no more than the visible part of the line. Invokes `pixel_fn` for each
/// pixel of the line inside the target. Both endpoints are drawn if they
/// are inside. Nothing is drawn if either endpoint is not finite.
///
/// # Examples
/// ```
/// use tinyrast_core::math::vec2;
/// use tinyrast_core::render::raster::line;
///
/// let mut pixels = vec![];
/// line([vec2(0.0, 0.0), vec2(3.0, 1.0)], (10, 10), |x, y| pixels.push((x, y)));
/// assert_eq!(pixels, [(0, 0), (1, 0), (2, 1), (3, 1)]);
/// ```
pub fn line<F>(ends: [Vec2; 2], (w, h): (usize, usize), mut pixel_fn: F)
where
    F: FnMut(usize, usize),
{
    use crate::math::float::f64;

    if !ends.iter().flat_map(|p| p.0).all(|c| c.is_finite()) {
        return;
    }
    let ends = ends.map(|p| p.map(f64::round));
    let Some(ends) = clip_line(ends, (w, h)) else {
        return;
    };
    let [[mut x, mut y], [x1, y1]] =
        ends.map(|p| p.0.map(|c| f64::round(c) as i64));

    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if let (Ok(px), Ok(py)) = (usize::try_from(x), usize::try_from(y)) {
            if px < w && py < h {
                pixel_fn(px, py);
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Clips a segment to the pixel centers of a `w` × `h` target using the
/// Liang–Barsky algorithm.
///
/// Returns the endpoints of the part of the segment inside the target, or
/// `None` if no part is inside. An endpoint that is already inside is
/// returned unchanged.
fn clip_line([p0, p1]: [Vec2; 2], (w, h): (usize, usize)) -> Option<[Vec2; 2]> {
    if w == 0 || h == 0 {
        return None;
    }
    let (max_x, max_y) = ((w - 1) as f64, (h - 1) as f64);
    let d = p1 - p0;

    let (mut t0, mut t1) = (0.0, 1.0);
    for (p, q) in [
        (-d.x(), p0.x()),
        (d.x(), max_x - p0.x()),
        (-d.y(), p0.y()),
        (d.y(), max_y - p0.y()),
    ] {
        if p == 0.0 {
            // Parallel to this edge and outside it
            if q < 0.0 {
                return None;
            }
        } else if p < 0.0 {
            t0 = f64::max(t0, q / p);
        } else {
            t1 = f64::min(t1, q / p);
        }
    }
    (t0 <= t1).then(|| [p0 + d * t0, p0 + d * t1])
}
