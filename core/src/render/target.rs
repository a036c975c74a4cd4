//! Render targets.
//!
//! The typical render target is a framebuffer, comprising a color buffer
//! and a depth buffer. A bare color buffer can also be used as a target,
//! in which case no depth testing is done.

use crate::math::Color3;
use crate::util::buf::Buf2;

use super::ctx::Context;
use super::raster::Frag;

/// Trait for types that can be used as render targets.
pub trait Target {
    /// Returns the width and height of `self` in pixels.
    fn dims(&self) -> (usize, usize);

    /// Writes `color` to the pixel at (`x`, `y`), without depth testing.
    ///
    /// Returns whether a pixel was written. Out-of-bounds positions are
    /// skipped.
    fn put(&mut self, x: usize, y: usize, color: Color3, ctx: &Context)
    -> bool;

    /// Writes a depth-tested fragment into `self`.
    ///
    /// If `self` has a depth buffer and `frag.z` passes the depth test
    /// configured in `ctx`, writes `color` and the new depth value as
    /// permitted by `ctx`. Targets without a depth buffer write the color
    /// unconditionally.
    ///
    /// Returns whether a color was written.
    fn put_frag(&mut self, frag: &Frag, color: Color3, ctx: &Context) -> bool;

    /// Fills the color buffer of `self` with `color` and the depth buffer,
    /// if any, with `depth`. `None` leaves the respective buffer as is.
    fn clear(&mut self, color: Option<Color3>, depth: Option<f64>);
}

/// Framebuffer, combining a color (pixel) buffer and a depth buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuf {
    pub color_buf: Buf2<Color3>,
    pub depth_buf: Buf2<f64>,
}

impl Framebuf {
    /// Returns a black framebuffer of size `w` × `h`, with all depth values
    /// set to negative infinity.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            color_buf: Buf2::new_default(w, h),
            depth_buf: Buf2::new_fill(w, h, f64::NEG_INFINITY),
        }
    }
}

impl Target for Framebuf {
    fn dims(&self) -> (usize, usize) {
        self.color_buf.dims()
    }

    fn put(&mut self, x: usize, y: usize, c: Color3, ctx: &Context) -> bool {
        self.color_buf.put(x, y, c, ctx)
    }

    /// Depth tests `frag` and writes it into this framebuffer.
    fn put_frag(&mut self, frag: &Frag, color: Color3, ctx: &Context) -> bool {
        let Some(z) = self.depth_buf.get_mut(frag.x, frag.y) else {
            return false;
        };
        if !ctx.depth_test(frag.z, *z) {
            return false;
        }
        if ctx.depth_write {
            *z = frag.z;
        }
        ctx.color_write && self.color_buf.put(frag.x, frag.y, color, ctx)
    }

    fn clear(&mut self, color: Option<Color3>, depth: Option<f64>) {
        self.color_buf.clear(color, None);
        if let Some(z) = depth {
            self.depth_buf.fill(z);
        }
    }
}

impl Target for Buf2<Color3> {
    fn dims(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn put(&mut self, x: usize, y: usize, c: Color3, ctx: &Context) -> bool {
        match self.get_mut(x, y) {
            Some(pix) if ctx.color_write => {
                *pix = c;
                true
            }
            _ => false,
        }
    }

    /// Writes `frag` into this color buffer. Does no z-buffering.
    fn put_frag(&mut self, frag: &Frag, color: Color3, ctx: &Context) -> bool {
        self.put(frag.x, frag.y, color, ctx)
    }

    /// Fills this color buffer with `color`. Ignores `depth`.
    fn clear(&mut self, color: Option<Color3>, _depth: Option<f64>) {
        if let Some(c) = color {
            self.fill(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{rgb, vec3};
    use crate::render::raster::tri_fill;

    use super::*;

    fn frag(x: usize, y: usize, z: f64) -> Frag {
        Frag { x, y, z, bary: vec3(1.0, 0.0, 0.0) }
    }

    #[test]
    fn framebuf_depth_test_later_wins_ties() {
        let ctx = Context::default();
        let mut fb = Framebuf::new(4, 4);

        assert!(fb.put_frag(&frag(1, 2, 5.0), Color3::RED, &ctx));
        assert!(fb.put_frag(&frag(1, 2, 5.0), Color3::GREEN, &ctx));
        assert!(!fb.put_frag(&frag(1, 2, 4.0), Color3::BLUE, &ctx));

        assert_eq!(fb.color_buf.get(1, 2), Some(&Color3::GREEN));
        assert_eq!(fb.depth_buf.get(1, 2), Some(&5.0));
    }

    #[test]
    fn framebuf_overlapping_tris_later_wins_ties() {
        // Both cover the diagonal x + y = 4, at depth 5
        let lower = [vec3(0.0, 0.0, 5.0), vec3(4.0, 0.0, 5.0), vec3(0.0, 4.0, 5.0)];
        let upper = [vec3(4.0, 4.0, 5.0), vec3(0.0, 4.0, 5.0), vec3(4.0, 0.0, 5.0)];

        for [(first, c1), (second, c2)] in [
            [(lower, Color3::RED), (upper, Color3::BLUE)],
            [(upper, Color3::BLUE), (lower, Color3::RED)],
        ] {
            let ctx = Context::default();
            let mut fb = Framebuf::new(5, 5);
            tri_fill(first, (5, 5), |f| {
                fb.put_frag(&f, c1, &ctx);
            });
            tri_fill(second, (5, 5), |f| {
                fb.put_frag(&f, c2, &ctx);
            });

            for x in 0..5 {
                assert_eq!(fb.color_buf.get(x, 4 - x), Some(&c2), "x = {x}");
                assert_eq!(fb.depth_buf.get(x, 4 - x), Some(&5.0));
            }
            assert_eq!(fb.color_buf.get(0, 0), Some(&Color3::RED));
            assert_eq!(fb.color_buf.get(1, 2), Some(&Color3::RED));
            assert_eq!(fb.color_buf.get(4, 4), Some(&Color3::BLUE));
            assert_eq!(fb.color_buf.get(3, 2), Some(&Color3::BLUE));
        }
    }

    #[test]
    fn framebuf_respects_write_masks() {
        let mut ctx = Context::default();
        let mut fb = Framebuf::new(2, 2);

        ctx.depth_write = false;
        assert!(fb.put_frag(&frag(0, 0, 1.0), Color3::RED, &ctx));
        assert_eq!(fb.depth_buf.get(0, 0), Some(&f64::NEG_INFINITY));

        ctx.depth_write = true;
        ctx.color_write = false;
        assert!(!fb.put_frag(&frag(0, 0, 2.0), Color3::BLUE, &ctx));
        assert_eq!(fb.depth_buf.get(0, 0), Some(&2.0));
        assert_eq!(fb.color_buf.get(0, 0), Some(&Color3::RED));
    }

    #[test]
    fn out_of_bounds_writes_are_skipped() {
        let ctx = Context::default();
        let mut fb = Framebuf::new(2, 2);
        assert!(!fb.put(2, 0, Color3::RED, &ctx));
        assert!(!fb.put_frag(&frag(0, 2, 1.0), Color3::RED, &ctx));
        assert!(fb.color_buf.iter().all(|&c| c == Color3::BLACK));
    }

    #[test]
    fn color_buf_ignores_depth() {
        let ctx = Context::default();
        let mut buf: Buf2<Color3> = Buf2::new_default(2, 2);
        assert!(buf.put_frag(&frag(1, 1, 9.0), Color3::RED, &ctx));
        assert!(buf.put_frag(&frag(1, 1, -9.0), Color3::BLUE, &ctx));
        assert_eq!(buf[1usize][1], Color3::BLUE);
        assert_eq!(Target::dims(&buf), (2, 2));
    }

    #[test]
    fn clear_fills_buffers() {
        let ctx = Context::default();
        let mut fb = Framebuf::new(3, 2);
        fb.clear(Some(rgb(1, 2, 3)), Some(-1.0));
        assert!(fb.color_buf.iter().all(|&c| c == rgb(1, 2, 3)));
        assert!(fb.depth_buf.iter().all(|&z| z == -1.0));

        fb.put(0, 0, Color3::RED, &ctx);
        fb.clear(None, Some(0.0));
        assert_eq!(fb.color_buf.get(0, 0), Some(&Color3::RED));
        assert_eq!(fb.depth_buf.get(0, 0), Some(&0.0));
    }
}
