//! Render impls for shapes and related items.

use crate::geom::{Line2, Point2, Rect2, Tri2, Tri3};
use crate::math::{Color3, Vec2, vec3};

use super::raster::{line, tri_fill};
use super::{Context, Target, stats::Throughput};

/// Trait for 2D shapes that can be drawn into a render target.
///
/// Shapes are drawn with a flat color and no depth testing. Coordinates are
/// in pixels with the origin at pixel (0, 0); parts of the shape outside the
/// target are skipped.
pub trait Draw {
    /// Draws `self` into `target` with `color`.
    ///
    /// Returns the number of pixels covered and written.
    fn draw<T>(
        &self,
        color: Color3,
        target: &mut T,
        ctx: &Context,
    ) -> Throughput
    where
        T: Target + ?Sized;
}

impl Draw for Point2 {
    /// Draws a single pixel at the position nearest to `self`.
    fn draw<T>(
        &self,
        color: Color3,
        target: &mut T,
        ctx: &Context,
    ) -> Throughput
    where
        T: Target + ?Sized,
    {
        let io = match to_pixel(self.0) {
            Some((x, y)) => Throughput {
                i: 1,
                o: target.put(x, y, color, ctx) as usize,
            },
            None => Throughput { i: 1, o: 0 },
        };
        record_call(ctx, io)
    }
}

impl Draw for Line2 {
    /// Draws a one-pixel-thick line between the endpoints of `self`,
    /// rounded to the nearest pixel.
    fn draw<T>(
        &self,
        color: Color3,
        target: &mut T,
        ctx: &Context,
    ) -> Throughput
    where
        T: Target + ?Sized,
    {
        let mut io = Throughput::default();
        line(self.0, target.dims(), |x, y| {
            io.i += 1;
            io.o += target.put(x, y, color, ctx) as usize;
        });
        record_call(ctx, io)
    }
}

impl Draw for Tri2 {
    /// Draws a filled triangle.
    fn draw<T>(
        &self,
        color: Color3,
        target: &mut T,
        ctx: &Context,
    ) -> Throughput
    where
        T: Target + ?Sized,
    {
        let verts = self.0.map(|p| vec3(p.x(), p.y(), 0.0));
        let mut o = 0;
        let i = tri_fill(verts, target.dims(), |f| {
            o += target.put(f.x, f.y, color, ctx) as usize;
        });
        record_call(ctx, Throughput { i, o })
    }
}

impl Draw for Rect2 {
    /// Draws a filled rectangle as the two triangles 0-1-2 and 0-2-3.
    fn draw<T>(
        &self,
        color: Color3,
        target: &mut T,
        ctx: &Context,
    ) -> Throughput
    where
        T: Target + ?Sized,
    {
        let mut io = Throughput::default();
        for tri in self.tris() {
            io += tri.draw(color, target, ctx);
        }
        io
    }
}

/// Fills a screen-space triangle, depth testing each fragment and writing
/// `color` shaded by `intensity`.
///
/// The x and y components of the vertices of `tri` are pixel coordinates
/// and z is depth, greater being nearer. Of two fragments with equal depth
/// the one drawn later wins.
///
/// Returns the number of fragments rasterized and written.
pub fn fill_shaded<T>(
    tri: &Tri3,
    color: Color3,
    intensity: f64,
    target: &mut T,
    ctx: &Context,
) -> Throughput
where
    T: Target + ?Sized,
{
    let shaded = color.shade(intensity);
    let mut o = 0;
    let i = tri_fill(tri.0, target.dims(), |f| {
        o += target.put_frag(&f, shaded, ctx) as usize;
    });
    record(ctx, Throughput { i, o })
}

fn to_pixel(p: Vec2) -> Option<(usize, usize)> {
    use crate::math::float::f64;
    let [x, y] = p.0.map(f64::round);
    (x >= 0.0 && y >= 0.0).then(|| (x as usize, y as usize))
}

/// Records a drawn primitive and its fragments in the stats of `ctx`.
fn record(ctx: &Context, io: Throughput) -> Throughput {
    let mut stats = ctx.stats.borrow_mut();
    stats.prims += Throughput { i: 1, o: 1 };
    stats.frags += io;
    io
}

/// Records a draw call in the stats of `ctx`.
fn record_call(ctx: &Context, io: Throughput) -> Throughput {
    ctx.stats.borrow_mut().calls += 1.0;
    record(ctx, io)
}

#[cfg(test)]
mod tests {
    use crate::geom::Shape;
    use crate::math::vec2;
    use crate::util::buf::Buf2;

    use super::*;

    fn buf() -> Buf2<Color3> {
        Buf2::new_default(8, 8)
    }

    fn lit(buf: &Buf2<Color3>) -> usize {
        buf.iter().filter(|&&c| c != Color3::BLACK).count()
    }

    #[test]
    fn point_draws_one_pixel() {
        let (ctx, mut b) = (Context::default(), buf());
        let io = Point2(vec2(2.4, 3.6)).draw(Color3::RED, &mut b, &ctx);
        assert_eq!(io, Throughput { i: 1, o: 1 });
        assert_eq!(b.get(2, 4), Some(&Color3::RED));
        assert_eq!(lit(&b), 1);
    }

    #[test]
    fn point_outside_is_skipped() {
        let (ctx, mut b) = (Context::default(), buf());
        for p in [vec2(-1.0, 0.0), vec2(0.0, 8.0), vec2(100.0, 100.0)] {
            let io = Point2(p).draw(Color3::RED, &mut b, &ctx);
            assert_eq!(io.o, 0);
        }
        assert_eq!(lit(&b), 0);
    }

    #[test]
    fn line_draws_both_endpoints() {
        let (ctx, mut b) = (Context::default(), buf());
        let l = Line2([vec2(1.0, 1.0), vec2(6.0, 3.0)]);
        let io = l.draw(Color3::WHITE, &mut b, &ctx);
        assert_eq!(io, Throughput { i: 6, o: 6 });
        assert_eq!(b.get(1, 1), Some(&Color3::WHITE));
        assert_eq!(b.get(6, 3), Some(&Color3::WHITE));
    }

    #[test]
    fn line_far_outside_costs_only_visible_pixels() {
        let (ctx, mut b) = (Context::default(), buf());
        let l = Line2([vec2(-3e9, 2.0), vec2(3e9, 2.0)]);
        let io = l.draw(Color3::WHITE, &mut b, &ctx);
        assert_eq!(io, Throughput { i: 8, o: 8 });
        assert_eq!(lit(&b), 8);

        let l = Line2([vec2(-3e9, -3e9), vec2(-1e9, 3e9)]);
        let io = l.draw(Color3::WHITE, &mut b, &ctx);
        assert_eq!(io, Throughput::default());
    }

    #[test]
    fn tri_fill_count_matches_stats() {
        let (ctx, mut b) = (Context::default(), buf());
        let t = Tri2([vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(0.0, 4.0)]);
        let io = t.draw(Color3::GREEN, &mut b, &ctx);
        assert_eq!(io, Throughput { i: 15, o: 15 });
        assert_eq!(lit(&b), 15);

        let stats = ctx.stats.borrow();
        assert_eq!(stats.calls, 1.0);
        assert_eq!(stats.frags, io);
    }

    #[test]
    fn rect_fills_whole_area() {
        let (ctx, mut b) = (Context::default(), buf());
        let r = Rect2([
            vec2(1.0, 1.0),
            vec2(5.0, 1.0),
            vec2(5.0, 4.0),
            vec2(1.0, 4.0),
        ]);
        r.draw(Color3::BLUE, &mut b, &ctx);
        // 5 × 4 pixels, edges inclusive
        assert_eq!(lit(&b), 20);
        for y in 1..=4 {
            for x in 1..=5 {
                assert_eq!(b.get(x, y), Some(&Color3::BLUE), "({x}, {y})");
            }
        }
    }

    #[test]
    fn transformed_rect_is_drawn_at_new_position() {
        let (ctx, mut b) = (Context::default(), buf());
        let r = Rect2([
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(1.0, 1.0),
            vec2(0.0, 1.0),
        ])
        .scaled(vec2(2.0, 2.0))
        .translated(vec2(3.0, 3.0));
        r.draw(Color3::RED, &mut b, &ctx);
        assert_eq!(lit(&b), 9);
        assert_eq!(b.get(3, 3), Some(&Color3::RED));
        assert_eq!(b.get(5, 5), Some(&Color3::RED));
        assert_eq!(b.get(2, 2), Some(&Color3::BLACK));
    }

    #[test]
    fn fill_shaded_depth_tests() {
        use crate::render::Framebuf;

        let ctx = Context::default();
        let mut fb = Framebuf::new(8, 8);
        let far = Tri3([
            vec3(0.0, 0.0, 1.0),
            vec3(7.0, 0.0, 1.0),
            vec3(0.0, 7.0, 1.0),
        ]);
        let near = Tri3([
            vec3(0.0, 0.0, 2.0),
            vec3(3.0, 0.0, 2.0),
            vec3(0.0, 3.0, 2.0),
        ]);
        fill_shaded(&near, Color3::WHITE, 0.5, &mut fb, &ctx);
        let io = fill_shaded(&far, Color3::WHITE, 1.0, &mut fb, &ctx);

        // The near triangle covers 10 pixels
        assert_eq!(io.i - io.o, 10);
        assert_eq!(fb.color_buf.get(0, 0), Some(&Color3::WHITE.shade(0.5)));
        assert_eq!(fb.color_buf.get(7, 0), Some(&Color3::WHITE));
        assert_eq!(fb.depth_buf.get(0, 0), Some(&2.0));
    }
}
