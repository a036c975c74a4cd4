//! Turning geometry into raster images.
//!
//! This module contains the rendering pipeline of `tinyrast`: a
//! [camera][cam] mapping world-space points to the screen, a
//! [rasterizer][raster] converting triangles and lines into pixels, and
//! [render targets][target] that store the pixels along with depth values.
//! 2D [shapes][crate::geom::shape] are drawn through the [`Draw`] trait.
//!
//! Rendering is single-threaded: primitives are rasterized in submission
//! order and a target is borrowed mutably for the duration of each call.
//! Rows of a target are written independently of each other, so splitting
//! a target into disjoint row bands and rendering them in parallel would
//! be sound, but is not done.

use crate::geom::{Mesh, Winding};
use crate::math::{Color3, Vec3};

pub use cam::Camera;
pub use ctx::{Context, DepthTest, FaceCull};
pub use frame::{Fade, FrameState, next_frame};
pub use prim::{Draw, fill_shaded};
pub use stats::{Stats, Throughput};
pub use target::{Framebuf, Target};

pub mod cam;
pub mod ctx;
pub mod frame;
pub mod prim;
pub mod raster;
pub mod stats;
pub mod target;

/// Renders the faces of `mesh` into `target` as flat-shaded triangles.
///
/// Each face is lit by a directional light: its intensity is the dot
/// product of the face's unit normal and `light_dir`, so faces turned away
/// from the light are drawn black. Faces are culled according to
/// `ctx.face_cull`; a face is a backface if it winds clockwise on screen.
/// Visible faces are projected by `cam` and depth tested per fragment.
///
/// # Examples
/// ```
/// use tinyrast_core::geom::mesh::cube;
/// use tinyrast_core::math::{Color3, vec3};
/// use tinyrast_core::render::{Camera, Context, Framebuf, render_mesh};
///
/// let cam = Camera::new(64, 64, 255.0, 3.0);
/// let ctx = Context::default();
/// let mut fb = Framebuf::new(64, 64);
///
/// let light = vec3(0.0, 0.0, -1.0);
/// render_mesh(&cube(), &cam, light, Color3::WHITE, &mut fb, &ctx);
///
/// assert!(fb.color_buf.iter().any(|&c| c != Color3::BLACK));
/// ```
pub fn render_mesh<T>(
    mesh: &Mesh,
    cam: &Camera,
    light_dir: Vec3,
    color: Color3,
    target: &mut T,
    ctx: &Context,
) where
    T: Target + ?Sized,
{
    let timer = Stats::start();
    for tri in mesh.tris() {
        let intensity = tri.normal().dot(&light_dir);
        let scr = cam.tri_to_screen(&tri);

        if ctx.face_cull(scr.winding() == Winding::Cw) {
            ctx.stats.borrow_mut().prims.i += 1;
            continue;
        }
        fill_shaded(&scr, color, intensity, target, ctx);
    }
    let mut stats = ctx.stats.borrow_mut();
    stats.calls += 1.0;
    stats.time += timer.finish().time;
}

/// Renders the edges of each face of `mesh` into `target` as lines.
///
/// The vertices are projected by `cam`; no depth testing or face culling
/// is done.
pub fn render_wireframe<T>(
    mesh: &Mesh,
    cam: &Camera,
    color: Color3,
    target: &mut T,
    ctx: &Context,
) where
    T: Target + ?Sized,
{
    let timer = Stats::start();
    let dims = target.dims();
    let mut io = Throughput::default();
    for tri in mesh.tris() {
        let [a, b, c] = cam.tri_to_screen(&tri).0.map(|v| v.xy());
        for edge in [[a, b], [b, c], [c, a]] {
            raster::line(edge, dims, |x, y| {
                io.i += 1;
                io.o += target.put(x, y, color, ctx) as usize;
            });
        }
    }
    let mut stats = ctx.stats.borrow_mut();
    stats.calls += 1.0;
    stats.prims += Throughput { i: mesh.num_faces(), o: mesh.num_faces() };
    stats.frags += io;
    stats.time += timer.finish().time;
}
