//! Fillrate benchmarks.

use criterion::*;

use tinyrast_core::geom::{Tri3, mesh::cube};
use tinyrast_core::math::{Color3, vec3};
use tinyrast_core::render::raster::{ScreenPt, tri_fill};
use tinyrast_core::render::{
    Camera, Context, FaceCull, Framebuf, Target, fill_shaded, render_mesh,
};
use tinyrast_core::util::buf::Buf2;

const W: usize = 512;

const VERTS: [ScreenPt; 3] = [
    vec3(0.1, 0.1, 0.0),
    vec3(0.9, 0.3, 0.5),
    vec3(0.4, 0.9, 1.0),
];

fn flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");
    let mut buf: Buf2<Color3> = Buf2::new_default(W, W);

    for sz in [16.0, 64.0, 256.0, 512.0] {
        let verts = VERTS.map(|p| p * sz);
        let id = BenchmarkId::from_parameter(sz);
        group.bench_with_input(id, &verts, |b, vs| {
            b.iter(|| {
                tri_fill(*vs, (W, W), |f| buf[f.y][f.x] = Color3::WHITE)
            })
        });
    }
    group.finish();
}

fn depth_tested(c: &mut Criterion) {
    let ctx = Context::default();
    let mut fb = Framebuf::new(W, W);
    let tri = Tri3(VERTS.map(|p| p * W as f64));

    c.bench_function("depth_tested", |b| {
        b.iter(|| fill_shaded(&tri, Color3::WHITE, 0.8, &mut fb, &ctx))
    });
}

fn cube_mesh(c: &mut Criterion) {
    let mut ctx = Context::default();
    ctx.face_cull = Some(FaceCull::Back);
    let cam = Camera::new(W, W, 255.0, 3.0);
    let mesh = cube();
    let mut fb = Framebuf::new(W, W);

    c.bench_function("cube", |b| {
        b.iter(|| {
            fb.clear(ctx.color_clear, ctx.depth_clear);
            render_mesh(
                &mesh,
                &cam,
                vec3(0.0, 0.0, -1.0),
                Color3::WHITE,
                &mut fb,
                &ctx,
            )
        })
    });
    eprintln!("{}", ctx.stats.borrow());
}

criterion_group!(benches, flat, depth_tested, cube_mesh);
criterion_main!(benches);
