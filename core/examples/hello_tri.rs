use tinyrast_core::geom::mesh::cube;
use tinyrast_core::prelude::*;
use tinyrast_core::render::{FrameState, next_frame, render_mesh};

const W: usize = 80;
const H: usize = 40;

fn main() {
    let ctx = Context::default();
    let cam = Camera::new(W, H, 255.0, 3.0);
    let mut fb = Framebuf::new(W, H);
    let mut state = FrameState::default();

    let tri = Tri2([vec2(2.0, 2.0), vec2(20.0, 4.0), vec2(8.0, 16.0)]);
    let light = vec3(0.0, 0.0, -1.0);
    let color = rgb(0xFF, 0xC0, 0x40);

    let mut mesh = cube();
    let spin = rotate_z(degs(3.0));
    for _ in 0..30 {
        next_frame(&mut state, &mut fb, &ctx);
        tri.draw(Color3::RED, &mut fb, &ctx);

        for v in &mut mesh.verts {
            *v = spin.apply(v);
        }
        render_mesh(&mesh, &cam, light, color, &mut fb, &ctx);
    }

    // The cube face nearest to the camera faces the light
    let c = fb.color_buf[vec2(W / 2, H / 2)];
    assert!(c.r() > 0xF0 && c.b() < 0x50, "{c:?}");
    assert_eq!(fb.color_buf[vec2(8, 6)], Color3::RED);

    for row in fb.color_buf.rows_bottom_up() {
        let line: String = row.iter().map(|&c| to_ascii(c)).collect();
        println!("{line}");
    }
    println!("{}", ctx.stats.borrow());
}

fn to_ascii(c: Color3) -> char {
    const RAMP: &[u8] = b" .:-=+*#%@";
    let lum = (c.r() as usize * 2 + c.g() as usize * 5 + c.b() as usize) / 8;
    RAMP[lum * (RAMP.len() - 1) / 255] as char
}
