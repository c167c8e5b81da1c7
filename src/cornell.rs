//! Built-in Cornell box: a room with two blocks, scaled to `[-1, 1]^3`.

use glam::Vec3;

use crate::{
    material::{BLUE, GREEN, LIGHT_GRAY, MID_GRAY, PURPLE, RED},
    triangle::Triangle,
};

/// Side length of the box before rescaling.
const L: f32 = 555.0;

fn push_block(tris: &mut Vec<Triangle>, corners: [Vec3; 8], color: Vec3) {
    let [a, b, c, d, e, f, g, h] = corners;
    // front
    tris.push(Triangle::new(e, b, a, color));
    tris.push(Triangle::new(e, f, b, color));
    // right
    tris.push(Triangle::new(f, d, b, color));
    tris.push(Triangle::new(f, h, d, color));
    // back
    tris.push(Triangle::new(h, c, d, color));
    tris.push(Triangle::new(h, g, c, color));
    // left
    tris.push(Triangle::new(g, e, c, color));
    tris.push(Triangle::new(e, a, c, color));
    // top
    tris.push(Triangle::new(g, f, e, color));
    tris.push(Triangle::new(g, h, f, color));
}

fn block(x: [f32; 4], z: [f32; 4], height: f32) -> [Vec3; 8] {
    let base = |i: usize, y: f32| Vec3::new(x[i], y, z[i]);
    [
        base(0, 0.0),
        base(1, 0.0),
        base(2, 0.0),
        base(3, 0.0),
        base(0, height),
        base(1, height),
        base(2, height),
        base(3, height),
    ]
}

/// Scales from `[0, L]^3` into `[-1, 1]^3` and flips x and y so that +y
/// points down in screen space.
fn to_unit_box(p: Vec3) -> Vec3 {
    let q = p * (2.0 / L) - Vec3::ONE;
    Vec3::new(-q.x, -q.y, q.z)
}

/**
 * The walls, floor and ceiling use the two matte grays except for the side
 * walls; the side walls and both blocks are coloured and therefore mirror-like
 * under the colour-match rule.
 */
pub fn test_model() -> Vec<Triangle> {
    let mut tris = Vec::with_capacity(30);

    let a = Vec3::new(L, 0.0, 0.0);
    let b = Vec3::new(0.0, 0.0, 0.0);
    let c = Vec3::new(L, 0.0, L);
    let d = Vec3::new(0.0, 0.0, L);
    let e = Vec3::new(L, L, 0.0);
    let f = Vec3::new(0.0, L, 0.0);
    let g = Vec3::new(L, L, L);
    let h = Vec3::new(0.0, L, L);

    // floor
    tris.push(Triangle::new(c, b, a, MID_GRAY));
    tris.push(Triangle::new(c, d, b, MID_GRAY));
    // left wall
    tris.push(Triangle::new(a, e, c, PURPLE));
    tris.push(Triangle::new(c, e, g, PURPLE));
    // right wall
    tris.push(Triangle::new(f, b, d, GREEN));
    tris.push(Triangle::new(h, f, d, GREEN));
    // ceiling
    tris.push(Triangle::new(e, f, g, LIGHT_GRAY));
    tris.push(Triangle::new(f, h, g, LIGHT_GRAY));
    // back wall
    tris.push(Triangle::new(g, d, c, LIGHT_GRAY));
    tris.push(Triangle::new(g, h, d, LIGHT_GRAY));

    // short block
    let short = block([290.0, 130.0, 240.0, 82.0], [114.0, 65.0, 272.0, 225.0], 165.0);
    push_block(&mut tris, short, RED);
    // tall block
    let tall = block([423.0, 265.0, 472.0, 314.0], [247.0, 296.0, 406.0, 456.0], 330.0);
    push_block(&mut tris, tall, BLUE);

    for tri in tris.iter_mut() {
        tri.v0 = to_unit_box(tri.v0);
        tri.v1 = to_unit_box(tri.v1);
        tri.v2 = to_unit_box(tri.v2);
        tri.compute_normal();
    }

    return tris;
}
