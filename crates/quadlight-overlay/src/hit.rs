//! Point-in-polygon hit testing.

use quadlight_engine::coords::{Quad, Vec2};

/// Even-odd ray casting: casts a ray from `p` towards +X and counts edge crossings.
///
/// Works for any simple polygon, convex or not. Polygons with fewer than three
/// vertices contain nothing. An edge is crossed when its endpoints lie on opposite
/// sides of `p.y` (one strictly above, the other at or below), so horizontal edges
/// never cross and the division below never sees a zero denominator.
///
/// Boundary points follow from the strict comparisons: on an axis-aligned rectangle
/// the left and top edges are inside, the right and bottom edges are outside.
pub fn point_in_polygon(p: Vec2, vertices: &[Vec2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;

    for i in 0..vertices.len() {
        let vi = vertices[i];
        let vj = vertices[j];

        if (vi.y > p.y) != (vj.y > p.y) {
            let cross_x = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}

/// Hit test against a quad; `p` and `quad` must share a coordinate space.
#[inline]
pub fn point_in_quad(p: Vec2, quad: &Quad) -> bool {
    point_in_polygon(p, &quad.corners())
}
