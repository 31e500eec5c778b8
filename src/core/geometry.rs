// Extruded heart mesh built from four cubic bezier curves.

use glam::{Vec2, Vec3};
use smallvec::SmallVec;

pub type Outline = SmallVec<[Vec2; 64]>;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct HeartMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

// (p0, p1, p2, p3) per segment; each curve starts where the previous one ends.
const HEART_CURVES: [[[f32; 2]; 4]; 4] = [
    [[0.0, 0.0], [0.0, -0.3], [-0.6, -0.3], [-0.6, 0.0]],
    [[-0.6, 0.0], [-0.6, 0.3], [0.0, 0.6], [0.0, 1.0]],
    [[0.0, 1.0], [0.0, 0.6], [0.6, 0.3], [0.6, 0.0]],
    [[0.6, 0.0], [0.6, -0.3], [0.0, -0.3], [0.0, 0.0]],
];

#[inline]
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Closed heart outline starting at the origin cusp. The closing point is
/// not repeated, so the result holds `4 * segments` points.
pub fn heart_outline(segments: usize) -> Outline {
    let segments = segments.max(1);
    let mut out = Outline::new();
    for c in HEART_CURVES {
        let [p0, p1, p2, p3] = c.map(Vec2::from);
        for k in 0..segments {
            out.push(cubic_bezier(p0, p1, p2, p3, k as f32 / segments as f32));
        }
    }
    out
}

/// Shoelace area; negative for clockwise outlines.
pub fn signed_area(outline: &[Vec2]) -> f32 {
    let n = outline.len();
    (0..n)
        .map(|i| outline[i].perp_dot(outline[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

pub fn centroid(outline: &[Vec2]) -> Vec2 {
    if outline.is_empty() {
        return Vec2::ZERO;
    }
    outline.iter().copied().sum::<Vec2>() / outline.len() as f32
}

/// Uniformly scale `outline` about its centroid so its half-width grows by
/// `amount`. Offsetting along normals would fold over at the cusp.
pub fn grow_outline(outline: &[Vec2], amount: f32) -> Outline {
    let c = centroid(outline);
    let half_width = outline
        .iter()
        .map(|p| (p.x - c.x).abs())
        .fold(0.0_f32, f32::max);
    if half_width <= f32::EPSILON {
        return outline.iter().copied().collect();
    }
    let s = (half_width + amount) / half_width;
    outline.iter().map(|&p| c + (p - c) * s).collect()
}

/// Extrude the heart outline along +z. The slab spans `-bevel..depth + bevel`
/// and the outline is grown by `bevel`, matching the outer size of a
/// bevelled extrusion of `depth`.
pub fn extrude_heart(segments: usize, depth: f32, bevel: f32) -> HeartMesh {
    let outline = grow_outline(&heart_outline(segments), bevel.max(0.0));
    let n = outline.len();
    let z_front = depth + bevel;
    let z_back = -bevel;
    let center = centroid(&outline);
    let clockwise = signed_area(&outline) < 0.0;

    let mut mesh = HeartMesh {
        vertices: Vec::with_capacity(2 * (n + 1) + 4 * n),
        indices: Vec::with_capacity(12 * n),
    };

    for (z, normal) in [(z_front, [0.0, 0.0, 1.0]), (z_back, [0.0, 0.0, -1.0])] {
        let base = mesh.vertices.len() as u32;
        mesh.vertices.push(MeshVertex {
            position: [center.x, center.y, z],
            normal,
        });
        for p in &outline {
            mesh.vertices.push(MeshVertex {
                position: [p.x, p.y, z],
                normal,
            });
        }
        let facing_front = normal[2] > 0.0;
        for i in 0..n as u32 {
            let a = base + 1 + i;
            let b = base + 1 + (i + 1) % n as u32;
            // Keep caps counter-clockwise as seen from outside.
            if facing_front != clockwise {
                mesh.indices.extend_from_slice(&[base, a, b]);
            } else {
                mesh.indices.extend_from_slice(&[base, b, a]);
            }
        }
    }

    for i in 0..n {
        let p = outline[i];
        let q = outline[(i + 1) % n];
        let edge = q - p;
        let outward = if clockwise {
            Vec2::new(-edge.y, edge.x)
        } else {
            Vec2::new(edge.y, -edge.x)
        };
        let normal = outward.extend(0.0).normalize_or_zero();
        let normal = if normal == Vec3::ZERO {
            [0.0, 0.0, 1.0]
        } else {
            normal.to_array()
        };
        let base = mesh.vertices.len() as u32;
        for (v, z) in [(p, z_back), (q, z_back), (q, z_front), (p, z_front)] {
            mesh.vertices.push(MeshVertex {
                position: [v.x, v.y, z],
                normal,
            });
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}
