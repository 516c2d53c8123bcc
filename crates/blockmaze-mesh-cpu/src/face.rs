use blockmaze_geom::Vec3;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Front = 2,
    Back = 3,
    Right = 4,
    Left = 5,
}

/// One corner of a face template in the unit-cube frame centered on the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TemplateVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

pub const VERTS_PER_FACE: usize = 6;

const fn tv(x: f32, y: f32, z: f32, u: f32, v: f32) -> TemplateVertex {
    TemplateVertex {
        pos: [x, y, z],
        uv: [u, v],
    }
}

// Two counter-clockwise triangles per face, wound outward.
const TOP: [TemplateVertex; VERTS_PER_FACE] = [
    tv(-0.5, 0.5, 0.5, 0.0, 0.0),
    tv(0.5, 0.5, 0.5, 1.0, 0.0),
    tv(0.5, 0.5, -0.5, 1.0, 1.0),
    tv(-0.5, 0.5, 0.5, 0.0, 0.0),
    tv(0.5, 0.5, -0.5, 1.0, 1.0),
    tv(-0.5, 0.5, -0.5, 0.0, 1.0),
];
const BOTTOM: [TemplateVertex; VERTS_PER_FACE] = [
    tv(-0.5, -0.5, -0.5, 0.0, 0.0),
    tv(0.5, -0.5, -0.5, 1.0, 0.0),
    tv(0.5, -0.5, 0.5, 1.0, 1.0),
    tv(-0.5, -0.5, -0.5, 0.0, 0.0),
    tv(0.5, -0.5, 0.5, 1.0, 1.0),
    tv(-0.5, -0.5, 0.5, 0.0, 1.0),
];
const FRONT: [TemplateVertex; VERTS_PER_FACE] = [
    tv(-0.5, -0.5, 0.5, 0.0, 0.0),
    tv(0.5, -0.5, 0.5, 1.0, 0.0),
    tv(0.5, 0.5, 0.5, 1.0, 1.0),
    tv(-0.5, -0.5, 0.5, 0.0, 0.0),
    tv(0.5, 0.5, 0.5, 1.0, 1.0),
    tv(-0.5, 0.5, 0.5, 0.0, 1.0),
];
const BACK: [TemplateVertex; VERTS_PER_FACE] = [
    tv(0.5, -0.5, -0.5, 0.0, 0.0),
    tv(-0.5, -0.5, -0.5, 1.0, 0.0),
    tv(-0.5, 0.5, -0.5, 1.0, 1.0),
    tv(0.5, -0.5, -0.5, 0.0, 0.0),
    tv(-0.5, 0.5, -0.5, 1.0, 1.0),
    tv(0.5, 0.5, -0.5, 0.0, 1.0),
];
const RIGHT: [TemplateVertex; VERTS_PER_FACE] = [
    tv(0.5, -0.5, 0.5, 0.0, 0.0),
    tv(0.5, -0.5, -0.5, 1.0, 0.0),
    tv(0.5, 0.5, -0.5, 1.0, 1.0),
    tv(0.5, -0.5, 0.5, 0.0, 0.0),
    tv(0.5, 0.5, -0.5, 1.0, 1.0),
    tv(0.5, 0.5, 0.5, 0.0, 1.0),
];
const LEFT: [TemplateVertex; VERTS_PER_FACE] = [
    tv(-0.5, -0.5, -0.5, 0.0, 0.0),
    tv(-0.5, -0.5, 0.5, 1.0, 0.0),
    tv(-0.5, 0.5, 0.5, 1.0, 1.0),
    tv(-0.5, -0.5, -0.5, 0.0, 0.0),
    tv(-0.5, 0.5, 0.5, 1.0, 1.0),
    tv(-0.5, 0.5, -0.5, 0.0, 1.0),
];

impl Face {
    /// Emission order within a cube.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Bit for this face inside a [`FaceMask`](crate::FaceMask).
    #[inline]
    pub fn bit(self) -> u8 {
        1 << self.index()
    }

    /// Integer step `(dx, dy, dz)` to the neighbor cell this face looks at.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
            Face::Front => (0, 0, 1),
            Face::Back => (0, 0, -1),
            Face::Right => (1, 0, 0),
            Face::Left => (-1, 0, 0),
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    #[inline]
    pub fn template(self) -> &'static [TemplateVertex; VERTS_PER_FACE] {
        match self {
            Face::Top => &TOP,
            Face::Bottom => &BOTTOM,
            Face::Front => &FRONT,
            Face::Back => &BACK,
            Face::Right => &RIGHT,
            Face::Left => &LEFT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_lie_on_their_plane() {
        for face in Face::ALL {
            let n = face.normal();
            for v in face.template() {
                assert_eq!(Vec3::from(v.pos).dot(n), 0.5, "{face:?}");
            }
        }
    }

    #[test]
    fn templates_wind_outward() {
        for face in Face::ALL {
            let t = face.template();
            for tri in t.chunks(3) {
                let a = Vec3::from(tri[0].pos);
                let b = Vec3::from(tri[1].pos);
                let c = Vec3::from(tri[2].pos);
                let n = (b - a).cross(c - a);
                assert!(n.dot(face.normal()) > 0.0, "{face:?}");
            }
        }
    }

    #[test]
    fn bits_are_distinct() {
        let all = Face::ALL.iter().fold(0u8, |acc, f| {
            assert_eq!(acc & f.bit(), 0);
            acc | f.bit()
        });
        assert_eq!(all, 0b11_1111);
    }
}
