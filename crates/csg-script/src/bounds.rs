use crate::solid::{BooleanOp, Primitive, Solid, Transform};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut out = *self;
        for i in 0..3 {
            out.min[i] = out.min[i].min(other.min[i]);
            out.max[i] = out.max[i].max(other.max[i]);
        }
        out
    }

    pub fn translated(&self, v: [f64; 3]) -> Self {
        let mut out = *self;
        for i in 0..3 {
            out.min[i] += v[i];
            out.max[i] += v[i];
        }
        out
    }

    pub fn scaled(&self, s: [f64; 3]) -> Self {
        let mut out = *self;
        for i in 0..3 {
            let a = self.min[i] * s[i];
            let b = self.max[i] * s[i];
            out.min[i] = a.min(b);
            out.max[i] = a.max(b);
        }
        out
    }

    pub fn size(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    pub fn center(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }
}

impl Solid {
    /// Conservative bounds of the tree. `None` for an empty tree.
    ///
    /// A difference is bounded by its first child.
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Solid::Primitive(p) => primitive_bounds(p),
            Solid::Transform { op, child } => {
                let b = child.bounds()?;
                Some(match op {
                    Transform::Translate(v) => b.translated(*v),
                    Transform::Scale(s) => b.scaled(*s),
                    Transform::LinearExtrude { height } => {
                        Aabb::new([b.min[0], b.min[1], 0.0], [b.max[0], b.max[1], *height])
                    }
                })
            }
            Solid::Boolean { op, children } => match op {
                BooleanOp::Difference => children.first().and_then(Solid::bounds),
                BooleanOp::Union => children
                    .iter()
                    .filter_map(Solid::bounds)
                    .reduce(|a, b| a.union(&b)),
            },
        }
    }
}

fn primitive_bounds(p: &Primitive) -> Option<Aabb> {
    match p {
        Primitive::Cuboid { size } => Some(Aabb::new([0.0; 3], *size)),
        Primitive::Cylinder { radius, height, .. } => {
            Some(Aabb::new([-radius, -radius, 0.0], [*radius, *radius, *height]))
        }
        Primitive::Polygon { points } => {
            let first = points.first()?;
            let mut b = Aabb::new([first[0], first[1], 0.0], [first[0], first[1], 0.0]);
            for pt in &points[1..] {
                b.min[0] = b.min[0].min(pt[0]);
                b.min[1] = b.min[1].min(pt[1]);
                b.max[0] = b.max[0].max(pt[0]);
                b.max[1] = b.max[1].max(pt[1]);
            }
            Some(b)
        }
    }
}
