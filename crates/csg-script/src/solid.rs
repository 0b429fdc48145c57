/// Primitive leaf solids.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Axis-aligned box with one corner at the origin.
    Cuboid { size: [f64; 3] },
    /// Cylinder along +Z with its base centred at the origin.
    Cylinder {
        radius: f64,
        height: f64,
        /// Facet count override for this cylinder.
        segments: Option<u32>,
    },
    /// Closed 2D outline in the XY plane. Only meaningful under `LinearExtrude`.
    Polygon { points: Vec<[f64; 2]> },
}

/// Single-child transform nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate([f64; 3]),
    Scale([f64; 3]),
    /// Extrude a 2D child along +Z.
    LinearExtrude { height: f64 },
}

/// Boolean combination of an ordered child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Union,
    /// First child minus every following child.
    Difference,
}

/// A node in a CSG expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Solid {
    Primitive(Primitive),
    Transform { op: Transform, child: Box<Solid> },
    Boolean { op: BooleanOp, children: Vec<Solid> },
}

impl Solid {
    pub fn cuboid(size: [f64; 3]) -> Self {
        Solid::Primitive(Primitive::Cuboid { size })
    }

    pub fn cylinder(radius: f64, height: f64) -> Self {
        Solid::Primitive(Primitive::Cylinder {
            radius,
            height,
            segments: None,
        })
    }

    pub fn cylinder_with_segments(radius: f64, height: f64, segments: u32) -> Self {
        Solid::Primitive(Primitive::Cylinder {
            radius,
            height,
            segments: Some(segments),
        })
    }

    pub fn polygon(points: Vec<[f64; 2]>) -> Self {
        Solid::Primitive(Primitive::Polygon { points })
    }

    pub fn translate(self, v: [f64; 3]) -> Self {
        self.transformed(Transform::Translate(v))
    }

    pub fn scale(self, v: [f64; 3]) -> Self {
        self.transformed(Transform::Scale(v))
    }

    pub fn linear_extrude(self, height: f64) -> Self {
        self.transformed(Transform::LinearExtrude { height })
    }

    pub fn transformed(self, op: Transform) -> Self {
        Solid::Transform {
            op,
            child: Box::new(self),
        }
    }

    /// `difference(base, cutters...)`.
    pub fn difference(base: Solid, cutters: impl IntoIterator<Item = Solid>) -> Self {
        SolidBuilder::difference().with(base).with_all(cutters).build()
    }

    pub fn union(children: impl IntoIterator<Item = Solid>) -> Self {
        SolidBuilder::union().with_all(children).build()
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Solid::Primitive(_) => 1,
            Solid::Transform { child, .. } => 1 + child.node_count(),
            Solid::Boolean { children, .. } => {
                1 + children.iter().map(Solid::node_count).sum::<usize>()
            }
        }
    }

    /// Number of primitive leaves.
    pub fn primitive_count(&self) -> usize {
        match self {
            Solid::Primitive(_) => 1,
            Solid::Transform { child, .. } => child.primitive_count(),
            Solid::Boolean { children, .. } => children.iter().map(Solid::primitive_count).sum(),
        }
    }

    /// Children of a boolean node, or an empty slice.
    pub fn children(&self) -> &[Solid] {
        match self {
            Solid::Boolean { children, .. } => children,
            _ => &[],
        }
    }

    pub fn boolean_op(&self) -> Option<BooleanOp> {
        match self {
            Solid::Boolean { op, .. } => Some(*op),
            _ => None,
        }
    }
}

/// Accumulates children for a boolean node before finalizing it.
#[derive(Debug, Clone)]
pub struct SolidBuilder {
    op: BooleanOp,
    children: Vec<Solid>,
}

impl SolidBuilder {
    pub fn new(op: BooleanOp) -> Self {
        Self {
            op,
            children: Vec::new(),
        }
    }

    pub fn union() -> Self {
        Self::new(BooleanOp::Union)
    }

    pub fn difference() -> Self {
        Self::new(BooleanOp::Difference)
    }

    pub fn push(&mut self, child: Solid) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn with(mut self, child: Solid) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_all(mut self, children: impl IntoIterator<Item = Solid>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn build(self) -> Solid {
        Solid::Boolean {
            op: self.op,
            children: self.children,
        }
    }
}
