use serde::{Deserialize, Serialize};

/// The unit solid instantiated once per grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    /// Solid cylinder on a square grid.
    #[default]
    Cylinder,
    /// Cylinder with an inset bore, producing a tube with a floor.
    HollowCylinder,
    /// Hexagonal prism on a honeycomb (brick-offset) grid.
    Hexagon,
}

impl ShapeKind {
    /// Whether odd rows are shifted by half a pitch.
    pub fn is_offset_layout(self) -> bool {
        matches!(self, ShapeKind::Hexagon)
    }
}

/// How the accumulated unit shapes combine with the base block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompositionMode {
    /// Shapes are carved out of the block as holes.
    #[default]
    Difference,
    /// Shapes stand proud of a flat plate.
    Union,
}
