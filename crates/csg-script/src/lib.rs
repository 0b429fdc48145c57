//! Constructive solid geometry expression trees and their OpenSCAD rendering.
//!
//! A [`Solid`] is built bottom-up from primitives, transforms and boolean
//! nodes, then serialized exactly once with [`to_scad`].

pub mod bounds;
pub mod scad;
pub mod solid;

pub use bounds::Aabb;
pub use scad::{to_scad, RenderQuality};
pub use solid::{BooleanOp, Primitive, Solid, SolidBuilder, Transform};

/// Errors raised while rendering a solid to script text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("non-finite value in {context}")]
    NonFinite { context: &'static str },

    #[error("polygon needs at least 3 points, got {count}")]
    DegeneratePolygon { count: usize },
}
