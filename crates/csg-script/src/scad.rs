//! OpenSCAD rendering of [`Solid`] trees.

use tracing::debug;

use crate::solid::{BooleanOp, Primitive, Solid, Transform};
use crate::ScriptError;

/// Renderer quality directives written at the top of a script.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderQuality {
    /// `$fn`: fixed facet count for curved surfaces.
    pub facets: Option<u32>,
    /// `$fa`: minimum facet angle in degrees.
    pub min_angle: Option<f64>,
    /// `$fs`: minimum facet size in mm.
    pub min_size: Option<f64>,
}

impl RenderQuality {
    pub fn fixed(facets: u32) -> Self {
        Self {
            facets: Some(facets),
            ..Self::default()
        }
    }
}

/// Render a solid as an OpenSCAD script.
pub fn to_scad(solid: &Solid, quality: &RenderQuality) -> Result<String, ScriptError> {
    let mut out = String::new();
    if let Some(n) = quality.facets {
        out.push_str(&format!("$fn = {};\n", n));
    }
    if let Some(a) = quality.min_angle {
        out.push_str(&format!("$fa = {};\n", num(a, "$fa")?));
    }
    if let Some(s) = quality.min_size {
        out.push_str(&format!("$fs = {};\n", num(s, "$fs")?));
    }
    if !out.is_empty() {
        out.push('\n');
    }
    write_node(&mut out, solid, 0)?;
    debug!(
        bytes = out.len(),
        nodes = solid.node_count(),
        "rendered scad script"
    );
    Ok(out)
}

fn write_node(out: &mut String, solid: &Solid, depth: usize) -> Result<(), ScriptError> {
    let indent = "\t".repeat(depth);
    match solid {
        Solid::Primitive(p) => {
            out.push_str(&indent);
            out.push_str(&primitive_call(p)?);
            out.push_str(";\n");
        }
        Solid::Transform { op, child } => {
            out.push_str(&format!("{}{} {{\n", indent, transform_call(op)?));
            write_node(out, child, depth + 1)?;
            out.push_str(&format!("{}}}\n", indent));
        }
        Solid::Boolean { op, children } => {
            let name = match op {
                BooleanOp::Union => "union",
                BooleanOp::Difference => "difference",
            };
            out.push_str(&format!("{}{}() {{\n", indent, name));
            for child in children {
                write_node(out, child, depth + 1)?;
            }
            out.push_str(&format!("{}}}\n", indent));
        }
    }
    Ok(())
}

fn primitive_call(p: &Primitive) -> Result<String, ScriptError> {
    Ok(match p {
        Primitive::Cuboid { size } => format!("cube(size = {})", vec3(size, "cube")?),
        Primitive::Cylinder {
            radius,
            height,
            segments,
        } => {
            let h = num(*height, "cylinder")?;
            let r = num(*radius, "cylinder")?;
            match segments {
                Some(n) => format!("cylinder($fn = {}, h = {}, r = {})", n, h, r),
                None => format!("cylinder(h = {}, r = {})", h, r),
            }
        }
        Primitive::Polygon { points } => {
            if points.len() < 3 {
                return Err(ScriptError::DegeneratePolygon {
                    count: points.len(),
                });
            }
            let pts = points
                .iter()
                .map(|p| Ok(format!("[{}, {}]", num(p[0], "polygon")?, num(p[1], "polygon")?)))
                .collect::<Result<Vec<_>, ScriptError>>()?;
            format!("polygon(points = [{}])", pts.join(", "))
        }
    })
}

fn transform_call(op: &Transform) -> Result<String, ScriptError> {
    Ok(match op {
        Transform::Translate(v) => format!("translate(v = {})", vec3(v, "translate")?),
        Transform::Scale(v) => format!("scale(v = {})", vec3(v, "scale")?),
        Transform::LinearExtrude { height } => {
            format!("linear_extrude(height = {})", num(*height, "linear_extrude")?)
        }
    })
}

fn vec3(v: &[f64; 3], context: &'static str) -> Result<String, ScriptError> {
    Ok(format!(
        "[{}, {}, {}]",
        num(v[0], context)?,
        num(v[1], context)?,
        num(v[2], context)?
    ))
}

/// Shortest round-trip decimal form. `-0` is written as `0`.
fn num(v: f64, context: &'static str) -> Result<String, ScriptError> {
    if !v.is_finite() {
        return Err(ScriptError::NonFinite { context });
    }
    if v == 0.0 {
        return Ok("0".to_string());
    }
    Ok(format!("{}", v))
}
