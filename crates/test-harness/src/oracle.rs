//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.

use std::collections::HashMap;

use csg_script::{BooleanOp, Solid, Transform};
use relief_ops::tiler::{Placement, Relief, OVERSHOOT};
use relief_types::{CompositionMode, HeightField, Settings, ShapeKind};

const TOL: f64 = 1e-9;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::pass(name, detail)
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::fail(name, detail)
        }
    }
}

// ── Count Oracles ───────────────────────────────────────────────────────────

/// One unit shape per cell with positive height.
pub fn check_shape_count(relief: &Relief, field: &HeightField) -> OracleVerdict {
    let expected = field.non_zero_count();
    let tree = relief.solid.primitive_count();
    let per_shape = primitives_per_shape(relief);
    let from_tree = tree.saturating_sub(1) / per_shape;

    if relief.shape_count == expected
        && relief.placements.len() == expected
        && from_tree == expected
    {
        OracleVerdict::pass_val(
            "shape_count",
            format!("{} shapes for {} non-zero cells", expected, expected),
            expected as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "shape_count",
            format!(
                "expected {}, got shape_count={} placements={} tree={}",
                expected,
                relief.shape_count,
                relief.placements.len(),
                from_tree
            ),
            relief.shape_count as f64,
        )
    }
}

fn primitives_per_shape(relief: &Relief) -> usize {
    match relief.layout.shape {
        ShapeKind::HollowCylinder => 2,
        _ => 1,
    }
}

// ── Geometry Oracles ────────────────────────────────────────────────────────

/// Neighbouring shape centres are at least one shape width plus spacing apart.
pub fn check_spacing(relief: &Relief) -> OracleVerdict {
    let min_gap = relief.layout.shape_width() + relief.layout.spacing;
    let by_cell: HashMap<(usize, usize), &Placement> = relief
        .placements
        .iter()
        .map(|p| ((p.col, p.row), p))
        .collect();

    let mut closest = f64::INFINITY;
    let mut violations = Vec::new();
    for p in &relief.placements {
        for (dc, dr) in [(1usize, 0usize), (0, 1), (1, 1)] {
            for q in neighbours(&by_cell, p, dc, dr) {
                let d = distance(p.center, q.center);
                closest = closest.min(d);
                if d < min_gap - TOL {
                    violations.push(((p.col, p.row), (q.col, q.row), d));
                }
            }
        }
    }

    if violations.is_empty() {
        OracleVerdict::pass_val(
            "spacing",
            format!("closest centres {:.4} >= {:.4}", closest, min_gap),
            closest,
        )
    } else {
        OracleVerdict::fail_val(
            "spacing",
            format!(
                "{} pairs closer than {:.4}: {:?}",
                violations.len(),
                min_gap,
                &violations[..violations.len().min(5)]
            ),
            closest,
        )
    }
}

fn neighbours<'a>(
    by_cell: &'a HashMap<(usize, usize), &'a Placement>,
    p: &Placement,
    dc: usize,
    dr: usize,
) -> impl Iterator<Item = &'a Placement> + 'a {
    let mut keys = vec![(p.col + dc, p.row + dr)];
    if dc == 1 && dr == 1 && p.col > 0 {
        keys.push((p.col - 1, p.row + 1));
    }
    keys.into_iter().filter_map(move |k| by_cell.get(&k).copied())
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt()
}

/// Every shape base lies within the block's vertical extent. A cut through
/// the whole block may start one overshoot below it.
pub fn check_bases_in_block(relief: &Relief) -> OracleVerdict {
    let top = relief.block[2];
    let floor = match relief.composition {
        CompositionMode::Difference => -OVERSHOOT,
        CompositionMode::Union => 0.0,
    };
    let outside: Vec<_> = relief
        .placements
        .iter()
        .filter(|p| p.base_z < floor - TOL || p.base_z > top + TOL)
        .map(|p| (p.col, p.row, p.base_z))
        .collect();

    if outside.is_empty() {
        OracleVerdict::pass(
            "bases_in_block",
            format!("all {} bases within [0, {}]", relief.placements.len(), top),
        )
    } else {
        OracleVerdict::fail(
            "bases_in_block",
            format!(
                "{} bases outside [0, {}]: {:?}",
                outside.len(),
                top,
                &outside[..outside.len().min(5)]
            ),
        )
    }
}

/// In a carved relief, the bore of every hollow cutter starts below the
/// cutter's base. A bore that starts above it carves a floor under the ring
/// and leaves the core inside as a detached island.
pub fn check_cores_attached(relief: &Relief) -> OracleVerdict {
    if relief.composition != CompositionMode::Difference {
        return OracleVerdict::pass("cores_attached", "nothing carved".to_string());
    }
    let Some(cutters) = carved_cutters(&relief.solid) else {
        return OracleVerdict::fail(
            "cores_attached",
            "tree is not difference(block, union(...))".to_string(),
        );
    };

    let mut checked = 0;
    let mut detached = Vec::new();
    for (i, cutter) in cutters.iter().enumerate() {
        let shape = match cutter {
            Solid::Transform {
                op: Transform::Translate(_),
                child,
            } => child.as_ref(),
            other => other,
        };
        if shape.boolean_op() != Some(BooleanOp::Difference) {
            continue;
        }
        let Some(outer) = shape.children().first().and_then(Solid::bounds) else {
            continue;
        };
        checked += 1;
        for bore in shape.children()[1..].iter().filter_map(Solid::bounds) {
            if bore.min[2] > outer.min[2] - TOL {
                detached.push((i, bore.min[2] - outer.min[2]));
            }
        }
    }

    if detached.is_empty() {
        OracleVerdict::pass(
            "cores_attached",
            format!("{} hollow cutters with open bores", checked),
        )
    } else {
        OracleVerdict::fail_val(
            "cores_attached",
            format!(
                "{} bores start above their cutter base (index, offset): {:?}",
                detached.len(),
                &detached[..detached.len().min(5)]
            ),
            detached.len() as f64,
        )
    }
}

/// Children of the cutter union in `difference(block, union(...))`, under an
/// optional scale.
fn carved_cutters(solid: &Solid) -> Option<&[Solid]> {
    let solid = match solid {
        Solid::Transform {
            op: Transform::Scale(_),
            child,
        } => child.as_ref(),
        other => other,
    };
    if solid.boolean_op() != Some(BooleanOp::Difference) {
        return None;
    }
    Some(solid.children().get(1)?.children())
}

/// Every shape footprint lies on the block.
pub fn check_footprint_inside(relief: &Relief) -> OracleVerdict {
    let half_x = relief.layout.shape_width() / 2.0;
    let half_y = relief.layout.radius;
    let [bx, by, _] = relief.block;
    let outside = relief
        .placements
        .iter()
        .filter(|p| {
            p.center[0] - half_x < -TOL
                || p.center[1] - half_y < -TOL
                || p.center[0] + half_x > bx + TOL
                || p.center[1] + half_y > by + TOL
        })
        .count();

    if outside == 0 {
        OracleVerdict::pass("footprint_inside", format!("block {:.3} x {:.3}", bx, by))
    } else {
        OracleVerdict::fail(
            "footprint_inside",
            format!("{} shapes overhang the {:.3} x {:.3} block", outside, bx, by),
        )
    }
}

/// No shape sits in the edge margin ring.
pub fn check_edge_margin(relief: &Relief, settings: &Settings) -> OracleVerdict {
    let m = settings.effective_edge_margin() as usize;
    let (cols, rows) = (relief.layout.cols, relief.layout.rows);
    let inside = relief
        .placements
        .iter()
        .filter(|p| {
            m > 0 && (p.col < m || p.row < m || p.col + m >= cols || p.row + m >= rows)
        })
        .count();

    if inside == 0 {
        OracleVerdict::pass("edge_margin", format!("margin {} is empty", m))
    } else {
        OracleVerdict::fail(
            "edge_margin",
            format!("{} shapes inside margin {}", inside, m),
        )
    }
}

/// Tree bounds equal the scaled block, raised to the tallest shape when unioned.
pub fn check_solid_bounds(relief: &Relief) -> OracleVerdict {
    let Some(bounds) = relief.solid.bounds() else {
        return OracleVerdict::fail("solid_bounds", "tree has no bounds".to_string());
    };
    let k = relief.scale.unwrap_or(1.0);
    let top = match relief.composition {
        CompositionMode::Difference => relief.block[2],
        CompositionMode::Union => relief
            .placements
            .iter()
            .map(|p| p.base_z + p.height)
            .fold(relief.block[2], f64::max),
    };
    let expected = [relief.block[0] * k, relief.block[1] * k, top];
    let size = bounds.size();
    let ok = (0..3).all(|i| (size[i] - expected[i]).abs() <= 1e-6 * expected[i].max(1.0));

    let detail = format!(
        "size ({:.3}, {:.3}, {:.3}), expected ({:.3}, {:.3}, {:.3})",
        size[0], size[1], size[2], expected[0], expected[1], expected[2]
    );
    if ok {
        OracleVerdict::pass("solid_bounds", detail)
    } else {
        OracleVerdict::fail("solid_bounds", detail)
    }
}

/// Run every oracle.
pub fn run_all(relief: &Relief, field: &HeightField, settings: &Settings) -> Vec<OracleVerdict> {
    vec![
        check_shape_count(relief, field),
        check_spacing(relief),
        check_bases_in_block(relief),
        check_cores_attached(relief),
        check_footprint_inside(relief),
        check_edge_margin(relief, settings),
        check_solid_bounds(relief),
    ]
}
