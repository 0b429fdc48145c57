use csg_script::{to_scad, RenderQuality, ScriptError, Solid, SolidBuilder};
use proptest::prelude::*;

// ── Rendering ──────────────────────────────────────────────────────────────

#[test]
fn difference_of_block_and_hole() {
    let hole = Solid::cylinder_with_segments(1.0, 21.0, 32).translate([1.0, 1.0, 1.0]);
    let solid = Solid::difference(Solid::cuboid([2.5, 2.5, 21.0]), [Solid::union([hole])]);

    let text = to_scad(&solid, &RenderQuality::default()).unwrap();
    let expected = "\
difference() {
\tcube(size = [2.5, 2.5, 21]);
\tunion() {
\t\ttranslate(v = [1, 1, 1]) {
\t\t\tcylinder($fn = 32, h = 21, r = 1);
\t\t}
\t}
}
";
    assert_eq!(text, expected);
}

#[test]
fn extruded_polygon_renders_points() {
    let tri = Solid::polygon(vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).linear_extrude(2.0);
    let text = to_scad(&tri, &RenderQuality::fixed(6)).unwrap();
    assert!(text.starts_with("$fn = 6;\n\n"));
    assert!(text.contains("linear_extrude(height = 2) {"));
    assert!(text.contains("polygon(points = [[0, 0], [1, 0], [0, 1]]);"));
}

#[test]
fn empty_union_still_renders() {
    let text = to_scad(&SolidBuilder::union().build(), &RenderQuality::default()).unwrap();
    assert_eq!(text, "union() {\n}\n");
}

#[test]
fn all_directives_written() {
    let quality = RenderQuality {
        facets: Some(32),
        min_angle: Some(12.0),
        min_size: Some(0.25),
    };
    let text = to_scad(&Solid::cylinder(1.0, 1.0), &quality).unwrap();
    assert!(text.starts_with("$fn = 32;\n$fa = 12;\n$fs = 0.25;\n\n"));
    assert!(text.contains("cylinder(h = 1, r = 1);"));
}

// ── Errors ─────────────────────────────────────────────────────────────────

#[test]
fn nan_translation_rejected() {
    let solid = Solid::cuboid([1.0, 1.0, 1.0]).translate([f64::NAN, 0.0, 0.0]);
    assert_eq!(
        to_scad(&solid, &RenderQuality::default()),
        Err(ScriptError::NonFinite {
            context: "translate"
        })
    );
}

#[test]
fn degenerate_polygon_rejected() {
    let solid = Solid::polygon(vec![[0.0, 0.0], [1.0, 1.0]]).linear_extrude(1.0);
    assert_eq!(
        to_scad(&solid, &RenderQuality::default()),
        Err(ScriptError::DegeneratePolygon { count: 2 })
    );
}

// ── Properties ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn translate_shifts_bounds(
        (x, y, z) in (-100.0f64..100.0, -100.0f64..100.0, -100.0f64..100.0),
        r in 0.1f64..10.0,
        h in 0.1f64..10.0,
    ) {
        let b = Solid::cylinder(r, h).translate([x, y, z]).bounds().unwrap();
        prop_assert!((b.center()[0] - x).abs() < 1e-9);
        prop_assert!((b.center()[1] - y).abs() < 1e-9);
        prop_assert!((b.min[2] - z).abs() < 1e-9);
        prop_assert!((b.size()[2] - h).abs() < 1e-9);
    }

    #[test]
    fn union_primitive_count_is_sum(n in 0usize..40) {
        let solid = Solid::union((0..n).map(|i| Solid::cylinder(1.0, 1.0).translate([i as f64, 0.0, 0.0])));
        prop_assert_eq!(solid.primitive_count(), n);
        let text = to_scad(&solid, &RenderQuality::default()).unwrap();
        prop_assert_eq!(text.matches("cylinder(").count(), n);
    }
}
