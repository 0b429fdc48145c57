//! End-to-end scenarios: synthetic images through sampling, tiling and the
//! request boundary.

use proptest::prelude::*;
use relief_bridge::process_upload;
use relief_ops::{convert_bytes, sample_bytes, sample_luma, tile};
use relief_types::{CompositionMode, Settings, ShapeKind};
use test_harness::assertions::{assert_all_pass, assert_heights_close, assert_occurrences};
use test_harness::helpers::*;
use test_harness::oracle::run_all;
use test_harness::HarnessError;

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn two_by_two_heights_and_shapes() -> Result<(), HarnessError> {
    let bytes = png_bytes(&gray_image(2, 2, &[0, 255, 128, 64]))?;
    let settings = Settings {
        resolution: 2,
        ..Settings::default()
    };
    let field = sample_bytes(&bytes, &settings)?;
    assert_heights_close(
        &field,
        &[0.0, 20.0, 10.039_215_686, 5.019_607_843],
        1e-6,
        "2x2",
    )?;

    let relief = tile(&field, &settings)?;
    assert_eq!(relief.shape_count, 3);
    assert_all_pass(&run_all(&relief, &field, &settings), "2x2")
}

#[test]
fn checkerboard_hexagons() -> Result<(), HarnessError> {
    let bytes = png_bytes(&checkerboard(6, 6, 1))?;
    let settings = Settings {
        resolution: 6,
        shape: ShapeKind::Hexagon,
        ..Settings::default()
    };
    let conversion = convert_bytes(&bytes, &settings)?;
    assert_eq!(conversion.shape_count, 18);
    assert_occurrences(&conversion.script, "polygon(", 18, "checkerboard")?;
    assert_occurrences(&conversion.script, "$fn = 6;", 1, "checkerboard")
}

#[test]
fn aspect_preserving_gradient_with_margin() -> Result<(), HarnessError> {
    let settings = Settings {
        resolution: 20,
        preserve_aspect: true,
        ..Settings::default()
    };
    let field = sample_luma(&horizontal_gradient(200, 100), &settings)?;
    assert_eq!((field.cols(), field.rows()), (20, 10));
    // default margin of 1 under preserveAspect
    assert_eq!(field.get(0, 5), 0.0);
    assert_eq!(field.get(10, 0), 0.0);
    assert!(field.get(18, 5) > field.get(2, 5));

    let relief = tile(&field, &settings)?;
    assert_all_pass(&run_all(&relief, &field, &settings), "gradient")
}

#[test]
fn union_relief_stands_on_plate() -> Result<(), HarnessError> {
    let settings = Settings {
        resolution: 5,
        composition: CompositionMode::Union,
        base_thickness: 2.0,
        ..Settings::default()
    };
    let field = sample_luma(&uniform_image(5, 5, 255), &settings)?;
    let relief = tile(&field, &settings)?;
    assert_eq!(relief.block[2], 2.0);
    for p in &relief.placements {
        assert!((p.base_z - 1.0).abs() < 1e-12);
        assert!((p.base_z + p.height - 22.0).abs() < 1e-9);
    }
    assert_all_pass(&run_all(&relief, &field, &settings), "union")
}

#[test]
fn black_image_yields_bare_block() -> Result<(), HarnessError> {
    let bytes = png_bytes(&uniform_image(10, 10, 0))?;
    let conversion = convert_bytes(&bytes, &Settings::default())?;
    assert_eq!(conversion.shape_count, 0);
    assert_occurrences(&conversion.script, "cylinder(", 0, "black")
}

// ── Boundary ────────────────────────────────────────────────────────────

#[test]
fn boundary_round_trip() -> Result<(), HarnessError> {
    let bytes = png_bytes(&checkerboard(8, 8, 2))?;
    let resp = process_upload(&bytes, r#"{"resolution": 8, "shape": "hollowCylinder"}"#);
    assert_eq!(resp.status, 200);
    let text = String::from_utf8_lossy(&resp.body);
    // two primitives per hollow shape
    assert_occurrences(&text, "cylinder(", 64, "boundary")
}

#[test]
fn boundary_rejects_zero_resolution_before_decoding() {
    let resp = process_upload(b"\x00\x01garbage", r#"{"resolution": 0}"#);
    assert_eq!(resp.status, 500);
    let body = resp.error_body().unwrap();
    assert!(body.error.starts_with("invalid settings"));
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn oracles_hold_for_random_images(
        values in prop::collection::vec(any::<u8>(), 16),
        spacing in 0.0f64..2.0,
        radius in 0.2f64..3.0,
        hexagon in any::<bool>(),
        union in any::<bool>(),
    ) {
        let settings = Settings {
            resolution: 4,
            spacing,
            cylinder_radius: radius,
            shape: if hexagon { ShapeKind::Hexagon } else { ShapeKind::Cylinder },
            composition: if union { CompositionMode::Union } else { CompositionMode::Difference },
            ..Settings::default()
        };
        let field = sample_luma(&gray_image(4, 4, &values), &settings).unwrap();
        let relief = tile(&field, &settings).unwrap();
        for v in run_all(&relief, &field, &settings) {
            prop_assert!(v.passed, "{}: {}", v.oracle_name, v.detail);
        }
    }
}
