use std::io::Cursor;
use std::path::PathBuf;

use image::{DynamicImage, GrayImage, ImageOutputFormat, Luma};
use relief_bridge::messages::{CONTENT_DISPOSITION, CONTENT_TYPE};
use relief_bridge::*;
use uuid::Uuid;

// ── Helper functions ─────────────────────────────────────────────────────

fn gradient_png(w: u32, h: u32) -> Vec<u8> {
    let img = GrayImage::from_fn(w, h, |x, _| Luma([(x * 255 / w.max(1)) as u8]));
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .unwrap();
    buf
}

/// Fresh, empty root so leftover scratch dirs are observable.
fn scratch_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("relief-bridge-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&root).unwrap();
    root
}

fn is_empty_dir(path: &PathBuf) -> bool {
    std::fs::read_dir(path).unwrap().next().is_none()
}

// ── Success ──────────────────────────────────────────────────────────────

#[test]
fn upload_returns_script_attachment() {
    let root = scratch_root();
    let resp = process_upload_in(&root, &gradient_png(8, 8), r#"{"resolution": 8}"#);

    assert_eq!(resp.status, 200);
    assert_eq!(resp.header(CONTENT_TYPE), Some("model/stl"));
    assert_eq!(
        resp.header(CONTENT_DISPOSITION),
        Some("attachment;filename=output.stl")
    );
    let text = String::from_utf8(resp.body).unwrap();
    assert!(text.starts_with("// Generated by relief"));
    assert!(text.contains("difference() {"));
    assert!(is_empty_dir(&root));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn default_settings_accepted() {
    let resp = process_upload(&gradient_png(60, 40), "");
    assert_eq!(resp.status, 200);
}

// ── Failures ─────────────────────────────────────────────────────────────

#[test]
fn bad_settings_give_json_error() {
    let root = scratch_root();
    let resp = process_upload_in(&root, &gradient_png(4, 4), r#"{"resolution": 0}"#);

    assert_eq!(resp.status, 500);
    let body = resp.error_body().unwrap();
    assert!(body.error.contains("resolution"));
    assert!(is_empty_dir(&root));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn corrupt_image_gives_json_error_and_cleans_up() {
    let root = scratch_root();
    let resp = process_upload_in(&root, b"definitely not an image", "{}");

    assert_eq!(resp.status, 500);
    assert!(resp.error_body().unwrap().error.contains("image load error"));
    assert!(is_empty_dir(&root));

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn malformed_settings_json() {
    let resp = process_upload(&gradient_png(4, 4), "not json");
    assert_eq!(resp.status, 500);
    assert!(resp.error_body().unwrap().error.starts_with("malformed settings"));
}
