//! Grid layout and CSG emission.
//!
//! Every cell with a positive height becomes one unit shape positioned on a
//! square grid (cylinders) or a honeycomb (hexagons). The shapes are unioned
//! and combined with a base block, either carved out of it or standing on it.

use csg_script::{to_scad, RenderQuality, Solid, SolidBuilder};
use relief_types::{CompositionMode, HeightField, Settings, ShapeKind};
use tracing::{info, instrument};

use crate::hexagon::{hexagon_points, HEX_WIDTH_FACTOR};
use crate::types::ReliefError;

/// Extra height added to every unit shape so boolean faces never coincide.
pub const OVERSHOOT: f64 = 1.0;
/// Wall thickness of a hollow cylinder relative to its radius.
pub const HOLLOW_WALL_FRACTION: f64 = 0.2;
pub const CYLINDER_FACETS: u32 = 32;
pub const HEXAGON_FACETS: u32 = 6;

/// Cell positions for one grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub shape: ShapeKind,
    pub radius: f64,
    pub spacing: f64,
    pub cols: usize,
    pub rows: usize,
    pub pitch_x: f64,
    pub pitch_y: f64,
}

impl Layout {
    pub fn for_settings(settings: &Settings, cols: usize, rows: usize) -> Self {
        let r = settings.cylinder_radius;
        let s = settings.spacing;
        let (pitch_x, pitch_y) = if settings.shape.is_offset_layout() {
            (
                HEX_WIDTH_FACTOR * r + s,
                1.5 * r + s * HEX_WIDTH_FACTOR / 2.0,
            )
        } else {
            (2.0 * r + s, 2.0 * r + s)
        };
        Self {
            shape: settings.shape,
            radius: r,
            spacing: s,
            cols,
            rows,
            pitch_x,
            pitch_y,
        }
    }

    /// Width of one unit shape across its neighbours' direction.
    pub fn shape_width(&self) -> f64 {
        if self.shape.is_offset_layout() {
            HEX_WIDTH_FACTOR * self.radius
        } else {
            2.0 * self.radius
        }
    }

    /// XY centre of cell `(col, row)`.
    pub fn center(&self, col: usize, row: usize) -> [f64; 2] {
        if self.shape.is_offset_layout() {
            let offset = if row % 2 == 1 { self.pitch_x / 2.0 } else { 0.0 };
            [
                col as f64 * self.pitch_x + self.shape_width() / 2.0 + offset,
                row as f64 * self.pitch_y + self.radius,
            ]
        } else {
            [
                col as f64 * self.pitch_x + self.radius,
                row as f64 * self.pitch_y + self.radius,
            ]
        }
    }

    /// XY size of the base block.
    pub fn footprint(&self) -> [f64; 2] {
        if self.shape.is_offset_layout() {
            let stagger = if self.rows > 1 { self.pitch_x / 2.0 } else { 0.0 };
            [
                self.cols as f64 * self.pitch_x + stagger,
                self.rows.saturating_sub(1) as f64 * self.pitch_y
                    + 2.0 * self.radius
                    + self.spacing,
            ]
        } else {
            [
                self.cols as f64 * self.pitch_x,
                self.rows as f64 * self.pitch_y,
            ]
        }
    }
}

/// One emitted unit shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub col: usize,
    pub row: usize,
    pub center: [f64; 2],
    /// Z of the shape's bottom face. `-OVERSHOOT` for a cut through the block.
    pub base_z: f64,
    /// Extruded height including overshoot.
    pub height: f64,
}

/// A tiled relief ready for serialization.
#[derive(Debug, Clone)]
pub struct Relief {
    pub solid: Solid,
    pub shape_count: usize,
    pub layout: Layout,
    pub composition: CompositionMode,
    /// Size of the base block before any rescale.
    pub block: [f64; 3],
    /// XY factor applied to the whole tree, when a physical size was requested.
    pub scale: Option<f64>,
    pub placements: Vec<Placement>,
}

/// A unit shape of the given height with its base centred at the origin.
///
/// A hollow cylinder that is carved out of the block has an open bore, so the
/// core inside the ring stays joined to the block floor. Standing on a plate it
/// keeps a floor of wall thickness.
pub fn unit_shape(
    shape: ShapeKind,
    composition: CompositionMode,
    radius: f64,
    height: f64,
) -> Solid {
    match shape {
        ShapeKind::Cylinder => Solid::cylinder_with_segments(radius, height, CYLINDER_FACETS),
        ShapeKind::HollowCylinder => {
            let wall = HOLLOW_WALL_FRACTION * radius;
            let (bore_z, bore_h) = match composition {
                CompositionMode::Difference => (-OVERSHOOT, height + 2.0 * OVERSHOOT),
                CompositionMode::Union => (wall, height),
            };
            Solid::difference(
                Solid::cylinder_with_segments(radius, height, CYLINDER_FACETS),
                [Solid::cylinder_with_segments(radius - wall, bore_h, CYLINDER_FACETS)
                    .translate([0.0, 0.0, bore_z])],
            )
        }
        ShapeKind::Hexagon => Solid::polygon(hexagon_points(radius)).linear_extrude(height),
    }
}

/// Script directives for a shape kind.
pub fn render_quality(shape: ShapeKind) -> RenderQuality {
    match shape {
        ShapeKind::Hexagon => RenderQuality::fixed(HEXAGON_FACETS),
        ShapeKind::Cylinder | ShapeKind::HollowCylinder => RenderQuality::fixed(CYLINDER_FACETS),
    }
}

/// Lay out one unit shape per non-zero cell and combine them with the base block.
#[instrument(skip_all, fields(cols = field.cols(), rows = field.rows()))]
pub fn tile(field: &HeightField, settings: &Settings) -> Result<Relief, ReliefError> {
    settings.validate()?;
    let layout = Layout::for_settings(settings, field.cols(), field.rows());
    let [fx, fy] = layout.footprint();
    let base = settings.base_thickness;
    let block_h = match settings.composition {
        CompositionMode::Difference => settings.max_height + base,
        CompositionMode::Union => base,
    };
    let block = [fx, fy, block_h];

    let mut shapes = SolidBuilder::union();
    let mut placements = Vec::with_capacity(field.non_zero_count());
    for cell in field.iter_cells().filter(|c| c.height > 0.0) {
        let h = cell.height.min(settings.max_height);
        let (base_z, height) = match settings.composition {
            // A cut down to the block's bottom face continues below it.
            CompositionMode::Difference if block_h - h <= 0.0 => {
                (-OVERSHOOT, block_h + 2.0 * OVERSHOOT)
            }
            CompositionMode::Difference => (block_h - h, h + OVERSHOOT),
            CompositionMode::Union => {
                let sink = OVERSHOOT.min(base);
                (base - sink, h + sink)
            }
        };
        let center = layout.center(cell.col, cell.row);
        shapes.push(
            unit_shape(
                settings.shape,
                settings.composition,
                settings.cylinder_radius,
                height,
            )
            .translate([center[0], center[1], base_z]),
        );
        placements.push(Placement {
            col: cell.col,
            row: cell.row,
            center,
            base_z,
            height,
        });
    }

    let shape_count = shapes.len();
    let block_solid = Solid::cuboid(block);
    let mut solid = match settings.composition {
        CompositionMode::Difference => Solid::difference(block_solid, [shapes.build()]),
        CompositionMode::Union => Solid::union([block_solid, shapes.build()]),
    };

    let scale = settings
        .pixels_per_mm
        .map(|ppm| field.source_size().0 as f64 / ppm / fx);
    if let Some(k) = scale {
        solid = solid.scale([k, k, 1.0]);
    }

    info!(
        shapes = shape_count,
        block_x = fx,
        block_y = fy,
        block_z = block_h,
        "tiled relief"
    );
    Ok(Relief {
        solid,
        shape_count,
        layout,
        composition: settings.composition,
        block,
        scale,
        placements,
    })
}

/// Tile a height field and render it as script text.
pub fn emit(field: &HeightField, settings: &Settings) -> Result<String, ReliefError> {
    let relief = tile(field, settings)?;
    Ok(to_scad(&relief.solid, &render_quality(settings.shape))?)
}
