use clap::{Args, ValueEnum};
use relief_types::{CompositionMode, Settings, ShapeKind};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ShapeArg {
    Cylinder,
    HollowCylinder,
    Hexagon,
}

impl From<ShapeArg> for ShapeKind {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Cylinder => ShapeKind::Cylinder,
            ShapeArg::HollowCylinder => ShapeKind::HollowCylinder,
            ShapeArg::Hexagon => ShapeKind::Hexagon,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CompositionArg {
    Difference,
    Union,
}

impl From<CompositionArg> for CompositionMode {
    fn from(c: CompositionArg) -> Self {
        match c {
            CompositionArg::Difference => CompositionMode::Difference,
            CompositionArg::Union => CompositionMode::Union,
        }
    }
}

/// Conversion setting flags. Unset flags keep the base value.
#[derive(Args, Debug, Default)]
pub struct SettingsArgs {
    /// Maximum extrusion height in mm
    #[arg(long)]
    pub max_height: Option<f64>,

    /// Unit shape radius in mm
    #[arg(long)]
    pub cylinder_radius: Option<f64>,

    /// Gap between unit shapes in mm
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Grid cells along the image width
    #[arg(short, long)]
    pub resolution: Option<i64>,

    /// Base plate thickness in mm
    #[arg(long)]
    pub base_thickness: Option<f64>,

    /// Invert brightness for backlit prints
    #[arg(long)]
    pub backlight: bool,

    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,

    #[arg(long, value_enum)]
    pub composition: Option<CompositionArg>,

    /// Keep the image aspect ratio instead of a square grid
    #[arg(long)]
    pub preserve_aspect: bool,

    /// Border cells that emit no geometry
    #[arg(long)]
    pub edge_margin: Option<u32>,

    /// Scale the footprint so one mm covers this many source pixels
    #[arg(long)]
    pub pixels_per_mm: Option<f64>,
}

impl SettingsArgs {
    pub fn apply(&self, mut s: Settings) -> Settings {
        if let Some(v) = self.max_height {
            s.max_height = v;
        }
        if let Some(v) = self.cylinder_radius {
            s.cylinder_radius = v;
        }
        if let Some(v) = self.spacing {
            s.spacing = v;
        }
        if let Some(v) = self.resolution {
            s.resolution = v;
        }
        if let Some(v) = self.base_thickness {
            s.base_thickness = v;
        }
        if self.backlight {
            s.backlight_optimized = true;
        }
        if let Some(v) = self.shape {
            s.shape = v.into();
        }
        if let Some(v) = self.composition {
            s.composition = v.into();
        }
        if self.preserve_aspect {
            s.preserve_aspect = true;
        }
        if self.edge_margin.is_some() {
            s.edge_margin = self.edge_margin;
        }
        if self.pixels_per_mm.is_some() {
            s.pixels_per_mm = self.pixels_per_mm;
        }
        s
    }
}
