pub mod calibration;
pub mod hexagon;
pub mod pipeline;
pub mod sampler;
pub mod tiler;
pub mod types;

pub use calibration::{
    calibration_depth, calibration_solid, calibration_solids, write_calibration_set,
    CalibrationSettings, CALIBRATION_LEVELS,
};
pub use hexagon::hexagon_points;
pub use pipeline::{
    convert_bytes, convert_file, Conversion, GENERATOR, OUTPUT_FILE_NAME,
};
pub use sampler::{intensity_to_height, sample_bytes, sample_image, sample_luma, sample_path};
pub use tiler::{emit, render_quality, tile, unit_shape, Layout, Placement, Relief};
pub use types::*;
