//! Request boundary for relief conversion.
//!
//! An HTTP handler hands [`process_upload`] the uploaded image bytes and the
//! settings form field, and forwards the returned [`UploadResponse`] as is.

pub mod dispatch;
pub mod messages;
pub mod scratch;

pub use dispatch::{parse_settings, process_upload, process_upload_in, BridgeError};
pub use messages::{ErrorBody, UploadResponse};
pub use scratch::ScratchDir;
