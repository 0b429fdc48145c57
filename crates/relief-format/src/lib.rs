pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;
pub mod script;

pub use errors::{LoadError, WriteError};
pub use load::{load_preset, MIN_FORMAT_VERSION};
pub use metadata::{PresetMetadata, ScriptHeader};
pub use save::{save_preset, FORMAT_ID, FORMAT_VERSION};
pub use script::{render_script_file, write_script};
