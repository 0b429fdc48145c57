pub mod field;
pub mod settings;
pub mod shape;

pub use field::*;
pub use settings::*;
pub use shape::*;
