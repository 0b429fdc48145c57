//! Test harness for relief conversion.
//!
//! Provides synthetic inputs and checks over tiled reliefs so scenario tests
//! can verify a conversion end to end.
//!
//! # Key Components
//!
//! - [`oracle`]: Verification functions returning pass/fail verdicts
//! - [`report`]: Structured text relief descriptions
//! - [`helpers`]: Error type and synthetic image builders
//! - [`assertions`]: Assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::ReliefReport;
