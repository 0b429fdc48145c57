//! Assertion helpers with diagnostic output.

use relief_types::HeightField;

use crate::helpers::HarnessError;
use crate::oracle::OracleVerdict;

/// Fail with the first failing verdict.
pub fn assert_all_pass(verdicts: &[OracleVerdict], ctx: &str) -> Result<(), HarnessError> {
    match verdicts.iter().find(|v| !v.passed) {
        None => Ok(()),
        Some(v) => Err(HarnessError::OracleFailure {
            oracle: v.oracle_name.clone(),
            detail: format!("[{}] {}", ctx, v.detail),
        }),
    }
}

/// Assert row-major heights within `tol`.
pub fn assert_heights_close(
    field: &HeightField,
    expected: &[f64],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = field.heights();
    if actual.len() != expected.len() {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} cells, got {}",
                ctx,
                expected.len(),
                actual.len()
            ),
        });
    }
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if (a - e).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] cell {} (col {}, row {}): expected {:.6}, got {:.6} (tol={})",
                    ctx,
                    i,
                    i % field.cols(),
                    i / field.cols(),
                    e,
                    a,
                    tol
                ),
            });
        }
    }
    Ok(())
}

/// Assert a script contains `needle` exactly `count` times.
pub fn assert_occurrences(
    script: &str,
    needle: &str,
    count: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let found = script.matches(needle).count();
    if found == count {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} occurrences of {:?}, found {}",
                ctx, count, needle, found
            ),
        })
    }
}
