//! Structured text relief reports for test diagnostics.

use relief_ops::tiler::Relief;
use relief_types::{HeightField, Settings};

use crate::oracle::{run_all, OracleVerdict};

/// A relief summary with oracle results.
pub struct ReliefReport {
    pub grid: (usize, usize),
    pub shape_count: usize,
    pub max_height: f64,
    pub block: [f64; 3],
    pub scale: Option<f64>,
    pub oracle_results: Vec<OracleVerdict>,
}

impl ReliefReport {
    pub fn new(relief: &Relief, field: &HeightField, settings: &Settings) -> Self {
        Self {
            grid: (field.cols(), field.rows()),
            shape_count: relief.shape_count,
            max_height: field.max_height(),
            block: relief.block,
            scale: relief.scale,
            oracle_results: run_all(relief, field, settings),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.oracle_results.iter().all(|v| v.passed)
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Relief Report ===\n\n");
        out.push_str(&format!(
            "Grid: {} x {} ({} shapes, max height {:.3})\n",
            self.grid.0, self.grid.1, self.shape_count, self.max_height
        ));
        out.push_str(&format!(
            "Block: {:.3} x {:.3} x {:.3}\n",
            self.block[0], self.block[1], self.block[2]
        ));
        if let Some(k) = self.scale {
            out.push_str(&format!("Scale: {:.4}\n", k));
        }

        out.push_str(&format!(
            "\nOracle Results ({} checks):\n",
            self.oracle_results.len()
        ));
        for v in &self.oracle_results {
            let status = if v.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
        }
        out
    }
}
