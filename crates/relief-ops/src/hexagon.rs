//! Hexagon outline generation.

use std::f64::consts::PI;

/// Flat-to-flat width of a regular hexagon divided by its circumradius.
pub const HEX_WIDTH_FACTOR: f64 = 1.732_050_807_568_877_2;

/// Corners of a regular hexagon centred at the origin, counter-clockwise.
///
/// Corners sit at 30° + k·60°, so the hexagon is pointy along Y and flat
/// along X. Rows of these tile as a honeycomb when odd rows shift by half
/// a pitch in X.
pub fn hexagon_points(radius: f64) -> Vec<[f64; 2]> {
    (0..6)
        .map(|k| {
            let angle = PI / 6.0 + k as f64 * PI / 3.0;
            [radius * angle.cos(), radius * angle.sin()]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn six_points_on_circle() {
        let pts = hexagon_points(2.0);
        assert_eq!(pts.len(), 6);
        for p in &pts {
            assert_relative_eq!((p[0] * p[0] + p[1] * p[1]).sqrt(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn pointy_along_y() {
        let pts = hexagon_points(1.0);
        let max_x = pts.iter().map(|p| p[0]).fold(f64::MIN, f64::max);
        let max_y = pts.iter().map(|p| p[1]).fold(f64::MIN, f64::max);
        assert_relative_eq!(2.0 * max_x, HEX_WIDTH_FACTOR, epsilon = 1e-12);
        assert_relative_eq!(max_y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn counter_clockwise_winding() {
        let pts = hexagon_points(1.0);
        let area2: f64 = (0..6)
            .map(|i| {
                let a = pts[i];
                let b = pts[(i + 1) % 6];
                a[0] * b[1] - b[0] * a[1]
            })
            .sum();
        assert!(area2 > 0.0);
    }
}
