use std::f64::consts::PI;

/// 3x3 weight matrix for the directional emboss convolution
///
/// The eight outer cells hold cosines of the light angle offset in 45-degree
/// steps. The center cell is always exactly zero, so a pixel never
/// contributes to its own relief value.
#[derive(Debug, Clone, Copy)]
pub struct WeightMatrix([[f64; 3]; 3]);

impl WeightMatrix {
    /// Derive the weights for a light angle in degrees
    ///
    /// At angle 0 the light points straight left, increasing angles rotate
    /// it counterclockwise.
    pub fn from_angle(angle: f64) -> Self {
        let r = angle * 2.0 * PI / 360.0;
        let dr = PI / 4.0;

        Self([
            [(r + dr).cos(), (r + 2.0 * dr).cos(), (r + 3.0 * dr).cos()],
            [r.cos(), 0.0, (r + 4.0 * dr).cos()],
            [(r - dr).cos(), (r - 2.0 * dr).cos(), (r - 3.0 * dr).cos()],
        ])
    }

    /// Weight at kernel cell (row, col), both in 0..3
    #[inline]
    pub fn at(&self, row: u32, col: u32) -> f64 {
        self.0[row as usize][col as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_angle_zero_points_left() {
        let w = WeightMatrix::from_angle(0.0);

        assert_eq!(w.at(1, 1), 0.0);
        assert!((w.at(1, 0) - 1.0).abs() < EPS);
        assert!((w.at(1, 2) + 1.0).abs() < EPS);
        assert!((w.at(0, 0) - (PI / 4.0).cos()).abs() < EPS);
        assert!((w.at(2, 0) - (PI / 4.0).cos()).abs() < EPS);
    }

    #[test]
    fn test_center_is_zero_for_any_angle() {
        for angle in [0.0, 33.3, 45.0, 90.0, 180.0, 271.5, 360.0] {
            let w = WeightMatrix::from_angle(angle);
            assert_eq!(w.at(1, 1), 0.0, "angle {angle}");

            for row in 0..3 {
                for col in 0..3 {
                    let v = w.at(row, col);
                    assert!(
                        (-1.0..=1.0).contains(&v),
                        "weight {v} at ({row}, {col}) for angle {angle}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_outer_weights_cancel_out() {
        for angle in [0.0, 57.3, 135.0, 300.0] {
            let w = WeightMatrix::from_angle(angle);
            let sum: f64 = (0..3)
                .flat_map(|row| (0..3).map(move |col| w.at(row, col)))
                .sum();
            assert!(sum.abs() < EPS, "angle {angle} sums to {sum}");
        }
    }

    #[test]
    fn test_full_turn_matches_angle_zero() {
        let a = WeightMatrix::from_angle(0.0);
        let b = WeightMatrix::from_angle(360.0);

        for row in 0..3 {
            for col in 0..3 {
                assert!((a.at(row, col) - b.at(row, col)).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_opposite_angle_negates_weights() {
        let a = WeightMatrix::from_angle(30.0);
        let b = WeightMatrix::from_angle(210.0);

        for row in 0..3 {
            for col in 0..3 {
                assert!((a.at(row, col) + b.at(row, col)).abs() < EPS);
            }
        }
    }
}
