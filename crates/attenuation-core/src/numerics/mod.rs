/// Linear interpolation on an ascending grid, clamped to the end values
/// outside the grid. Returns `None` for a NaN `x` and for grids that are too
/// short, mismatched in length, or not sorted.
pub fn interpolate_linear(x: f64, x_grid: &[f64], y_grid: &[f64]) -> Option<f64> {
    if x.is_nan() || x_grid.len() < 2 || x_grid.len() != y_grid.len() {
        return None;
    }

    if !x_grid.windows(2).all(|window| window[0] <= window[1]) {
        return None;
    }

    Some(interpolate_sorted(x, x_grid, y_grid))
}

/// Same as [`interpolate_linear`] for grids already known to be valid. A NaN
/// `x` yields NaN.
pub(crate) fn interpolate_sorted(x: f64, x_grid: &[f64], y_grid: &[f64]) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= x_grid[0] {
        return y_grid[0];
    }

    let last_index = x_grid.len() - 1;
    if x >= x_grid[last_index] {
        return y_grid[last_index];
    }

    let upper = x_grid.partition_point(|grid_x| *grid_x < x);
    let lower = upper - 1;
    let x0 = x_grid[lower];
    let x1 = x_grid[upper];
    if x1 == x || x1 == x0 {
        return y_grid[upper];
    }

    let interpolation = (x - x0) / (x1 - x0);
    y_grid[lower] + interpolation * (y_grid[upper] - y_grid[lower])
}

pub fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

pub fn within_tolerance(
    lhs: f64,
    rhs: f64,
    abs_tol: f64,
    rel_tol: f64,
    relative_floor: f64,
) -> bool {
    let abs_diff = (lhs - rhs).abs();
    abs_diff <= abs_tol || relative_difference(lhs, rhs, relative_floor) <= rel_tol
}

/// Combines independent loss lengths: `1/L = sum(1/L_i)`.
pub fn combine_inverse_lengths(lengths: &[f64]) -> f64 {
    let inverse_sum: f64 = lengths.iter().map(|length| 1.0 / length).sum();
    1.0 / inverse_sum
}

#[cfg(test)]
mod tests {
    use super::{
        combine_inverse_lengths, interpolate_linear, interpolate_sorted, relative_difference,
        within_tolerance,
    };

    #[test]
    fn interpolate_linear_clamps_and_interpolates() {
        let x_grid = [0.0, 1.0, 2.0];
        let y_grid = [10.0, 20.0, 30.0];

        assert_eq!(interpolate_linear(-1.0, &x_grid, &y_grid), Some(10.0));
        assert_eq!(interpolate_linear(3.0, &x_grid, &y_grid), Some(30.0));
        assert_eq!(interpolate_linear(0.5, &x_grid, &y_grid), Some(15.0));
        assert_eq!(interpolate_linear(1.0, &x_grid, &y_grid), Some(20.0));
    }

    #[test]
    fn interpolate_linear_rejects_nan_query() {
        let x_grid = [0.0, 1.0];
        let y_grid = [1.0, 2.0];

        assert_eq!(interpolate_linear(f64::NAN, &x_grid, &y_grid), None);
        assert_eq!(interpolate_linear(f64::INFINITY, &x_grid, &y_grid), Some(2.0));
        assert_eq!(interpolate_linear(f64::NEG_INFINITY, &x_grid, &y_grid), Some(1.0));
        assert!(interpolate_sorted(f64::NAN, &x_grid, &y_grid).is_nan());
    }

    #[test]
    fn interpolate_linear_hits_grid_points_exactly() {
        let x_grid = [1.56962, 1.58974, 1.61039, 1.63157];
        let y_grid = [16.1419, 18.278, 21.0657, 24.8568];
        for (x, y) in x_grid.iter().zip(y_grid) {
            assert_eq!(interpolate_linear(*x, &x_grid, &y_grid), Some(y));
        }
    }

    #[test]
    fn interpolate_linear_rejects_invalid_grids() {
        assert_eq!(interpolate_linear(0.5, &[0.0], &[1.0]), None);
        assert_eq!(interpolate_linear(0.5, &[0.0, 1.0], &[1.0]), None);
        assert_eq!(
            interpolate_linear(0.5, &[0.0, 2.0, 1.0], &[0.0, 2.0, 1.0]),
            None
        );
    }

    #[test]
    fn relative_difference_uses_relative_floor() {
        let diff = relative_difference(0.0, 1.0e-10, 1.0e-6);
        assert!((diff - 1.0e-4).abs() < 1.0e-12);
    }

    #[test]
    fn within_tolerance_accepts_abs_or_relative_match() {
        assert!(within_tolerance(10.0, 10.001, 1.0e-2, 1.0e-6, 1.0e-12));
        assert!(within_tolerance(1000.0, 1000.2, 1.0e-6, 5.0e-4, 1.0e-12));
        assert!(!within_tolerance(1.0, 1.1, 1.0e-3, 1.0e-3, 1.0e-12));
    }

    #[test]
    fn inverse_lengths_add() {
        assert!((combine_inverse_lengths(&[2.0, 2.0]) - 1.0).abs() < 1.0e-12);
        assert!((combine_inverse_lengths(&[3.0, 6.0]) - 2.0).abs() < 1.0e-12);
        assert_eq!(combine_inverse_lengths(&[5.0, f64::INFINITY]), 5.0);
    }
}
