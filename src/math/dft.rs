//! Two-dimensional FFT of real grids for arbitrary sizes
//!
//! Rows are transformed first, then columns, each with a plan from a shared
//! `rustfft` planner. Mixed-radix and Bluestein plans cover every length,
//! so texture sides need not be powers of two.

use ndarray::Array2;
use num_complex::Complex;
use rustfft::FftPlanner;

/// 2D forward DFT of a real-valued grid
///
/// Output bin `[v, u]` holds vertical frequency `v` and horizontal
/// frequency `u`, zero frequency at `[0, 0]`. Unnormalized, so bin
/// `[0, 0]` is the sum of the input.
pub fn dft_2d(input: &Array2<f64>) -> Array2<Complex<f64>> {
    let (rows, cols) = input.dim();
    let mut output = input.mapv(|re| Complex::new(re, 0.0));
    if rows == 0 || cols == 0 {
        return output;
    }

    let mut planner = FftPlanner::<f64>::new();
    let row_fft = planner.plan_fft_forward(cols);
    let col_fft = planner.plan_fft_forward(rows);

    let mut lane = Vec::with_capacity(rows.max(cols));
    for mut row in output.rows_mut() {
        lane.clear();
        lane.extend(row.iter().copied());
        row_fft.process(&mut lane);
        row.iter_mut().zip(&lane).for_each(|(slot, &value)| *slot = value);
    }

    for mut column in output.columns_mut() {
        lane.clear();
        lane.extend(column.iter().copied());
        col_fft.process(&mut lane);
        column.iter_mut().zip(&lane).for_each(|(slot, &value)| *slot = value);
    }

    output
}

/// Move zero frequency from `[0, 0]` to `[rows / 2, cols / 2]`
pub fn shift_to_center<T: Clone + Default>(grid: &Array2<T>) -> Array2<T> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((rows, cols), |(row, col)| {
        let source = [(row + rows - rows / 2) % rows, (col + cols - cols / 2) % cols];
        grid.get(source).cloned().unwrap_or_default()
    })
}
