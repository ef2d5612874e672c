//! Tests for centered spectra, display scaling and the low-frequency ratio

#[cfg(test)]
mod tests {
    use bluenoise::NoiseError;
    use bluenoise::analysis::spectrum::{Spectrum, default_radius, transform};
    use ndarray::Array2;

    fn impulse(size: usize) -> Array2<u8> {
        let mut grid = Array2::zeros((size, size));
        grid[[0, 0]] = 255;
        grid
    }

    // Tests that a constant grid has no spectrum once the mean is removed
    // Verified by all-zero magnitudes, display and an undefined ratio
    #[test]
    fn test_constant_grid_spectrum_is_zero() {
        for value in [0, 200] {
            let grid = Array2::from_elem((8, 8), value);
            let spectrum = Spectrum::analyze(&grid).unwrap();
            assert!(spectrum.magnitudes().iter().all(|&m| m.abs() < 1e-9));
            assert!(spectrum.display().iter().all(|&v| v == 0));
            assert_eq!(spectrum.default_low_frequency_ratio(), None);
        }
    }

    // Tests the spectrum of a single impulse
    // Verified by a flat magnitude everywhere but the centered zero frequency
    #[test]
    fn test_impulse_has_flat_spectrum() {
        let spectrum = Spectrum::analyze(&impulse(8)).unwrap();
        for ((row, col), &magnitude) in spectrum.magnitudes().indexed_iter() {
            if (row, col) == (4, 4) {
                assert!(magnitude < 1e-9);
            } else {
                assert!((magnitude - 255.0).abs() < 1e-9, "bin ({row}, {col}) = {magnitude}");
            }
        }

        let display = transform(&impulse(8)).unwrap();
        assert_eq!(display[[4, 4]], 0);
        assert_eq!(display.iter().filter(|&&v| v == 255).count(), 63);

        let ratio = spectrum.default_low_frequency_ratio().unwrap();
        assert!((ratio - 1.0).abs() < 1e-9);
    }

    // Tests that the display grid is linear in magnitude
    // Verified by a bin at sqrt(1/5) of the peak landing on floor(0.447 * 256)
    #[test]
    fn test_display_is_linear() {
        let columns = [200, 100, 0, 0];
        let grid = Array2::from_shape_fn((8, 8), |(_, col)| columns[col % 4]);
        let display = transform(&grid).unwrap();

        assert_eq!(display[[4, 4]], 0);
        assert_eq!(display[[4, 2]], 255);
        assert_eq!(display[[4, 6]], 255);
        assert_eq!(display[[4, 0]], 114);
        assert_eq!(display.iter().filter(|&&v| v != 0).count(), 3);
    }

    // Tests that low-frequency content drives the ratio up
    // Verified with wide vertical stripes whose power sits near zero frequency
    #[test]
    fn test_stripes_have_high_low_frequency_ratio() {
        let stripes = Array2::from_shape_fn((8, 8), |(_, col)| if col < 4 { 255 } else { 0 });
        let spectrum = Spectrum::analyze(&stripes).unwrap();
        let ratio = spectrum.low_frequency_ratio(1.5).unwrap();
        assert!(ratio > 1.0, "ratio {ratio}");
    }

    // Tests the default radius rule
    // Verified for small, square and rectangular grids
    #[test]
    fn test_default_radius() {
        assert!((default_radius(8, 8) - 1.0).abs() < f64::EPSILON);
        assert!((default_radius(64, 64) - 4.0).abs() < f64::EPSILON);
        assert!((default_radius(256, 32) - 2.0).abs() < f64::EPSILON);
    }

    // Tests rejection of empty input
    // Verified by the parameter named in the error
    #[test]
    fn test_empty_grid_is_rejected() {
        let empty = Array2::<u8>::zeros((0, 4));
        match Spectrum::analyze(&empty) {
            Err(NoiseError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "grid"),
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }
}
