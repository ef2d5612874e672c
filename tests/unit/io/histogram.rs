//! Tests for intensity histograms and their CSV export

#[cfg(test)]
mod tests {
    use bluenoise::NoiseError;
    use bluenoise::io::histogram::{histogram, render_histogram_csv, write_histogram};
    use ndarray::{Array2, array};
    use tempfile::TempDir;

    // Tests bin counting
    // Verified by a grid with repeated values
    #[test]
    fn test_histogram_counts() {
        let counts = histogram(&array![[0, 0, 7], [255, 7, 7]]);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[7], 3);
        assert_eq!(counts[255], 1);
        assert_eq!(counts.iter().sum::<usize>(), 6);
    }

    // Tests the CSV layout
    // Verified by the header row and one row per value including empty bins
    #[test]
    fn test_render_histogram_csv() {
        let csv = render_histogram_csv(&histogram(&array![[3, 3]]));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 257);
        assert_eq!(lines.first(), Some(&"Value,Count"));
        assert_eq!(lines.get(1), Some(&"0,0"));
        assert_eq!(lines.get(4), Some(&"3,2"));
        assert_eq!(lines.last(), Some(&"255,0"));
        assert!(csv.ends_with("255,0\n"));
    }

    // Tests writing the histogram file
    // Verified by reading the file back
    #[test]
    fn test_write_histogram() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("noise.histogram.csv");
        let grid = Array2::from_shape_fn((16, 16), |(row, col)| (row * 16 + col) as u8);

        write_histogram(&path, &grid).unwrap();
        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.lines().skip(1).all(|line| line.ends_with(",1")));
    }

    // Tests that a failed write names the histogram path and operation
    // Verified by writing onto an existing directory
    #[test]
    fn test_write_histogram_reports_operation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();

        match write_histogram(&path, &array![[0u8]]) {
            Err(NoiseError::FileSystem {
                path: reported,
                operation,
                ..
            }) => {
                assert_eq!(reported, path);
                assert_eq!(operation, "write histogram");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }
}
