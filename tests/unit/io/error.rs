//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use bluenoise::NoiseError;
    use bluenoise::io::error::{WithContext, computation_error, invalid_parameter};
    use bluenoise::spatial::OccupancyGrid;
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = NoiseError::FileSystem {
            path: "/tmp/noise.png".into(),
            operation: "read",
            source: io_error,
        };
        assert!(error.source().is_some());

        let error = invalid_parameter("sigma", &-1.0, &"must be positive");
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("size", &0, &"must be positive").to_string();
        assert!(message.contains("size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests pattern errors name the query and the grid
    // Verified by omitting the swap count from the message
    #[test]
    fn test_pattern_error_messages() {
        let empty = NoiseError::EmptyPattern {
            query: "largest void",
            grid_size: 16,
        };
        let message = empty.to_string();
        assert!(message.contains("largest void"));
        assert!(message.contains("16x16"));

        let stuck = NoiseError::BalanceDidNotConverge {
            iterations: 160,
            on_count: 8,
            pattern: Box::new(OccupancyGrid::new(4)),
        };
        let message = stuck.to_string();
        assert!(message.contains("160 swaps"));
        assert!(message.contains("8 of 16"));

        let failed = computation_error("rank assignment", &"not a permutation");
        assert!(failed.to_string().contains("rank assignment"));
    }

    // Tests context helpers on converted I/O errors
    // Verified by keeping the placeholder path
    #[test]
    fn test_with_path_and_operation() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));

        match result.with_path(Path::new("out/noise.h")).with_operation("write header") {
            Err(NoiseError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, PathBuf::from("out/noise.h"));
                assert_eq!(operation, "write header");
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests that a known path is not overwritten
    // Verified by replacing the path unconditionally
    #[test]
    fn test_with_path_keeps_known_path() {
        let result: bluenoise::Result<()> = Err(NoiseError::FileSystem {
            path: PathBuf::from("first.png"),
            operation: "read",
            source: std::io::Error::other("boom"),
        });

        match result.with_path(Path::new("second.png")) {
            Err(NoiseError::FileSystem { path, .. }) => {
                assert_eq!(path, PathBuf::from("first.png"));
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }
}
