//! Tests for swap-based pattern balancing

#[cfg(test)]
mod tests {
    use bluenoise::NoiseError;
    use bluenoise::algorithm::balance::{balance_pattern, is_balanced};
    use bluenoise::algorithm::executor::{GenerationObserver, Phase, SilentObserver};
    use bluenoise::spatial::{GaussianKernel, OccupancyGrid};

    #[derive(Default)]
    struct SwapCounter {
        steps: usize,
        toggles: usize,
        finished: bool,
    }

    impl GenerationObserver for SwapCounter {
        fn step_completed(&mut self, _phase: Phase, _completed: usize) {
            self.steps += 1;
        }

        fn cell_toggled(&mut self, _phase: Phase, _index: usize, _on: bool) {
            self.toggles += 1;
        }

        fn phase_finished(&mut self, phase: Phase) {
            self.finished = phase == Phase::Balancing;
        }
    }

    fn kernel(size: usize) -> GaussianKernel {
        GaussianKernel::new(size, 1.5, 18.0).unwrap()
    }

    // Tests balancing a clustered pattern
    // Verified by the on-count being preserved and the result being a fixed point
    #[test]
    fn test_balance_reaches_fixed_point() {
        let size = 8;
        let clustered = OccupancyGrid::from_indices(size, 0..16);
        let mut counter = SwapCounter::default();

        let outcome = balance_pattern(clustered, &kernel(size), 640, &mut counter).unwrap();

        assert_eq!(outcome.pattern.on_count(), 16);
        assert!(outcome.swaps > 0);
        assert!(is_balanced(&outcome.pattern, &kernel(size)).unwrap());
        assert_eq!(counter.steps, outcome.swaps);
        assert_eq!(counter.toggles, outcome.swaps * 2);
        assert!(counter.finished);
    }

    // Tests that a balanced pattern is left alone
    // Verified by rebalancing a balancer result with zero swaps
    #[test]
    fn test_balanced_pattern_needs_no_swaps() {
        let size = 8;
        let first = balance_pattern(
            OccupancyGrid::from_indices(size, (0..64).step_by(3)),
            &kernel(size),
            640,
            &mut SilentObserver,
        )
        .unwrap();

        let second = balance_pattern(
            first.pattern.clone(),
            &kernel(size),
            640,
            &mut SilentObserver,
        )
        .unwrap();
        assert_eq!(second.swaps, 0);
        assert_eq!(second.pattern, first.pattern);
    }

    // Tests the iteration cap
    // Verified by a zero cap on an unbalanced pattern returning the untouched pattern
    #[test]
    fn test_iteration_cap() {
        let size = 8;
        let clustered = OccupancyGrid::from_indices(size, 0..16);
        let result = balance_pattern(clustered.clone(), &kernel(size), 0, &mut SilentObserver);

        match result {
            Err(NoiseError::BalanceDidNotConverge {
                iterations,
                on_count,
                pattern,
            }) => {
                assert_eq!(iterations, 0);
                assert_eq!(on_count, 16);
                assert_eq!(*pattern, clustered);
            }
            other => unreachable!("Expected BalanceDidNotConverge, got {other:?}"),
        }
    }

    // Tests balancing an empty pattern
    // Verified by the tightest-cluster query failing
    #[test]
    fn test_empty_pattern() {
        let result = balance_pattern(OccupancyGrid::new(4), &kernel(4), 10, &mut SilentObserver);
        assert!(matches!(result, Err(NoiseError::EmptyPattern { .. })));
    }
}
