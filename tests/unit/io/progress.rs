//! Tests for phase progress bars and timing collection

#[cfg(test)]
mod tests {
    use bluenoise::algorithm::executor::{
        GenerationObserver, GeneratorConfig, Phase, VoidAndCluster,
    };
    use bluenoise::io::progress::PhaseProgress;

    // Tests timing collection with hidden bars
    // Verified by dropping the timing push in phase_finished
    #[test]
    fn test_timings_recorded_in_order() {
        let mut progress = PhaseProgress::new(false);
        progress.phase_started(Phase::Seeding, 10);
        progress.step_completed(Phase::Seeding, 5);
        progress.phase_finished(Phase::Seeding);
        progress.phase_started(Phase::Balancing, 100);
        progress.phase_finished(Phase::Balancing);

        let phases: Vec<Phase> = progress.timings().iter().map(|(phase, _)| *phase).collect();
        assert_eq!(phases, [Phase::Seeding, Phase::Balancing]);
        assert!(progress.total() >= progress.timings().iter().map(|(_, t)| *t).max().unwrap());
    }

    // Tests that a finish without a matching start is ignored
    // Verified by recording every finish event
    #[test]
    fn test_unmatched_finish_is_ignored() {
        let mut progress = PhaseProgress::new(false);
        progress.phase_finished(Phase::VoidFilling);

        progress.phase_started(Phase::ClusterRemoval, 4);
        progress.phase_finished(Phase::VoidFilling);
        assert!(progress.timings().is_empty());
        assert_eq!(progress.total().as_nanos(), 0);
    }

    // Tests a tracker attached to a full generation run
    // Verified by one timing per phase
    #[test]
    fn test_progress_during_generation() {
        let generator = VoidAndCluster::new(GeneratorConfig::with_size(8)).unwrap();
        let mut progress = PhaseProgress::new(false);
        generator.generate_observed(&mut progress).unwrap();
        assert_eq!(progress.timings().len(), 4);
    }
}
