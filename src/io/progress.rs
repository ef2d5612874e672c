//! Per-phase progress bars and wall-clock phase timings

use crate::algorithm::executor::{GenerationObserver, Phase};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>16}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} ({{elapsed}})"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

// Balancing has only an upper bound, so it counts swaps instead of filling a bar
static SWAP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg:>14} {pos} swaps ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Shows one progress bar per generation phase and times each phase
///
/// Timings are recorded whether or not bars are drawn.
pub struct PhaseProgress {
    visible: bool,
    bar: Option<ProgressBar>,
    started: Option<(Phase, Instant)>,
    timings: Vec<(Phase, Duration)>,
}

impl PhaseProgress {
    /// Create a tracker, drawing bars only when `visible`
    pub const fn new(visible: bool) -> Self {
        Self {
            visible,
            bar: None,
            started: None,
            timings: Vec::new(),
        }
    }

    /// Completed phases with their wall-clock durations, in order
    pub fn timings(&self) -> &[(Phase, Duration)] {
        &self.timings
    }

    /// Sum of all recorded phase durations
    pub fn total(&self) -> Duration {
        self.timings.iter().map(|(_, elapsed)| *elapsed).sum()
    }

    fn create_bar(&self, phase: Phase, total_steps: usize) -> ProgressBar {
        if !self.visible {
            return ProgressBar::hidden();
        }
        let bar = if phase == Phase::Balancing {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SWAP_STYLE.clone());
            bar
        } else {
            let bar = ProgressBar::new(total_steps as u64);
            bar.set_style(PROGRESS_STYLE.clone());
            bar
        };
        bar.set_message(phase.to_string());
        bar
    }
}

impl GenerationObserver for PhaseProgress {
    fn phase_started(&mut self, phase: Phase, total_steps: usize) {
        self.bar = Some(self.create_bar(phase, total_steps));
        self.started = Some((phase, Instant::now()));
    }

    fn step_completed(&mut self, _phase: Phase, completed: usize) {
        if let Some(bar) = &self.bar {
            bar.set_position(completed as u64);
        }
    }

    fn phase_finished(&mut self, phase: Phase) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        if let Some((_, start)) = self.started.take().filter(|(started, _)| *started == phase) {
            self.timings.push((phase, start.elapsed()));
        }
    }
}
