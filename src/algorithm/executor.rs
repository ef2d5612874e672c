use crate::{
    algorithm::balance::balance_pattern,
    algorithm::ranking::{RankGrid, rank_pattern},
    algorithm::seeding::{SeedingStrategy, initial_pattern},
    io::configuration::{
        BALANCE_ITERATION_FACTOR, DEFAULT_CANDIDATE_MULTIPLIER, DEFAULT_CUTOFF_SIGMAS,
        DEFAULT_GRID_SIZE, DEFAULT_SEED, DEFAULT_SIGMA, MAX_GRID_SIZE,
    },
    io::error::{Result, invalid_parameter},
    spatial::{GaussianKernel, OccupancyGrid},
};
use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng};
use std::fmt;

/// Generation parameters
///
/// Optional fields are derived from the others when left as `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Side length N of the square grid
    pub size: usize,
    /// Number of "on" cells in the prototype pattern, defaults to N²/2
    pub target_count: Option<usize>,
    /// Standard deviation of the energy kernel in cells
    pub sigma: f64,
    /// Kernel cutoff radius in cells, defaults to `DEFAULT_CUTOFF_SIGMAS * sigma`
    pub cutoff_radius: Option<f64>,
    /// Initial pattern strategy
    pub seeding: SeedingStrategy,
    /// Best-candidate samples per placed cell
    pub candidate_multiplier: usize,
    /// Balancing swap cap, defaults to `BALANCE_ITERATION_FACTOR * N²`
    pub max_balance_iterations: Option<usize>,
    /// Random seed for the initial pattern
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            target_count: None,
            sigma: DEFAULT_SIGMA,
            cutoff_radius: None,
            seeding: SeedingStrategy::default(),
            candidate_multiplier: DEFAULT_CANDIDATE_MULTIPLIER,
            max_balance_iterations: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration for a grid of side `size`
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Effective number of "on" cells in the prototype pattern
    pub const fn target_count(&self) -> usize {
        match self.target_count {
            Some(count) => count,
            None => self.size * self.size / 2,
        }
    }

    /// Effective kernel cutoff radius
    pub fn cutoff_radius(&self) -> f64 {
        self.cutoff_radius.unwrap_or(DEFAULT_CUTOFF_SIGMAS * self.sigma)
    }

    /// Effective balancing swap cap
    pub const fn max_balance_iterations(&self) -> usize {
        match self.max_balance_iterations {
            Some(cap) => cap,
            None => BALANCE_ITERATION_FACTOR * self.size * self.size,
        }
    }

    /// Check parameters before any allocation happens
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero or exceeds `MAX_GRID_SIZE`
    /// - The target count is 0, N² or larger (nothing left to cluster or fill)
    /// - `candidate_multiplier` is zero
    /// - `sigma` or the cutoff radius are not valid kernel parameters
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 || self.size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("must be between 1 and {MAX_GRID_SIZE}"),
            ));
        }

        let cells = self.size * self.size;
        let target = self.target_count();
        if target == 0 || target >= cells {
            return Err(invalid_parameter(
                "target_count",
                &target,
                &format!("must leave both on and off cells in a {cells}-cell grid"),
            ));
        }

        if self.candidate_multiplier == 0 {
            return Err(invalid_parameter(
                "candidate_multiplier",
                &self.candidate_multiplier,
                &"must be at least 1",
            ));
        }

        // Kernel construction carries the sigma and cutoff checks
        GaussianKernel::new(1, self.sigma, self.cutoff_radius()).map(|_| ())
    }
}

/// Stages of a generation run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Building the initial pattern
    Seeding,
    /// Swapping clusters into voids until the pattern is stable
    Balancing,
    /// Ranking the prototype's cells by removing tightest clusters
    ClusterRemoval,
    /// Ranking the remaining cells by filling largest voids
    VoidFilling,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Seeding => "Seeding",
            Self::Balancing => "Balancing",
            Self::ClusterRemoval => "Cluster removal",
            Self::VoidFilling => "Void filling",
        };
        f.pad(name)
    }
}

/// Receives progress from a generation run
///
/// All methods default to doing nothing. The generator never prints;
/// observers decide what to show or record.
pub trait GenerationObserver {
    /// A phase begins; `total_steps` is its step count or upper bound
    fn phase_started(&mut self, _phase: Phase, _total_steps: usize) {}

    /// `completed` steps of the phase are done
    fn step_completed(&mut self, _phase: Phase, _completed: usize) {}

    /// A phase ended, successfully or not
    fn phase_finished(&mut self, _phase: Phase) {}

    /// The initial pattern is ready
    fn pattern_seeded(&mut self, _pattern: &OccupancyGrid) {}

    /// A cell changed state during a phase
    fn cell_toggled(&mut self, _phase: Phase, _index: usize, _on: bool) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl GenerationObserver for SilentObserver {}

impl<T: GenerationObserver> GenerationObserver for Option<T> {
    fn phase_started(&mut self, phase: Phase, total_steps: usize) {
        if let Some(inner) = self {
            inner.phase_started(phase, total_steps);
        }
    }

    fn step_completed(&mut self, phase: Phase, completed: usize) {
        if let Some(inner) = self {
            inner.step_completed(phase, completed);
        }
    }

    fn phase_finished(&mut self, phase: Phase) {
        if let Some(inner) = self {
            inner.phase_finished(phase);
        }
    }

    fn pattern_seeded(&mut self, pattern: &OccupancyGrid) {
        if let Some(inner) = self {
            inner.pattern_seeded(pattern);
        }
    }

    fn cell_toggled(&mut self, phase: Phase, index: usize, on: bool) {
        if let Some(inner) = self {
            inner.cell_toggled(phase, index, on);
        }
    }
}

impl<A: GenerationObserver, B: GenerationObserver> GenerationObserver for (A, B) {
    fn phase_started(&mut self, phase: Phase, total_steps: usize) {
        self.0.phase_started(phase, total_steps);
        self.1.phase_started(phase, total_steps);
    }

    fn step_completed(&mut self, phase: Phase, completed: usize) {
        self.0.step_completed(phase, completed);
        self.1.step_completed(phase, completed);
    }

    fn phase_finished(&mut self, phase: Phase) {
        self.0.phase_finished(phase);
        self.1.phase_finished(phase);
    }

    fn pattern_seeded(&mut self, pattern: &OccupancyGrid) {
        self.0.pattern_seeded(pattern);
        self.1.pattern_seeded(pattern);
    }

    fn cell_toggled(&mut self, phase: Phase, index: usize, on: bool) {
        self.0.cell_toggled(phase, index, on);
        self.1.cell_toggled(phase, index, on);
    }
}

/// Everything a generation run produces
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Pattern straight out of seeding
    pub initial_pattern: OccupancyGrid,
    /// Balanced prototype binary pattern
    pub prototype: OccupancyGrid,
    /// Swaps the balancer needed
    pub balance_swaps: usize,
    /// Rank of every cell
    pub ranks: RankGrid,
    /// Final blue-noise texture
    pub intensity: Array2<u8>,
}

/// Void-and-cluster blue-noise generator
///
/// Runs seeding, balancing and ranking in sequence. Each run owns its
/// grids; the generator itself holds only the configuration and the kernel.
#[derive(Debug, Clone)]
pub struct VoidAndCluster {
    config: GeneratorConfig,
    kernel: GaussianKernel,
}

impl VoidAndCluster {
    /// Create a generator from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let kernel = GaussianKernel::new(config.size, config.sigma, config.cutoff_radius())?;
        Ok(Self { config, kernel })
    }

    /// Access the configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Access the energy kernel
    pub const fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Run the full pipeline without progress reporting
    ///
    /// # Errors
    ///
    /// See [`VoidAndCluster::generate_observed`]
    pub fn generate(&self) -> Result<GenerationResult> {
        self.generate_observed(&mut SilentObserver)
    }

    /// Run the full pipeline, reporting progress to `observer`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Balancing exceeds its iteration cap
    /// - A cluster or void query runs on an empty pattern
    pub fn generate_observed(
        &self,
        observer: &mut dyn GenerationObserver,
    ) -> Result<GenerationResult> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let target_count = self.config.target_count();

        observer.phase_started(Phase::Seeding, target_count);
        let initial_pattern = initial_pattern(
            self.config.seeding,
            &self.kernel,
            target_count,
            self.config.candidate_multiplier,
            &mut rng,
        );
        observer.phase_finished(Phase::Seeding);
        let initial_pattern = initial_pattern?;
        observer.pattern_seeded(&initial_pattern);

        let balanced = balance_pattern(
            initial_pattern.clone(),
            &self.kernel,
            self.config.max_balance_iterations(),
            observer,
        )?;

        let ranks = rank_pattern(&balanced.pattern, &self.kernel, observer)?;
        let intensity = ranks.to_intensity();

        Ok(GenerationResult {
            initial_pattern,
            prototype: balanced.pattern,
            balance_swaps: balanced.swaps,
            ranks,
            intensity,
        })
    }
}
