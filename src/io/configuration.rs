//! Algorithm constants and runtime configuration defaults

// Energy kernel
/// Standard deviation of the Gaussian energy kernel, in cells
pub const DEFAULT_SIGMA: f64 = 1.5;
/// Kernel cutoff expressed in multiples of sigma
///
/// Sparse patterns at the ends of the ranking have neighbors a dozen or more
/// cells apart. Twelve sigma keeps them within reach while a tap's weight
/// (`exp(-72)`) still sits above the fixed-point resolution.
pub const DEFAULT_CUTOFF_SIGMAS: f64 = 12.0;

// Pattern construction
/// Best-candidate seeding samples `placed * multiplier + 1` candidates per step
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 1;
/// Balancing gives up after this many swaps per grid cell
pub const BALANCE_ITERATION_FACTOR: usize = 10;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid side length
pub const MAX_GRID_SIZE: usize = 4096;

// Default values for configurable parameters
/// Default grid side length
pub const DEFAULT_GRID_SIZE: usize = 256;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Number of evenly spaced thresholds tested per texture
pub const THRESHOLD_SAMPLES: usize = 11;

// Output settings
/// Default output path prefix
pub const DEFAULT_OUTPUT_PREFIX: &str = "out/blueVC";
/// Suffix for the histogram table
pub const HISTOGRAM_SUFFIX: &str = ".histogram.csv";
/// Suffix for the exported C header
pub const HEADER_SUFFIX: &str = ".h";
/// Suffix for the prototype binary pattern image
pub const PATTERN_SUFFIX: &str = "_pattern.png";
/// Suffix for the balancing animation
pub const BALANCE_GIF_SUFFIX: &str = "_balance.gif";
/// Number of intensity bins in the histogram
pub const HISTOGRAM_BINS: usize = 256;

// Header export
/// Byte literals per line in the exported header
pub const HEADER_BYTES_PER_LINE: usize = 12;
/// Default macro prefix for the exported header
pub const DEFAULT_HEADER_PREFIX: &str = "BLUENOISE_TEX";
/// Default array identifier for the exported header
pub const DEFAULT_HEADER_ARRAY: &str = "blueNoiseTexBytes";

// Visualization
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames written to a balancing animation
pub const MAX_GIF_FRAMES: usize = 400;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
