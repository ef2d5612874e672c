//! Command-line interface: generate, analyze and export blue-noise textures

use crate::algorithm::executor::{GenerationResult, GeneratorConfig, VoidAndCluster};
use crate::algorithm::seeding::SeedingStrategy;
use crate::io::analysis::{AnalysisReport, export_noise_analysis, prefixed_path};
use crate::io::configuration::{
    BALANCE_GIF_SUFFIX, DEFAULT_CANDIDATE_MULTIPLIER, DEFAULT_GRID_SIZE, DEFAULT_HEADER_ARRAY,
    DEFAULT_HEADER_PREFIX, DEFAULT_OUTPUT_PREFIX, DEFAULT_SEED, DEFAULT_SIGMA, GIF_FRAME_DELAY_MS,
    HEADER_SUFFIX, PATTERN_SUFFIX, THRESHOLD_SAMPLES,
};
use crate::io::error::Result;
use crate::io::header::{HeaderOptions, LineWrap, write_header};
use crate::io::image::{Texture, load_texture, save_grayscale};
use crate::io::progress::PhaseProgress;
use crate::io::visualization::PatternCapture;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "bluenoise")]
#[command(
    author,
    version,
    about = "Generate and validate void-and-cluster blue-noise textures"
)]
/// Command-line arguments for the blue-noise tool
pub struct Cli {
    /// What to do
    #[command(subcommand)]
    pub mode: Mode,

    /// Suppress progress bars and summaries
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Operating mode
#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Generate a texture with void-and-cluster and write its analysis report
    Generate(GenerateArgs),
    /// Load an existing texture and write its analysis report
    Analyze(AnalyzeArgs),
    /// Load an existing texture and re-export it as a C header
    Export(ExportArgs),
}

/// Options for `generate`
#[derive(Args, Debug)]
// Output toggles are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct GenerateArgs {
    /// Side length of the square texture
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Initial pattern strategy
    #[arg(long, value_enum, default_value_t = SeedingStrategy::RandomSwap)]
    pub seeding: SeedingStrategy,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Standard deviation of the energy kernel, in cells
    #[arg(long, default_value_t = DEFAULT_SIGMA)]
    pub sigma: f64,

    /// Kernel cutoff radius in cells [default: 12 * sigma]
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Number of "on" cells in the prototype pattern [default: size² / 2]
    #[arg(long)]
    pub target_count: Option<usize>,

    /// Best-candidate samples per placed cell
    #[arg(short = 'k', long, default_value_t = DEFAULT_CANDIDATE_MULTIPLIER)]
    pub candidate_multiplier: usize,

    /// Balancing swap cap [default: 10 * size²]
    #[arg(long)]
    pub max_swaps: Option<usize>,

    /// Output path prefix
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PREFIX)]
    pub output: PathBuf,

    /// Number of evenly spaced threshold masks to analyze
    #[arg(short, long, default_value_t = THRESHOLD_SAMPLES)]
    pub thresholds: usize,

    /// Also write the texture as a C header (`<prefix>.h`)
    #[arg(long)]
    pub header: bool,

    /// Also write the prototype binary pattern (`<prefix>_pattern.png`)
    #[arg(long)]
    pub pattern: bool,

    /// Record balancing swaps as an animated GIF (`<prefix>_balance.gif`)
    #[arg(short, long)]
    pub visualize: bool,

    /// Header naming and layout
    #[command(flatten)]
    pub header_style: HeaderArgs,
}

impl GenerateArgs {
    /// Generator configuration described by these arguments
    pub const fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            size: self.size,
            target_count: self.target_count,
            sigma: self.sigma,
            cutoff_radius: self.cutoff,
            seeding: self.seeding,
            candidate_multiplier: self.candidate_multiplier,
            max_balance_iterations: self.max_swaps,
            seed: self.seed,
        }
    }
}

/// Options for `analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Texture to analyze
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Channel holding the noise
    #[arg(short, long, default_value_t = 0)]
    pub channel: usize,

    /// Output path prefix [default: <input without extension>_analysis]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of evenly spaced threshold masks to analyze
    #[arg(short, long, default_value_t = THRESHOLD_SAMPLES)]
    pub thresholds: usize,
}

/// Options for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Texture to export
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Channels to keep (1 = R, 2 = RG, 3 = RGB, 4 = RGBA) [default: as stored]
    #[arg(short, long)]
    pub channels: Option<usize>,

    /// Header path [default: <input>.h]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Header naming and layout
    #[command(flatten)]
    pub header_style: HeaderArgs,
}

/// Header naming and layout options shared by `generate` and `export`
#[derive(Args, Debug, Clone)]
pub struct HeaderArgs {
    /// Macro prefix of the header
    #[arg(long, default_value = DEFAULT_HEADER_PREFIX)]
    pub header_prefix: String,

    /// Name of the byte array
    #[arg(long, default_value = DEFAULT_HEADER_ARRAY)]
    pub array_name: String,

    /// Break lines after entries 0, 12, 24, ... like older exports
    #[arg(long)]
    pub legacy_wrap: bool,
}

impl HeaderArgs {
    /// Header options described by these arguments
    pub fn options(&self) -> HeaderOptions {
        HeaderOptions {
            prefix: self.header_prefix.clone(),
            array_name: self.array_name.clone(),
            wrap: if self.legacy_wrap {
                LineWrap::Legacy
            } else {
                LineWrap::Even
            },
        }
    }
}

/// Runs the mode selected on the command line
pub struct Driver {
    cli: Cli,
}

impl Driver {
    /// Create a driver for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected mode
    ///
    /// # Errors
    ///
    /// Returns an error if generation, loading or any export fails
    pub fn run(&self) -> Result<()> {
        match &self.cli.mode {
            Mode::Generate(args) => self.generate(args),
            Mode::Analyze(args) => self.analyze(args),
            Mode::Export(args) => self.export(args),
        }
    }

    fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let generator = VoidAndCluster::new(args.config())?;
        let capture = args.visualize.then(PatternCapture::new);
        let mut observer = (PhaseProgress::new(!self.cli.quiet), capture);

        let result = generator.generate_observed(&mut observer)?;
        let (progress, capture) = observer;
        self.report_generation(&generator, &result, &progress);

        let report = export_noise_analysis(&result.intensity, &args.output, args.thresholds)?;
        self.report_analysis(&report);

        if args.header {
            let path = prefixed_path(&args.output, HEADER_SUFFIX);
            write_header(
                &path,
                &Texture::from_intensity(&result.intensity),
                &args.header_style.options(),
            )?;
            self.report_written(&path);
        }

        if args.pattern {
            let path = prefixed_path(&args.output, PATTERN_SUFFIX);
            save_grayscale(&path, &result.prototype.to_image())?;
            self.report_written(&path);
        }

        if let Some(capture) = capture {
            let path = prefixed_path(&args.output, BALANCE_GIF_SUFFIX);
            capture.export_gif(&path, GIF_FRAME_DELAY_MS)?;
            self.report_written(&path);
        }

        Ok(())
    }

    fn analyze(&self, args: &AnalyzeArgs) -> Result<()> {
        let start = Instant::now();
        let noise = load_texture(&args.input, None)?.channel(args.channel)?;
        let prefix = args
            .output
            .clone()
            .unwrap_or_else(|| prefixed_path(&args.input.with_extension(""), "_analysis"));

        let report = export_noise_analysis(&noise, &prefix, args.thresholds)?;
        self.report_analysis(&report);
        self.report_elapsed("Analysis", start);
        Ok(())
    }

    fn export(&self, args: &ExportArgs) -> Result<()> {
        let start = Instant::now();
        let texture = load_texture(&args.input, args.channels)?;
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| args.input.with_extension("h"));

        write_header(&path, &texture, &args.header_style.options())?;
        self.report_written(&path);
        self.report_elapsed("Export", start);
        Ok(())
    }

    // Allow print for user-facing summaries
    #[allow(clippy::print_stderr)]
    fn report_generation(
        &self,
        generator: &VoidAndCluster,
        result: &GenerationResult,
        progress: &PhaseProgress,
    ) {
        if self.cli.quiet {
            return;
        }
        let config = generator.config();
        eprintln!(
            "Generated {size}x{size} texture ({seeding} seeding, seed {seed}): {on} cells in prototype, {swaps} balancing swaps",
            size = config.size,
            seeding = config.seeding,
            seed = config.seed,
            on = result.prototype.on_count(),
            swaps = result.balance_swaps,
        );
        for (phase, elapsed) in progress.timings() {
            eprintln!("  {phase:<16} {:>10.3} ms", elapsed.as_secs_f64() * 1000.0);
        }
        eprintln!(
            "  {:<16} {:>10.3} ms",
            "Total",
            progress.total().as_secs_f64() * 1000.0
        );
    }

    #[allow(clippy::print_stderr)]
    fn report_analysis(&self, report: &AnalysisReport) {
        if self.cli.quiet {
            return;
        }
        eprintln!(
            "Low-frequency power ratio: {}",
            format_ratio(report.low_frequency_ratio)
        );
        for mask in &report.masks {
            eprintln!(
                "  cut {:>3}: {:>8} on, ratio {}",
                mask.cut,
                mask.on_count,
                format_ratio(mask.low_frequency_ratio)
            );
        }
        for path in &report.written {
            self.report_written(path);
        }
    }

    #[allow(clippy::print_stderr)]
    fn report_written(&self, path: &Path) {
        if !self.cli.quiet {
            eprintln!("Wrote {}", path.display());
        }
    }

    #[allow(clippy::print_stderr)]
    fn report_elapsed(&self, what: &str, start: Instant) {
        if !self.cli.quiet {
            eprintln!(
                "{what} took {:.3} ms",
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
    }
}

fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |value| format!("{value:.4}"))
}
