//! Balancing swap capture and GIF export

use crate::algorithm::executor::{GenerationObserver, Phase};
use crate::io::configuration::{MAX_GIF_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{NoiseError, Result, WithContext};
use crate::io::image::ensure_parent_dir;
use crate::spatial::OccupancyGrid;
use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use std::path::Path;

const ON_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const OFF_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const REMOVED_COLOR: Rgba<u8> = Rgba([220, 60, 60, 255]);
const ADDED_COLOR: Rgba<u8> = Rgba([60, 200, 90, 255]);

/// One cluster-to-void move recorded during balancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapEvent {
    /// Cell switched off
    pub removed: usize,
    /// Cell switched on
    pub added: usize,
}

/// Records the seeded pattern and every balancing swap
///
/// Attach as a [`GenerationObserver`]; the animation is rebuilt from the
/// seeded pattern by replaying the swaps in order.
#[derive(Debug, Clone, Default)]
pub struct PatternCapture {
    initial: Option<OccupancyGrid>,
    swaps: Vec<SwapEvent>,
    pending_removal: Option<usize>,
}

impl GenerationObserver for PatternCapture {
    fn pattern_seeded(&mut self, pattern: &OccupancyGrid) {
        self.initial = Some(pattern.clone());
        self.swaps.clear();
        self.pending_removal = None;
    }

    fn cell_toggled(&mut self, phase: Phase, index: usize, on: bool) {
        if phase != Phase::Balancing {
            return;
        }
        match (on, self.pending_removal.take()) {
            (false, _) => self.pending_removal = Some(index),
            (true, Some(removed)) => self.swaps.push(SwapEvent {
                removed,
                added: index,
            }),
            (true, None) => {}
        }
    }
}

impl PatternCapture {
    /// Empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded swaps in order
    pub fn swaps(&self) -> &[SwapEvent] {
        &self.swaps
    }

    /// Pattern the swaps start from
    pub const fn initial_pattern(&self) -> Option<&OccupancyGrid> {
        self.initial.as_ref()
    }

    /// Export the balancing run as an animated GIF
    ///
    /// Delays shorter than viewers honor are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS` and frames are skipped to keep the
    /// apparent speed; long runs are thinned further to at most
    /// `MAX_GIF_FRAMES` frames. The last frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No seeded pattern was captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, path: &Path, frame_delay_ms: u32) -> Result<()> {
        let initial = self
            .initial
            .as_ref()
            .ok_or_else(|| NoiseError::InvalidSourceData {
                reason: "No seeded pattern captured for visualization".to_string(),
            })?;

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let viewer_skip = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize;
        let length_skip = self.swaps.len().div_ceil(MAX_GIF_FRAMES);
        let skip_factor = viewer_skip.max(length_skip).max(1);

        let frames = self.generate_frames(initial, effective_delay_ms, skip_factor);

        ensure_parent_dir(path)?;
        let file = std::fs::File::create(path)
            .with_path(path)
            .with_operation("create file")?;

        let mut encoder = GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|source| NoiseError::ImageExport {
                path: path.to_path_buf(),
                source,
            })
    }

    fn generate_frames(
        &self,
        initial: &OccupancyGrid,
        delay_ms: u32,
        skip_factor: usize,
    ) -> Vec<Frame> {
        let mut grid = initial.clone();
        let mut frames = vec![render_frame(&grid, None, delay_ms)];

        for (count, swap) in self.swaps.iter().enumerate() {
            grid.set(swap.removed, false);
            grid.set(swap.added, true);

            let is_last = count + 1 == self.swaps.len();
            if (count + 1) % skip_factor == 0 || is_last {
                frames.push(render_frame(&grid, Some(*swap), delay_ms));
            }
        }

        // Final frame displays longer, without highlights
        frames.push(render_frame(&grid, None, delay_ms * 25));
        frames
    }

    /// Number of recorded swaps
    pub const fn swap_count(&self) -> usize {
        self.swaps.len()
    }
}

fn render_frame(grid: &OccupancyGrid, highlight: Option<SwapEvent>, delay_ms: u32) -> Frame {
    let size = grid.size() as u32;
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let index = grid.index(y as usize, x as usize);
        match highlight {
            Some(swap) if swap.removed == index => REMOVED_COLOR,
            Some(swap) if swap.added == index => ADDED_COLOR,
            _ if grid.is_on(index) => ON_COLOR,
            _ => OFF_COLOR,
        }
    });
    Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}
