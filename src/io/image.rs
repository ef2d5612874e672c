//! Texture decoding, grayscale PNG export and side-by-side composition

use crate::io::error::{NoiseError, Result, WithContext, computation_error, invalid_parameter};
use image::GrayImage;
use ndarray::{Array2, Array3, Axis, concatenate};
use std::path::Path;

/// Interleaved 8-bit texture, indexed `[row, col, channel]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    data: Array3<u8>,
}

impl Texture {
    /// Single-channel texture from an intensity grid
    pub fn from_intensity(intensity: &Array2<u8>) -> Self {
        Self {
            data: intensity.clone().insert_axis(Axis(2)),
        }
    }

    /// Texture from row-major interleaved bytes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `channels` is not between 1 and 4
    /// - `bytes` does not hold exactly `width * height * channels` values
    pub fn from_raw(width: usize, height: usize, channels: usize, bytes: Vec<u8>) -> Result<Self> {
        validate_channels(channels)?;
        let data = Array3::from_shape_vec((height, width, channels), bytes).map_err(|e| {
            NoiseError::InvalidSourceData {
                reason: format!("{width}x{height}x{channels} texture: {e}"),
            }
        })?;
        Ok(Self { data })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Interleaved channels per pixel
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Copy one channel out as a grid
    ///
    /// # Errors
    ///
    /// Returns an error if `channel` is not below the channel count
    pub fn channel(&self, channel: usize) -> Result<Array2<u8>> {
        if channel >= self.channels() {
            return Err(invalid_parameter(
                "channel",
                &channel,
                &format!("texture has {} channel(s)", self.channels()),
            ));
        }
        Ok(self.data.index_axis(Axis(2), channel).to_owned())
    }

    /// Bytes in row-major, channel-interleaved order
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().copied()
    }

    /// Short layout name used in exported headers
    pub fn format_name(&self) -> &'static str {
        match self.data.dim().2 {
            1 => "R8",
            2 => "RG8",
            3 => "RGB8",
            _ => "RGBA8",
        }
    }
}

fn validate_channels(channels: usize) -> Result<()> {
    if (1..=4).contains(&channels) {
        Ok(())
    } else {
        Err(invalid_parameter(
            "channels",
            &channels,
            &"must be between 1 and 4",
        ))
    }
}

/// Decode an image file into a texture
///
/// When `channels` matches the file's own channel count the pixels are kept
/// as stored, so gray plus alpha stays `(L, A)`. Any other count expands the
/// image to RGBA and keeps the first `channels` components (R, RG, RGB or
/// RGBA); a grayscale source repeats its value in R, G and B. `None` keeps
/// the file's own channel count.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read or decoded
/// - `channels` is not between 1 and 4
pub fn load_texture(path: &Path, channels: Option<usize>) -> Result<Texture> {
    let image = image::open(path).with_path(path)?;
    let native = usize::from(image.color().channel_count());
    let channels = channels.unwrap_or(native);
    validate_channels(channels)?;

    let (width, height) = (image.width() as usize, image.height() as usize);
    let bytes = match channels {
        _ if channels != native => image
            .to_rgba8()
            .pixels()
            .flat_map(|pixel| pixel.0.into_iter().take(channels))
            .collect(),
        1 => image.to_luma8().into_raw(),
        2 => image.to_luma_alpha8().into_raw(),
        3 => image.to_rgb8().into_raw(),
        _ => image.to_rgba8().into_raw(),
    };
    Texture::from_raw(width, height, channels, bytes)
}

/// Create the parent directory of `path` if it has one
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_path(parent)
            .with_operation("create directory"),
        _ => Ok(()),
    }
}

/// Write a grid as an 8-bit grayscale image, format chosen by extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_grayscale(path: &Path, grid: &Array2<u8>) -> Result<()> {
    ensure_parent_dir(path)?;

    let (rows, cols) = grid.dim();
    let image = GrayImage::from_raw(cols as u32, rows as u32, grid.iter().copied().collect())
        .ok_or_else(|| computation_error("grayscale export", &"pixel buffer size mismatch"))?;

    image.save(path).map_err(|source| NoiseError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}

/// Place `right` to the right of `left`
///
/// # Errors
///
/// Returns an error if the two grids have different heights
pub fn append_horizontal(left: &Array2<u8>, right: &Array2<u8>) -> Result<Array2<u8>> {
    if left.nrows() != right.nrows() {
        return Err(invalid_parameter(
            "right",
            &right.nrows(),
            &format!("height must match the left image ({})", left.nrows()),
        ));
    }
    concatenate(Axis(1), &[left.view(), right.view()])
        .map_err(|e| computation_error("horizontal append", &e))
}
