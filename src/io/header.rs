//! C header export of texture bytes, and the matching parser

use crate::io::configuration::{
    DEFAULT_HEADER_ARRAY, DEFAULT_HEADER_PREFIX, HEADER_BYTES_PER_LINE,
};
use crate::io::error::{
    NoiseError, Result, WithContext, computation_error, invalid_parameter,
};
use crate::io::image::{Texture, ensure_parent_dir};
use std::fmt;
use std::io::Write as _;
use std::path::Path;

/// Where line breaks go between byte literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineWrap {
    /// Break after every full line of entries, never after the last entry
    #[default]
    Even,
    /// Break after entry `i` whenever `i % 12 == 0`
    ///
    /// Reproduces headers written by earlier tools byte for byte: the first
    /// line holds a single entry and a lone break may follow the last one.
    Legacy,
}

impl LineWrap {
    const fn breaks_after(self, index: usize, total: usize) -> bool {
        match self {
            Self::Even => (index + 1) % HEADER_BYTES_PER_LINE == 0 && index + 1 < total,
            Self::Legacy => index % HEADER_BYTES_PER_LINE == 0,
        }
    }
}

/// Naming and layout of the exported header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Macro prefix, e.g. `BLUENOISE_TEX`
    pub prefix: String,
    /// Identifier of the byte array
    pub array_name: String,
    /// Line break placement
    pub wrap: LineWrap,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_HEADER_PREFIX.to_string(),
            array_name: DEFAULT_HEADER_ARRAY.to_string(),
            wrap: LineWrap::default(),
        }
    }
}

/// Render a texture as a C header with an include guard and size macros
///
/// `SIZE` is declared as `WIDTH * PITCH`, which only counts every byte for
/// square textures.
///
/// # Errors
///
/// Returns an error if:
/// - The texture is not square
/// - The texture has no pixels
pub fn render_header(texture: &Texture, options: &HeaderOptions) -> Result<String> {
    let (width, height) = (texture.width(), texture.height());
    if width != height {
        return Err(invalid_parameter(
            "texture",
            &format!("{width}x{height}"),
            &"header export needs a square texture",
        ));
    }
    if width == 0 {
        return Err(NoiseError::InvalidSourceData {
            reason: "cannot export an empty texture".to_string(),
        });
    }

    let total = width * height * texture.channels();
    let mut out = String::with_capacity(total * 6 + 512);
    write_header_text(&mut out, texture, options, total)
        .map_err(|e| computation_error("header rendering", &e))?;
    Ok(out)
}

fn write_header_text(
    out: &mut impl fmt::Write,
    texture: &Texture,
    options: &HeaderOptions,
    total: usize,
) -> fmt::Result {
    let prefix = &options.prefix;
    let channels = texture.channels();

    writeln!(out, "#ifndef {prefix}_H")?;
    writeln!(out, "#define {prefix}_H")?;
    writeln!(out, "#define {prefix}_WIDTH {}", texture.width())?;
    writeln!(out, "#define {prefix}_HEIGHT {}", texture.height())?;
    writeln!(out, "#define {prefix}_PITCH ({prefix}_WIDTH * {channels})")?;
    writeln!(out, "#define {prefix}_SIZE ({prefix}_WIDTH * {prefix}_PITCH)\n")?;
    writeln!(out, "// Stored in {} format", texture.format_name())?;
    writeln!(out, "static const unsigned char {}[] =", options.array_name)?;
    out.write_str("{\n")?;

    for (index, byte) in texture.bytes().enumerate() {
        write!(out, "0x{byte:02x}")?;
        if index + 1 < total {
            out.write_str(", ")?;
        }
        if options.wrap.breaks_after(index, total) {
            out.write_char('\n')?;
        }
    }

    out.write_str("\n};\n#endif\n")
}

/// Render and write a header file
///
/// # Errors
///
/// Returns an error if:
/// - The texture cannot be rendered (see [`render_header`])
/// - The file cannot be created or written
pub fn write_header(path: &Path, texture: &Texture, options: &HeaderOptions) -> Result<()> {
    let contents = render_header(texture, options)?;
    ensure_parent_dir(path)?;

    let mut file = std::fs::File::create(path)
        .with_path(path)
        .with_operation("create file")?;
    file.write_all(contents.as_bytes())
        .with_path(path)
        .with_operation("write header")
}

/// Read the byte array back out of a rendered header
///
/// # Errors
///
/// Returns an error if:
/// - No `{ ... }` array body is present
/// - An entry is not a hexadecimal byte literal
pub fn parse_header_bytes(header: &str) -> Result<Vec<u8>> {
    let body = header
        .find('{')
        .zip(header.rfind('}'))
        .and_then(|(open, close)| header.get(open + 1..close))
        .ok_or_else(|| NoiseError::InvalidSourceData {
            reason: "header has no array body".to_string(),
        })?;

    body.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .strip_prefix("0x")
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| NoiseError::InvalidSourceData {
                    reason: format!("'{entry}' is not a byte literal"),
                })
        })
        .collect()
}
