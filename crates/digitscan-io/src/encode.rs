//! PNG encoding

use crate::{IoError, IoResult};
use digitscan_core::{Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Encoder};
use std::io::Write;

/// Write an 8 bpp (grayscale) or 32 bpp (RGB/RGBA) image as PNG.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let color_type = match pix.depth() {
        PixelDepth::Bit8 => ColorType::Grayscale,
        PixelDepth::Bit32 if pix.spp() == 4 => ColorType::Rgba,
        PixelDepth::Bit32 => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::Rgb => 3,
        _ => 4,
    };
    let mut data = Vec::with_capacity((width * height) as usize * channels);
    for y in 0..height {
        for x in 0..width {
            let val = pix.get_pixel_unchecked(x, y);
            match color_type {
                ColorType::Grayscale => data.push(val as u8),
                ColorType::Rgb => {
                    let (r, g, b) = color::extract_rgb(val);
                    data.extend_from_slice(&[r, g, b]);
                }
                _ => {
                    let (r, g, b, a) = color::extract_rgba(val);
                    data.extend_from_slice(&[r, g, b, a]);
                }
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

/// Encode an image as PNG bytes in memory.
pub fn encode_png(pix: &Pix) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(pix, &mut buffer)?;
    Ok(buffer)
}
