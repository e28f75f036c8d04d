//! digitscan-io - Image I/O
//!
//! Any format the `image` crate can read (PNG, JPEG, BMP, GIF, WebP, TIFF)
//! is decoded into a 32 bpp RGB [`Pix`]; alpha is dropped and grayscale is
//! expanded to three equal channels. Output is PNG only, written with the
//! `png` crate.

mod error;
mod encode;

pub use error::{IoError, IoResult};
pub use encode::{encode_png, write_png};

use digitscan_core::Pix;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Decode an encoded image held in memory.
///
/// # Errors
///
/// Returns [`IoError::DecodeError`] if the bytes are not a readable image.
pub fn decode_image(bytes: &[u8]) -> IoResult<Pix> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    dynamic_to_pix(img)
}

/// Read and decode an image file.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Write an image to `path` as PNG.
pub fn write_image_png<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(pix, BufWriter::new(file))
}

fn dynamic_to_pix(img: image::DynamicImage) -> IoResult<Pix> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "decoded image is empty: {}x{}",
            width, height
        )));
    }
    Ok(Pix::from_rgb_bytes(width, height, rgb.as_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }

    #[test]
    fn test_decode_drops_alpha() {
        let rgba = image::RgbaImage::from_raw(2, 1, vec![10, 20, 30, 0, 40, 50, 60, 255]).unwrap();
        let mut bytes = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(rgba)
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();

        let pix = decode_image(bytes.get_ref()).unwrap();
        assert_eq!(pix.spp(), 3);
        assert_eq!(pix.get_rgb(0, 0), Some((10, 20, 30)));
        assert_eq!(pix.get_rgb(1, 0), Some((40, 50, 60)));
    }
}
