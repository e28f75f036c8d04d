//! Fixed-threshold binarization
//!
//! The output is an 8 bpp image whose pixels are all 0 (background) or 255
//! (ink). Which side of the threshold counts as ink is chosen by
//! [`Polarity`].

use crate::{ColorError, ColorResult};
use digitscan_core::{Pix, PixelDepth};
use serde::{Deserialize, Serialize};

/// Which gray levels become ink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// `v < threshold` becomes 255: dark ink on a light surface
    InkBelow,
    /// `v > threshold` becomes 255: bright ink on a dark surface
    InkAbove,
}

fn check_gray(pix: &Pix) -> ColorResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(ColorError::UnsupportedDepth {
            expected: "8 bpp",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Binarize a grayscale image with a fixed threshold.
///
/// Pixels equal to the threshold are background under either polarity.
///
/// Applying the same threshold with [`Polarity::InkAbove`] to an already
/// binary image returns it unchanged for any threshold in `0..255`.
pub fn threshold_to_binary(pix: &Pix, threshold: u8, polarity: Polarity) -> ColorResult<Pix> {
    check_gray(pix)?;

    let t = threshold as u32;
    let mut out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit8)?.to_mut();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let v = pix.get_pixel_unchecked(x, y);
            let ink = match polarity {
                Polarity::InkBelow => v < t,
                Polarity::InkAbove => v > t,
            };
            if ink {
                out.set_pixel_unchecked(x, y, 255);
            }
        }
    }
    Ok(out.into())
}

/// Make ink the bright side of a grayscale image.
///
/// If the mean gray level exceeds `brightness_limit` the image is taken to
/// be dark ink on a light surface and is inverted (`255 - v`). Returns the
/// possibly inverted image and whether inversion happened.
pub fn normalize_polarity(pix: &Pix, brightness_limit: f64) -> ColorResult<(Pix, bool)> {
    check_gray(pix)?;

    if pix.mean_value()? > brightness_limit {
        Ok((pix.invert(), true))
    } else {
        Ok((pix.clone(), false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_ink_below() {
        let pix = Pix::from_gray_bytes(4, 1, &[0, 199, 200, 255]).unwrap();
        let bin = threshold_to_binary(&pix, 200, Polarity::InkBelow).unwrap();
        assert_eq!(bin.to_gray_bytes().unwrap(), vec![255, 255, 0, 0]);
    }

    #[test]
    fn test_threshold_ink_above() {
        let pix = Pix::from_gray_bytes(4, 1, &[0, 127, 128, 255]).unwrap();
        let bin = threshold_to_binary(&pix, 127, Polarity::InkAbove).unwrap();
        assert_eq!(bin.to_gray_bytes().unwrap(), vec![0, 0, 255, 255]);
    }

    #[test]
    fn test_threshold_idempotent_on_binary() {
        let pix = Pix::from_gray_bytes(4, 1, &[0, 255, 255, 0]).unwrap();
        let once = threshold_to_binary(&pix, 127, Polarity::InkAbove).unwrap();
        let twice = threshold_to_binary(&once, 127, Polarity::InkAbove).unwrap();
        assert_eq!(once.to_gray_bytes().unwrap(), pix.to_gray_bytes().unwrap());
        assert_eq!(twice.to_gray_bytes().unwrap(), once.to_gray_bytes().unwrap());
    }

    #[test]
    fn test_threshold_rejects_rgb() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        assert!(threshold_to_binary(&pix, 127, Polarity::InkAbove).is_err());
    }

    #[test]
    fn test_normalize_polarity() {
        let light = Pix::from_gray_bytes(2, 1, &[200, 10]).unwrap();
        let (inv, flipped) = normalize_polarity(&light, 40.0).unwrap();
        assert!(flipped);
        assert_eq!(inv.to_gray_bytes().unwrap(), vec![55, 245]);

        let dark = Pix::from_gray_bytes(2, 1, &[40, 40]).unwrap();
        let (same, flipped) = normalize_polarity(&dark, 40.0).unwrap();
        assert!(!flipped);
        assert_eq!(same.to_gray_bytes().unwrap(), vec![40, 40]);
    }

    #[test]
    fn test_polarity_serde_names() {
        let json = serde_json::to_string(&Polarity::InkBelow).unwrap();
        assert_eq!(json, "\"ink_below\"");
    }
}
