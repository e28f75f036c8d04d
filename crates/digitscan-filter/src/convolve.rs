//! Convolution operations
//!
//! Pixels outside the image are taken from the mirror image about the edge
//! pixel, without repeating the edge itself (`dcb|abcd|cba`).

use crate::{FilterError, FilterResult, Kernel};
use digitscan_core::{Pix, PixelDepth};

/// Map a possibly out-of-range coordinate into `0..n` by mirroring about
/// the edge pixels.
#[inline]
pub(crate) fn reflect101(i: i32, n: u32) -> u32 {
    let n = n as i32;
    if n == 1 {
        return 0;
    }
    let period = 2 * (n - 1);
    let mut i = i.rem_euclid(period);
    if i >= n {
        i = period - i;
    }
    i as u32
}

pub(crate) fn check_grayscale(pix: &Pix) -> FilterResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(FilterError::UnsupportedDepth {
            expected: "8-bpp grayscale",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Convolve an 8-bit grayscale image with a kernel
///
/// Results are rounded and clamped to `[0, 255]`.
pub fn convolve_gray(pix: &Pix, kernel: &Kernel) -> FilterResult<Pix> {
    check_grayscale(pix)?;

    let w = pix.width();
    let h = pix.height();
    let kw = kernel.width();
    let kh = kernel.height();
    let kcx = kernel.center_x() as i32;
    let kcy = kernel.center_y() as i32;

    let mut out_mut = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;

            for ky in 0..kh {
                for kx in 0..kw {
                    let k = kernel.get(kx, ky).unwrap_or(0.0);
                    if k == 0.0 {
                        continue;
                    }
                    let sx = reflect101(x as i32 + kx as i32 - kcx, w);
                    let sy = reflect101(y as i32 + ky as i32 - kcy, h);
                    sum += pix.get_pixel_unchecked(sx, sy) as f32 * k;
                }
            }

            let result = sum.round().clamp(0.0, 255.0) as u32;
            out_mut.set_pixel_unchecked(x, y, result);
        }
    }

    Ok(out_mut.into())
}

/// Sharpen an 8-bit grayscale image with [`Kernel::sharpen`].
pub fn sharpen(pix: &Pix) -> FilterResult<Pix> {
    convolve_gray(pix, &Kernel::sharpen())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect101() {
        assert_eq!(reflect101(-1, 5), 1);
        assert_eq!(reflect101(-2, 5), 2);
        assert_eq!(reflect101(5, 5), 3);
        assert_eq!(reflect101(6, 5), 2);
        assert_eq!(reflect101(3, 5), 3);
        assert_eq!(reflect101(-3, 1), 0);
    }

    #[test]
    fn test_sharpen_uniform_unchanged() {
        let pix = Pix::from_gray_bytes(4, 4, &[90; 16]).unwrap();
        let out = sharpen(&pix).unwrap();
        assert_eq!(out.to_gray_bytes().unwrap(), vec![90; 16]);
    }

    #[test]
    fn test_sharpen_clamps() {
        // single bright pixel: 5*200 -> 255, neighbors 100 - 200 -> 0
        #[rustfmt::skip]
        let pix = Pix::from_gray_bytes(3, 3, &[
            100, 100, 100,
            100, 200, 100,
            100, 100, 100,
        ]).unwrap();
        let out = sharpen(&pix).unwrap();
        assert_eq!(out.get_pixel(1, 1), Some(255));
        assert_eq!(out.get_pixel(1, 0), Some(0));
        // the corner only sees mirrored copies of 100-valued neighbors
        assert_eq!(out.get_pixel(0, 0), Some(100));
    }

    #[test]
    fn test_convolve_rejects_rgb() {
        let pix = Pix::new(3, 3, PixelDepth::Bit32).unwrap();
        assert!(convolve_gray(&pix, &Kernel::sharpen()).is_err());
    }
}
