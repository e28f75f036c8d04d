//! Placement of the glyph on the fixed tile

use crate::RecogResult;
use crate::options::TILE_SIZE;
use digitscan_core::{Pix, PixelDepth};

/// Offset of a `dim`-sized glyph centered in a `size`-sized tile
///
/// Never negative; oversized glyphs start at 0.
pub fn center_offset(dim: u32, size: u32) -> u32 {
    size.saturating_sub(dim) / 2
}

/// Paste a glyph into the middle of a zeroed 28x28 tile
///
/// Whatever extends past the right or bottom edge is clipped, so a glyph
/// larger than the tile keeps its top-left 28x28 part.
pub fn center_on_tile(pix: &Pix) -> RecogResult<Pix> {
    let x_off = center_offset(pix.width(), TILE_SIZE);
    let y_off = center_offset(pix.height(), TILE_SIZE);
    let mut tile = Pix::new(TILE_SIZE, TILE_SIZE, PixelDepth::Bit8)?.to_mut();
    tile.paste(pix, x_off as i32, y_off as i32)?;
    Ok(tile.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(center_offset(20, 28), 4);
        assert_eq!(center_offset(13, 28), 7);
        assert_eq!(center_offset(28, 28), 0);
        assert_eq!(center_offset(40, 28), 0);
    }

    #[test]
    fn test_small_glyph_fully_pasted() {
        let glyph = Pix::new(13, 24, PixelDepth::Bit8).unwrap().invert();
        let tile = center_on_tile(&glyph).unwrap();
        assert_eq!((tile.width(), tile.height()), (28, 28));
        assert_eq!(tile.count_nonzero(), 13 * 24);
        assert_eq!(tile.get_pixel(7, 2), Some(255));
        assert_eq!(tile.get_pixel(6, 2), Some(0));
        assert_eq!(tile.get_pixel(19, 25), Some(255));
        assert_eq!(tile.get_pixel(20, 25), Some(0));
    }

    #[test]
    fn test_wide_glyph_clipped() {
        let mut pm = Pix::new(35, 10, PixelDepth::Bit8).unwrap().to_mut();
        for y in 0..10 {
            pm.set_pixel(0, y, 100).unwrap();
            pm.set_pixel(34, y, 200).unwrap();
        }
        let tile = center_on_tile(&pm.into()).unwrap();
        assert_eq!(tile.get_pixel(0, 9), Some(100));
        // column 34 falls past the edge
        assert_eq!(tile.count_nonzero(), 10);
    }
}
