//! Synthetic input images
//!
//! Digits are drawn as seven-segment glyphs with a square brush so tests can
//! build canvas captures (light background, black ink, rounded-corner
//! artifacts) and photo-like captures (paper-tone background, dark ink)
//! without shipping image files.

use crate::TestResult;
use digitscan_core::{Box, Pix, PixMut, PixelDepth, color};

/// Background of a drawing-surface capture
pub const CANVAS_BG: (u8, u8, u8) = (240, 240, 240);
/// Background of a photographed sheet of paper
pub const PAPER_BG: (u8, u8, u8) = (190, 180, 170);
/// Ink color used for both capture kinds
pub const INK: (u8, u8, u8) = (20, 20, 25);

// Segment endpoints in unit coordinates, order a..g:
//  aaa
// f   b
//  ggg
// e   c
//  ddd
const SEGMENTS: [((f32, f32), (f32, f32)); 7] = [
    ((0.0, 0.0), (1.0, 0.0)),
    ((1.0, 0.0), (1.0, 0.5)),
    ((1.0, 0.5), (1.0, 1.0)),
    ((0.0, 1.0), (1.0, 1.0)),
    ((0.0, 0.5), (0.0, 1.0)),
    ((0.0, 0.0), (0.0, 0.5)),
    ((0.0, 0.5), (1.0, 0.5)),
];

// Lit segments per digit, bit 0 = a ... bit 6 = g
const DIGIT_SEGMENTS: [u8; 10] = [
    0b011_1111, 0b000_0110, 0b101_1011, 0b100_1111, 0b110_0110, 0b110_1101, 0b111_1101,
    0b000_0111, 0b111_1111, 0b110_1111,
];

/// Create a 32 bpp image filled with one color.
pub fn solid_rgb(width: u32, height: u32, rgb: (u8, u8, u8)) -> TestResult<PixMut> {
    let mut pm = Pix::new(width, height, PixelDepth::Bit32)?.to_mut();
    let px = color::compose_rgb(rgb.0, rgb.1, rgb.2);
    for word in pm.data_mut() {
        *word = px;
    }
    Ok(pm)
}

/// Fill the part of `b` that lies inside the image with `value`.
///
/// `value` is a raw pixel: a gray level for 8 bpp, a composed RGB word for
/// 32 bpp.
pub fn fill_box(pm: &mut PixMut, b: &Box, value: u32) {
    let x0 = b.x.max(0);
    let y0 = b.y.max(0);
    let x1 = b.right().min(pm.width() as i32);
    let y1 = b.bottom().min(pm.height() as i32);
    for y in y0..y1 {
        for x in x0..x1 {
            pm.set_pixel_unchecked(x as u32, y as u32, value);
        }
    }
}

/// Draw a straight stroke with a square brush of side `thickness`.
pub fn draw_stroke(
    pm: &mut PixMut,
    from: (i32, i32),
    to: (i32, i32),
    thickness: i32,
    value: u32,
) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1);
    let half = thickness / 2;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = from.0 as f32 + t * (to.0 - from.0) as f32;
        let y = from.1 as f32 + t * (to.1 - from.1) as f32;
        let brush = Box::new_unchecked(
            x.round() as i32 - half,
            y.round() as i32 - half,
            thickness,
            thickness,
        );
        fill_box(pm, &brush, value);
    }
}

/// Draw `digit` (0-9) as a seven-segment glyph inside `frame`.
pub fn draw_digit(pm: &mut PixMut, digit: u8, frame: &Box, thickness: i32, value: u32) {
    let lit = DIGIT_SEGMENTS[(digit % 10) as usize];
    let map = |(u, v): (f32, f32)| {
        (
            frame.x + (u * (frame.w - 1) as f32).round() as i32,
            frame.y + (v * (frame.h - 1) as f32).round() as i32,
        )
    };
    for (i, &(a, b)) in SEGMENTS.iter().enumerate() {
        if lit & (1 << i) != 0 {
            draw_stroke(pm, map(a), map(b), thickness, value);
        }
    }
}

/// Paint everything outside a rounded rectangle of corner radius `radius`
/// with `rgb`, as a view capture with rounded corners does.
pub fn round_corners(pm: &mut PixMut, radius: u32, rgb: (u8, u8, u8)) {
    let w = pm.width();
    let h = pm.height();
    let r = radius as i64;
    let px = color::compose_rgb(rgb.0, rgb.1, rgb.2);
    for y in 0..h {
        for x in 0..w {
            let mx = x.min(w - 1 - x) as i64;
            let my = y.min(h - 1 - y) as i64;
            if mx < r && my < r && (mx - r).pow(2) + (my - r).pow(2) > r * r {
                pm.set_pixel_unchecked(x, y, px);
            }
        }
    }
}

/// Drawing-surface capture: black seven-segment `digit` on a light canvas
/// with rounded-corner artifacts.
pub fn canvas_digit(digit: u8, size: u32) -> TestResult<Pix> {
    let mut pm = solid_rgb(size, size, CANVAS_BG)?;
    let s = size as i32;
    let frame = Box::new_unchecked(s / 4, s / 6, s / 2, 2 * s / 3);
    let ink = color::compose_rgb(INK.0, INK.1, INK.2);
    draw_digit(&mut pm, digit, &frame, (s / 14).max(2), ink);
    round_corners(&mut pm, 10, (0, 0, 0));
    Ok(pm.into())
}

/// Photo-like capture: dark seven-segment `digit` on paper.
///
/// `glyph` is the digit's frame; the stroke is a fifth of the glyph width.
pub fn photo_digit(digit: u8, width: u32, height: u32, glyph: &Box) -> TestResult<Pix> {
    let mut pm = solid_rgb(width, height, PAPER_BG)?;
    let ink = color::compose_rgb(INK.0, INK.1, INK.2);
    draw_digit(&mut pm, digit, glyph, (glyph.w / 5).max(2), ink);
    Ok(pm.into())
}

/// Copy of `pix` with small square specks of `rgb` at each point.
pub fn with_specks(pix: &Pix, points: &[(i32, i32)], side: i32, rgb: (u8, u8, u8)) -> Pix {
    let mut pm = pix.to_mut();
    let value = match pix.depth() {
        PixelDepth::Bit8 => rgb.0 as u32,
        PixelDepth::Bit32 => color::compose_rgb(rgb.0, rgb.1, rgb.2),
    };
    for &(x, y) in points {
        fill_box(&mut pm, &Box::new_unchecked(x, y, side, side), value);
    }
    pm.into()
}

/// 8 bpp binary image with each box filled with 255.
pub fn binary_with_boxes(width: u32, height: u32, boxes: &[Box]) -> TestResult<Pix> {
    let mut pm = Pix::new(width, height, PixelDepth::Bit8)?.to_mut();
    for b in boxes {
        fill_box(&mut pm, b, 255);
    }
    Ok(pm.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_with_boxes() {
        let pix = binary_with_boxes(10, 10, &[Box::new_unchecked(1, 1, 2, 3)]).unwrap();
        assert_eq!(pix.count_nonzero(), 6);
        assert_eq!(pix.get_pixel(2, 3), Some(255));
    }

    #[test]
    fn test_draw_stroke_thickness() {
        let mut pm = Pix::new(20, 20, PixelDepth::Bit8).unwrap().to_mut();
        draw_stroke(&mut pm, (5, 10), (14, 10), 3, 255);
        let pix: Pix = pm.into();
        // brush centers run 5..=14, widened by one pixel on each side
        assert_eq!(pix.count_nonzero(), 3 * 12);
        assert_eq!(pix.foreground_bounds(), Some(Box::new_unchecked(4, 9, 12, 3)));
    }

    #[test]
    fn test_digit_one_is_right_edge() {
        let mut pm = Pix::new(20, 20, PixelDepth::Bit8).unwrap().to_mut();
        draw_digit(&mut pm, 1, &Box::new_unchecked(4, 2, 10, 15), 1, 255);
        let pix: Pix = pm.into();
        assert_eq!(pix.foreground_bounds(), Some(Box::new_unchecked(13, 2, 1, 15)));
    }

    #[test]
    fn test_canvas_digit_has_dark_corners() {
        let pix = canvas_digit(7, 60).unwrap();
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
        assert_eq!(pix.get_rgb(30, 58), Some(CANVAS_BG));
    }
}
