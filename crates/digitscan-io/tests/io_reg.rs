//! Image I/O regression test
//!
//! Tests:
//!   (1) RGB captures survive a PNG round trip exactly
//!   (2) Grayscale tiles are read back as three equal channels
//!   (3) Unreadable input is reported, not panicked on
//!
//! Run with:
//! ```
//! cargo test -p digitscan-io --test io_reg
//! ```

use digitscan_core::{Box, PixelDepth};
use digitscan_io::{IoError, decode_image, encode_png, read_image, write_image_png};
use digitscan_test::{RegParams, fixtures};

#[test]
fn io_reg() {
    let mut rp = RegParams::new("io");

    // --- Test 1: RGB through a file ---
    let canvas = fixtures::canvas_digit(6, 48).expect("canvas");
    let path = std::env::temp_dir().join(format!("digitscan_io_reg_{}.png", std::process::id()));
    write_image_png(&canvas, &path).expect("write png");
    let back = read_image(&path).expect("read png");
    let _ = std::fs::remove_file(&path);
    rp.compare_values(32.0, back.depth().bits() as f64, 0.0);
    rp.compare_pix(&canvas, &back);

    // --- Test 2: gray tile in memory ---
    let tile = fixtures::binary_with_boxes(28, 28, &[Box::new_unchecked(9, 4, 10, 20)])
        .expect("tile");
    let bytes = encode_png(&tile).expect("encode");
    let back = decode_image(&bytes).expect("decode");
    assert_eq!(back.depth(), PixelDepth::Bit32);
    let mut mismatches = 0;
    for y in 0..28 {
        for x in 0..28 {
            let v = tile.get_pixel(x, y).unwrap_or(0) as u8;
            if back.get_rgb(x, y) != Some((v, v, v)) {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // --- Test 3: failures ---
    let truncated = &bytes[..bytes.len() / 2];
    assert!(matches!(decode_image(truncated), Err(IoError::DecodeError(_))));
    let missing = std::env::temp_dir().join("digitscan_io_reg_missing/none.png");
    assert!(matches!(read_image(&missing), Err(IoError::Io(_))));

    assert!(rp.cleanup(), "io regression test failed");
}
