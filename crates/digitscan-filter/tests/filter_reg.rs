//! Filter regression test
//!
//! Tests:
//!   (1) Bilateral smoothing leaves a two-tone photo capture untouched
//!   (2) Bilateral smoothing flattens low-contrast texture
//!   (3) Sharpening overshoots on both sides of a step edge
//!
//! Run with:
//! ```
//! cargo test -p digitscan-filter --test filter_reg
//! ```

use digitscan_core::{Box, Pix};
use digitscan_filter::{bilateral, sharpen};
use digitscan_test::{RegParams, fixtures};

#[test]
fn filter_reg() {
    let mut rp = RegParams::new("filter");

    // --- Test 1: edges between ink and paper survive ---
    let photo =
        fixtures::photo_digit(2, 80, 100, &Box::new_unchecked(20, 15, 40, 70)).expect("photo");
    let smoothed = bilateral(&photo, 9, 75.0, 75.0).expect("bilateral photo");
    rp.write_pix(&smoothed).expect("write smoothed");
    rp.compare_pix(&photo, &smoothed);

    // --- Test 2: a 100/104 checkerboard averages out ---
    // Every radius-4 disk holds 25 taps of the center's parity and 24 of the
    // other, so both phases land on 102.
    let checker: Vec<u8> = (0..24 * 24)
        .map(|i| if (i % 24 + i / 24) % 2 == 0 { 100 } else { 104 })
        .collect();
    let pix = Pix::from_gray_bytes(24, 24, &checker).expect("checker");
    let flat = bilateral(&pix, 9, 75.0, 75.0).expect("bilateral checker");
    let expected = Pix::from_gray_bytes(24, 24, &[102; 24 * 24]).expect("flat");
    rp.compare_pix(&expected, &flat);

    // --- Test 3: sharpening a vertical step ---
    let step: Vec<u8> = (0..10 * 6)
        .map(|i| if i % 10 < 5 { 50 } else { 150 })
        .collect();
    let pix = Pix::from_gray_bytes(10, 6, &step).expect("step");
    let sharp = sharpen(&pix).expect("sharpen");
    rp.write_pix(&sharp).expect("write sharpened");
    // the dark side dips to 0 and the bright side peaks at 250
    let row = [50u8, 50, 50, 50, 0, 250, 150, 150, 150, 150];
    let expected: Vec<u8> = row.iter().copied().cycle().take(10 * 6).collect();
    let expected = Pix::from_gray_bytes(10, 6, &expected).expect("expected");
    rp.compare_pix(&expected, &sharp);

    assert!(rp.cleanup(), "filter regression test failed");
}
