//! Gray morphology regression test
//!
//! Tests:
//!   (1) 2x2 brick dilation thickens a one-pixel stroke by one pixel down and right
//!   (2) Brick dilation matches dilation with an explicit brick element
//!
//! Run with:
//! ```
//! cargo test -p digitscan-morph --test graymorph_reg
//! ```

use digitscan_core::Box;
use digitscan_morph::{Sel, dilate_gray, dilate_gray_brick};
use digitscan_test::{RegParams, fixtures};

#[test]
fn graymorph_reg() {
    let mut rp = RegParams::new("graymorph");

    // one-pixel wide vertical stroke, 10 pixels tall
    let pixs = fixtures::binary_with_boxes(16, 16, &[Box::new_unchecked(5, 3, 1, 10)])
        .expect("fixture");
    rp.write_pix(&pixs).expect("write pixs");

    // --- Test 1 ---
    let thick = dilate_gray_brick(&pixs, 2, 2).expect("dilate_gray_brick");
    rp.write_pix(&thick).expect("write thick");
    let expected = fixtures::binary_with_boxes(16, 16, &[Box::new_unchecked(5, 3, 2, 11)])
        .expect("fixture");
    rp.compare_pix(&expected, &thick);
    rp.compare_values(22.0, thick.count_nonzero() as f64, 0.0);

    // --- Test 2 ---
    let sel = Sel::create_brick(2, 2).expect("sel");
    let same = dilate_gray(&pixs, &sel).expect("dilate_gray");
    rp.compare_pix(&thick, &same);

    assert!(rp.cleanup(), "graymorph regression test failed");
}
