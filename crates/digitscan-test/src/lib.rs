//! digitscan-test - Regression test framework for digitscan
//!
//! Supports two modes, selected by `REGTEST_MODE`:
//!
//! - **Compare** (default): run the checks only
//! - **Display**: additionally write intermediate images to `tests/regout`
//!   for visual inspection
//!
//! The [`fixtures`] module draws synthetic digits on canvas-like and
//! photo-like backgrounds so tests need no data files.
//!
//! # Usage
//!
//! ```ignore
//! use digitscan_test::RegParams;
//!
//! let mut rp = RegParams::new("blob");
//! rp.compare_values(40.0, area as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // digitscan-test is at crates/digitscan-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
