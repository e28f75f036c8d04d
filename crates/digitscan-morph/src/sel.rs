//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological operations.

use crate::{MorphError, MorphResult};

/// Rectangular structuring element
///
/// Every position is a hit. The origin (cx, cy) is the reference point
/// for the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
}

impl Sel {
    /// Create a rectangular "brick" structuring element with all hits
    ///
    /// The origin is at `(width / 2, height / 2)`, so a 2x2 brick has its
    /// origin at (1, 1) and reaches one pixel up and to the left.
    pub fn create_brick(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
        })
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| (x - cx, y - cy)))
    }
}
