//! Box - Rectangle regions
//!
//! Bounding boxes of ink and of connected components.

use crate::error::{Error, Result};

/// Rectangle region
///
/// `(x, y)` is the top-left corner; `w` and `h` are the extent in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Box {
    /// Create a new box.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `w` or `h` is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a new box without validation.
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create the box spanning the inclusive pixel range
    /// `(x0, y0)..=(x1, y1)`.
    pub fn from_inclusive(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x: x0.min(x1),
            y: y0.min(y1),
            w: (x1 - x0).abs() + 1,
            h: (y1 - y0).abs() + 1,
        }
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Box) -> Box {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Box {
            x,
            y,
            w: right - x,
            h: bottom - y,
        }
    }

    /// Grow the box so it also covers pixel `(x, y)`.
    pub fn include_point(&mut self, x: i32, y: i32) {
        *self = self.union(&Box::new_unchecked(x, y, 1, 1));
    }
}
