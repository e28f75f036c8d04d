//! Convolution kernels

/// A 2D convolution kernel
///
/// Values are stored row-major; `(cx, cy)` is the origin that lands on the
/// destination pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<f32>,
}

impl Kernel {
    /// The 3x3 sharpening kernel
    ///
    /// ```text
    ///  0 -1  0
    /// -1  5 -1
    ///  0 -1  0
    /// ```
    pub fn sharpen() -> Self {
        Kernel {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }
}
