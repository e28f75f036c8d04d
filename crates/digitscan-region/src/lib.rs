//! digitscan-region - Connected components of binary tiles
//!
//! - **Connected component analysis** - labeling, component lists and
//!   size filtering with 4- or 8-connectivity
//! - **Component statistics** - pixel counts, bounding boxes, centroids
//!
//! # Examples
//!
//! ```
//! use digitscan_region::{ConnectivityType, find_connected_components};
//! use digitscan_core::{Pix, PixelDepth};
//!
//! let mut pix_mut = Pix::new(100, 100, PixelDepth::Bit8).unwrap().to_mut();
//! pix_mut.set_pixel(10, 10, 255).unwrap();
//! pix_mut.set_pixel(11, 11, 255).unwrap();
//! pix_mut.set_pixel(50, 50, 255).unwrap();
//! let pix: Pix = pix_mut.into();
//!
//! let components = find_connected_components(&pix, ConnectivityType::EightWay).unwrap();
//! assert_eq!(components.len(), 2);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;

pub use conncomp::{
    ConnectedComponent, ConnectivityType, filter_components_by_size, find_connected_components,
    label_connected_components,
};
pub use error::{RegionError, RegionResult};
pub use label::{ComponentStats, foreground_bounds, get_component_stats, pix_count_components};
