//! Per-component statistics of labeled images

use crate::conncomp::{ConnectivityType, label_connected_components};
use crate::error::{RegionError, RegionResult};
use digitscan_core::{Box, Pix, PixelDepth};

/// Statistics for a single component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStats {
    /// Component label
    pub label: u32,
    /// Number of pixels
    pub pixel_count: u32,
    /// Bounding box
    pub bounds: Box,
    /// Centroid X coordinate
    pub centroid_x: f64,
    /// Centroid Y coordinate
    pub centroid_y: f64,
}

/// Get statistics for all components of a labeled image
///
/// `labeled` is a 32-bit image as produced by
/// [`label_connected_components`], with dense labels `1..=n`. The result is
/// indexed by `label - 1`.
pub fn get_component_stats(labeled: &Pix) -> RegionResult<Vec<ComponentStats>> {
    if labeled.depth() != PixelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit (labeled image)",
            actual: labeled.depth().bits(),
        });
    }

    struct Accum {
        count: u32,
        sum_x: u64,
        sum_y: u64,
        bounds: Box,
    }

    let mut accums: Vec<Accum> = Vec::new();
    for y in 0..labeled.height() {
        for x in 0..labeled.width() {
            let label = labeled.get_pixel_unchecked(x, y);
            if label == 0 {
                continue;
            }
            let i = (label - 1) as usize;
            if i >= accums.len() {
                if i != accums.len() {
                    return Err(RegionError::InvalidParameters(format!(
                        "labels are not dense: found {} after {}",
                        label,
                        accums.len()
                    )));
                }
                accums.push(Accum {
                    count: 0,
                    sum_x: 0,
                    sum_y: 0,
                    bounds: Box::new_unchecked(x as i32, y as i32, 1, 1),
                });
            }
            let acc = &mut accums[i];
            acc.count += 1;
            acc.sum_x += x as u64;
            acc.sum_y += y as u64;
            acc.bounds.include_point(x as i32, y as i32);
        }
    }

    Ok(accums
        .into_iter()
        .enumerate()
        .map(|(i, a)| ComponentStats {
            label: i as u32 + 1,
            pixel_count: a.count,
            bounds: a.bounds,
            centroid_x: a.sum_x as f64 / a.count as f64,
            centroid_y: a.sum_y as f64 / a.count as f64,
        })
        .collect())
}

/// Count the foreground connected components of a binary image
pub fn pix_count_components(pix: &Pix, connectivity: ConnectivityType) -> RegionResult<u32> {
    let labeled = label_connected_components(pix, connectivity)?;
    let mut max_label = 0u32;
    for y in 0..labeled.height() {
        for x in 0..labeled.width() {
            max_label = max_label.max(labeled.get_pixel_unchecked(x, y));
        }
    }
    Ok(max_label)
}

/// Tight bounding box of the foreground of a binary image
///
/// Returns `None` when there is no foreground.
pub fn foreground_bounds(pix: &Pix) -> RegionResult<Option<Box>> {
    crate::conncomp::check_binary_depth(pix)?;
    Ok(pix.foreground_bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_stats() {
        let mut pm = Pix::new(6, 4, PixelDepth::Bit8).unwrap().to_mut();
        for &(x, y) in &[(0, 0), (1, 0), (0, 1), (4, 2), (5, 3)] {
            pm.set_pixel(x, y, 255).unwrap();
        }
        let pix: Pix = pm.into();
        let labeled = label_connected_components(&pix, ConnectivityType::EightWay).unwrap();
        let stats = get_component_stats(&labeled).unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].pixel_count, 3);
        assert_eq!(stats[0].bounds, Box::new_unchecked(0, 0, 2, 2));
        assert!((stats[0].centroid_x - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats[1].label, 2);
        assert_eq!(stats[1].bounds, Box::new_unchecked(4, 2, 2, 2));
        assert!((stats[1].centroid_y - 2.5).abs() < 1e-12);

        assert_eq!(pix_count_components(&pix, ConnectivityType::EightWay).unwrap(), 2);
        assert_eq!(pix_count_components(&pix, ConnectivityType::FourWay).unwrap(), 3);
    }

    #[test]
    fn test_foreground_bounds_requires_gray() {
        let pix = Pix::new(3, 3, PixelDepth::Bit32).unwrap();
        assert!(foreground_bounds(&pix).is_err());
        let pix = Pix::new(3, 3, PixelDepth::Bit8).unwrap();
        assert_eq!(foreground_bounds(&pix).unwrap(), None);
    }
}
