//! Connected component analysis
//!
//! Finds and labels connected regions of non-zero pixels in 8 bpp binary
//! tiles. Labeling is a two-pass raster scan with a union-find table for
//! label equivalences.

use crate::error::{RegionError, RegionResult};
use crate::label::get_component_stats;
use digitscan_core::{Box, Pix, PixelDepth};
use serde::{Deserialize, Serialize};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// A connected component in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label of this component (1-based; 0 is background)
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Box,
}

impl ConnectedComponent {
    pub fn new(label: u32, pixel_count: u32, bounds: Box) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }
}

/// Disjoint-set forest over provisional labels
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // slot 0 is background
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let id = self.parent.len() as u32;
        self.parent.push(id);
        id
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grand = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grand;
            x = grand;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[hi as usize] = lo;
        lo
    }
}

pub(crate) fn check_binary_depth(pix: &Pix) -> RegionResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(RegionError::UnsupportedDepth {
            expected: "8-bit binary",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Label all connected components in a binary image
///
/// Every non-zero pixel is foreground. Returns a 32-bit image where each
/// pixel holds its component label: 0 for background, then 1, 2, ... in
/// the raster order of each component's first pixel.
pub fn label_connected_components(pix: &Pix, connectivity: ConnectivityType) -> RegionResult<Pix> {
    check_binary_depth(pix)?;

    let w = pix.width();
    let h = pix.height();
    let mut provisional = vec![0u32; (w as usize) * (h as usize)];
    let mut uf = UnionFind::new();
    let idx = |x: u32, y: u32| (y as usize) * (w as usize) + (x as usize);

    for y in 0..h {
        for x in 0..w {
            if pix.get_pixel_unchecked(x, y) == 0 {
                continue;
            }

            let mut neighbors = [0u32; 4];
            let mut n = 0;
            if x > 0 {
                neighbors[n] = provisional[idx(x - 1, y)];
                n += 1;
            }
            if y > 0 {
                neighbors[n] = provisional[idx(x, y - 1)];
                n += 1;
                if connectivity == ConnectivityType::EightWay {
                    if x > 0 {
                        neighbors[n] = provisional[idx(x - 1, y - 1)];
                        n += 1;
                    }
                    if x + 1 < w {
                        neighbors[n] = provisional[idx(x + 1, y - 1)];
                        n += 1;
                    }
                }
            }

            let mut label = 0u32;
            for &nb in neighbors[..n].iter().filter(|&&l| l != 0) {
                label = if label == 0 { nb } else { uf.union(label, nb) };
            }
            if label == 0 {
                label = uf.make_set();
            }
            provisional[idx(x, y)] = label;
        }
    }

    // Resolve equivalences and renumber densely in raster order
    let mut final_label = vec![0u32; uf.parent.len()];
    let mut next = 1u32;
    let mut out = Pix::new(w, h, PixelDepth::Bit32)?.to_mut();
    for y in 0..h {
        for x in 0..w {
            let p = provisional[idx(x, y)];
            if p == 0 {
                continue;
            }
            let root = uf.find(p) as usize;
            if final_label[root] == 0 {
                final_label[root] = next;
                next += 1;
            }
            out.set_pixel_unchecked(x, y, final_label[root]);
        }
    }

    Ok(out.into())
}

/// Find all connected components in a binary image
///
/// Components are returned in label order with their pixel count and
/// bounding box.
pub fn find_connected_components(
    pix: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let labeled = label_connected_components(pix, connectivity)?;
    Ok(get_component_stats(&labeled)?
        .into_iter()
        .map(|s| ConnectedComponent::new(s.label, s.pixel_count, s.bounds))
        .collect())
}

/// Keep only components with at least `min_area` pixels
///
/// Returns an 8 bpp binary image of the same size where surviving
/// components are 255 and everything else is 0. An all-background result is
/// valid.
pub fn filter_components_by_size(
    pix: &Pix,
    min_area: u32,
    connectivity: ConnectivityType,
) -> RegionResult<Pix> {
    let labeled = label_connected_components(pix, connectivity)?;
    let stats = get_component_stats(&labeled)?;

    // stats are in label order, so label l is at index l - 1
    let keep: Vec<bool> = stats.iter().map(|s| s.pixel_count >= min_area).collect();

    let mut out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit8)?.to_mut();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let label = labeled.get_pixel_unchecked(x, y);
            if label != 0 && keep[(label - 1) as usize] {
                out.set_pixel_unchecked(x, y, 255);
            }
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_rows(rows: &[&str]) -> Pix {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        let bytes: Vec<u8> = rows
            .iter()
            .flat_map(|r| r.bytes().map(|c| if c == b'#' { 255 } else { 0 }))
            .collect();
        Pix::from_gray_bytes(w, h, &bytes).unwrap()
    }

    #[test]
    fn test_diagonal_connectivity() {
        let pix = from_rows(&["#..", ".#.", "..#"]);
        let eight = find_connected_components(&pix, ConnectivityType::EightWay).unwrap();
        let four = find_connected_components(&pix, ConnectivityType::FourWay).unwrap();
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].pixel_count, 3);
        assert_eq!(eight[0].bounds, Box::new_unchecked(0, 0, 3, 3));
        assert_eq!(four.len(), 3);
    }

    #[test]
    fn test_u_shape_merges_labels() {
        // the two arms get different provisional labels until the bottom row
        let pix = from_rows(&["#..#", "#..#", "####"]);
        let comps = find_connected_components(&pix, ConnectivityType::FourWay).unwrap();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].pixel_count, 8);
    }

    #[test]
    fn test_anti_diagonal_eight_way() {
        let pix = from_rows(&["..#", ".#.", "#.."]);
        let comps = find_connected_components(&pix, ConnectivityType::EightWay).unwrap();
        assert_eq!(comps.len(), 1);
    }

    #[test]
    fn test_labels_in_raster_order() {
        let pix = from_rows(&["#.#", "...", ".#."]);
        let labeled = label_connected_components(&pix, ConnectivityType::EightWay).unwrap();
        assert_eq!(labeled.get_pixel(0, 0), Some(1));
        assert_eq!(labeled.get_pixel(2, 0), Some(2));
        assert_eq!(labeled.get_pixel(1, 2), Some(3));
        assert_eq!(labeled.get_pixel(1, 1), Some(0));
    }

    #[test]
    fn test_filter_by_size() {
        let pix = from_rows(&["##...", "##..#", ".....", "###.."]);
        let out = filter_components_by_size(&pix, 3, ConnectivityType::EightWay).unwrap();
        assert_eq!(out.count_nonzero(), 7);
        assert_eq!(out.get_pixel(4, 1), Some(0));
        assert_eq!(out.get_pixel(0, 3), Some(255));
    }

    #[test]
    fn test_filter_everything_removed() {
        let pix = from_rows(&["#...", "...#"]);
        let out = filter_components_by_size(&pix, 2, ConnectivityType::EightWay).unwrap();
        assert_eq!(out.count_nonzero(), 0);
    }

    #[test]
    fn test_rejects_rgb() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        assert!(label_connected_components(&pix, ConnectivityType::EightWay).is_err());
    }
}
