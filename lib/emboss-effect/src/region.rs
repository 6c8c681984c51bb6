/// Inclusive target rectangle for a region render
///
/// Coordinates are absolute image coordinates. `left`/`top` and
/// `right`/`bottom` all belong to the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Region {
    /// Region from inclusive edges
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        assert!(
            left <= right && top <= bottom,
            "degenerate region {left},{top} - {right},{bottom}"
        );

        Self { left, top, right, bottom }
    }

    /// Region covering a whole width x height buffer
    pub fn full(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "empty buffer has no full region");

        Self {
            left: 0,
            top: 0,
            right: width - 1,
            bottom: height - 1,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    /// Whether (x, y) lies inside the region
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }

    /// Whether the region lies entirely inside a width x height buffer
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right < width && self.bottom < height
    }
}
