/// Configuration for the windowing projection.
///
/// All fields are plain data; cloning is trivially cheap, so adapters can tweak a field and
/// recompute without ceremony.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Number of items in the list.
    pub count: usize,
    /// Fixed extent of every item in the scroll axis (e.g. row height for vertical lists).
    pub item_extent: u32,
    /// Extent of the scroll container in the scroll axis.
    pub container_extent: u32,
    /// Extra items projected beyond the visible range on each side, to reduce blank flashes
    /// during fast scrolling.
    pub overscan: usize,
}

impl WindowOptions {
    /// Creates options with the default overscan (5).
    pub fn new(count: usize, item_extent: u32, container_extent: u32) -> Self {
        Self {
            count,
            item_extent,
            container_extent,
            overscan: 5,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_item_extent(mut self, item_extent: u32) -> Self {
        self.item_extent = item_extent;
        self
    }

    pub fn with_container_extent(mut self, container_extent: u32) -> Self {
        self.container_extent = container_extent;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Total scrollable extent (`count * item_extent`).
    pub fn total_extent(&self) -> u64 {
        (self.count as u64).saturating_mul(self.item_extent as u64)
    }
}
