use crate::{Align, Window, WindowOptions};

/// A small stateful wrapper for callers that want the engine to also own the scroll offset.
///
/// [`Window::compute`] stays the source of truth; this type just pairs it with a stored
/// `scroll_offset`, clamped setters, and scroll-to-index math. Adapters that keep the offset in
/// their own UI state can ignore it entirely.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    options: WindowOptions,
    scroll_offset: u64,
}

impl ListState {
    pub fn new(options: WindowOptions) -> Self {
        wdebug!(
            count = options.count,
            item_extent = options.item_extent,
            container_extent = options.container_extent,
            overscan = options.overscan,
            "ListState::new"
        );
        Self {
            options,
            scroll_offset: 0,
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn set_count(&mut self, count: usize) {
        self.options.count = count;
    }

    pub fn set_item_extent(&mut self, item_extent: u32) {
        self.options.item_extent = item_extent;
    }

    pub fn set_container_extent(&mut self, container_extent: u32) {
        self.options.container_extent = container_extent;
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        wtrace!(offset, "set_scroll_offset");
        self.scroll_offset = offset;
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        self.scroll_offset = self.clamp_scroll_offset(offset);
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.options
            .total_extent()
            .saturating_sub(self.options.container_extent as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    /// Projects the window at the stored scroll offset.
    pub fn window(&self) -> Window {
        Window::compute(&self.options, self.scroll_offset)
    }

    /// Projects the window for an explicit scroll offset, leaving stored state untouched.
    pub fn window_for(&self, scroll_offset: u64) -> Window {
        Window::compute(&self.options, scroll_offset)
    }

    pub fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count)
            .then(|| (index as u64).saturating_mul(self.options.item_extent as u64))
    }

    pub fn item_end(&self, index: usize) -> Option<u64> {
        let start = self.item_start(index)?;
        Some(start.saturating_add(self.options.item_extent as u64))
    }

    /// Computes the (clamped) scroll offset that brings `index` into view.
    ///
    /// `Align::Auto` keeps the current offset when the item is already fully visible, otherwise
    /// aligns to the nearer edge.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let extent = self.options.item_extent as u64;
        let view = self.options.container_extent as u64;
        let start = (index as u64).saturating_mul(extent);
        let end = start.saturating_add(extent);

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => {
                let center = start.saturating_add(extent / 2);
                center.saturating_sub(view / 2)
            }
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    /// Scrolls to an index and returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_index_offset(index, align);
        wtrace!(index, offset, "scroll_to_index");
        self.scroll_offset = offset;
        offset
    }
}
