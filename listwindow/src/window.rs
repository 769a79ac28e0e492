use crate::{Window, WindowOptions};

impl Window {
    /// Projects the window for a scroll position.
    ///
    /// This is a pure O(1) projection: no dependency on any previous window, so rapid scroll
    /// events can never accumulate drift. The caller is responsible for storing `scroll_offset`
    /// and re-invoking this on every change.
    ///
    /// `scroll_offset` is not assumed to be clamped; offsets past the real extent still yield
    /// valid (empty-at-the-end) slice bounds. A container larger than the total extent clamps
    /// `end` to `count` without inventing padding items.
    pub fn compute(options: &WindowOptions, scroll_offset: u64) -> Window {
        let count = options.count;
        let extent = options.item_extent as u64;
        if count == 0 || extent == 0 {
            return Window::default();
        }

        let visible_count = (options.container_extent as u64).div_ceil(extent) as usize;
        let raw_start = (scroll_offset / extent).min(count as u64) as usize;

        let end = raw_start
            .saturating_add(visible_count)
            .saturating_add(options.overscan)
            .min(count);
        let start = raw_start.saturating_sub(options.overscan).min(end);

        Window {
            start,
            end,
            total_extent: options.total_extent(),
            lead_offset: (start as u64).saturating_mul(extent),
        }
    }
}
