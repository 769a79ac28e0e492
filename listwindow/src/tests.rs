use crate::*;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

// Scan-based reference: find the first item whose end lies past the offset by walking the
// items, count how many item extents it takes to cover the container, then expand by overscan
// and clamp.
fn expected_window(options: &WindowOptions, scroll_offset: u64) -> (usize, usize) {
    let count = options.count;
    let extent = options.item_extent as u64;
    if count == 0 || extent == 0 {
        return (0, 0);
    }

    let mut raw_start = count;
    for i in 0..count {
        if (i as u64 + 1) * extent > scroll_offset {
            raw_start = i;
            break;
        }
    }

    let mut visible = 0usize;
    let mut covered = 0u64;
    while covered < options.container_extent as u64 {
        visible += 1;
        covered += extent;
    }

    let end = (raw_start + visible + options.overscan).min(count);
    let start = raw_start.saturating_sub(options.overscan).min(end);
    (start, end)
}

#[test]
fn window_at_origin() {
    let opts = WindowOptions::new(100, 50, 500).with_overscan(2);
    let w = Window::compute(&opts, 0);
    assert_eq!(w.start, 0);
    // 10 visible + overscan(2) at end
    assert_eq!(w.end, 12);
    assert_eq!(w.total_extent, 5000);
    assert_eq!(w.lead_offset, 0);
}

#[test]
fn window_mid_scroll_expands_both_sides() {
    let opts = WindowOptions::new(100, 50, 500).with_overscan(2);
    let w = Window::compute(&opts, 2500);
    assert_eq!(w.start, 48);
    assert_eq!(w.end, 62);
    assert_eq!(w.lead_offset, 48 * 50);
}

#[test]
fn empty_list_yields_empty_window() {
    let opts = WindowOptions::new(0, 50, 500);
    let w = Window::compute(&opts, 0);
    assert_eq!(w.start, 0);
    assert_eq!(w.end, 0);
    assert_eq!(w.total_extent, 0);
    assert!(w.is_empty());
}

#[test]
fn container_larger_than_total_clamps_end() {
    let opts = WindowOptions::new(3, 10, 1000).with_overscan(5);
    let w = Window::compute(&opts, 0);
    assert_eq!(w.start, 0);
    assert_eq!(w.end, 3);
    assert_eq!(w.total_extent, 30);
}

#[test]
fn offset_past_extent_still_yields_valid_bounds() {
    let opts = WindowOptions::new(100, 50, 500).with_overscan(2);
    let w = Window::compute(&opts, u64::MAX);
    assert!(w.start <= w.end);
    assert!(w.end <= 100);
}

#[test]
fn fractional_viewport_rounds_visible_count_up() {
    // 501 / 50 -> 11 visible rows, not 10.
    let opts = WindowOptions::new(100, 50, 501).with_overscan(0);
    let w = Window::compute(&opts, 0);
    assert_eq!(w.end, 11);
}

#[test]
fn window_bounds_hold_for_random_inputs() {
    let mut rng = Lcg::new(0xC0FFEE);
    for _ in 0..2000 {
        let opts = WindowOptions {
            count: rng.gen_range_usize(0, 10_000),
            item_extent: rng.gen_range_u32(1, 500),
            container_extent: rng.gen_range_u32(1, 5_000),
            overscan: rng.gen_range_usize(0, 20),
        };
        let offset = rng.gen_range_u64(0, 10_000_000);

        let w = Window::compute(&opts, offset);
        assert!(w.start <= w.end, "start <= end violated: {w:?}");
        assert!(w.end <= opts.count, "end <= count violated: {w:?}");
        assert_eq!(w.total_extent, opts.count as u64 * opts.item_extent as u64);
        assert_eq!(w.lead_offset, w.start as u64 * opts.item_extent as u64);

        let (start, end) = expected_window(&opts, offset);
        assert_eq!((w.start, w.end), (start, end));
    }
}

#[test]
fn recompute_is_stateless_across_scroll_sequences() {
    // The same offset must produce the same window regardless of scroll history.
    let opts = WindowOptions::new(1000, 20, 400).with_overscan(3);
    let direct = Window::compute(&opts, 7777);

    let mut rng = Lcg::new(42);
    for _ in 0..100 {
        let w = Window::compute(&opts, rng.gen_range_u64(0, 20_000));
        assert!(w.end <= 1000);
    }
    assert_eq!(Window::compute(&opts, 7777), direct);
}

#[test]
fn list_state_clamps_scroll_offset() {
    let mut s = ListState::new(WindowOptions::new(100, 10, 100));
    assert_eq!(s.max_scroll_offset(), 900);
    s.set_scroll_offset_clamped(u64::MAX);
    assert_eq!(s.scroll_offset(), 900);
}

#[test]
fn scroll_to_index_aligns_and_clamps() {
    let mut s = ListState::new(WindowOptions::new(100, 10, 100));

    assert_eq!(s.scroll_to_index_offset(50, Align::Start), 500);
    // end(50)=510, view=100 => 410
    assert_eq!(s.scroll_to_index_offset(50, Align::End), 410);
    // center(50)=505, view/2=50 => 455
    assert_eq!(s.scroll_to_index_offset(50, Align::Center), 455);
    // past the end clamps to the last item
    assert_eq!(s.scroll_to_index_offset(10_000, Align::End), 900);

    let applied = s.scroll_to_index(50, Align::Start);
    assert_eq!(applied, 500);
    assert_eq!(s.scroll_offset(), 500);
}

#[test]
fn scroll_to_index_auto_keeps_visible_items_in_place() {
    let mut s = ListState::new(WindowOptions::new(100, 10, 100));
    s.set_scroll_offset(500);

    // Item 55 is fully visible at offset 500; Auto keeps the offset.
    assert_eq!(s.scroll_to_index_offset(55, Align::Auto), 500);
    // Item 10 is above the viewport; Auto aligns it to the start edge.
    assert_eq!(s.scroll_to_index_offset(10, Align::Auto), 100);
    // Item 80 is below; Auto aligns it to the end edge.
    assert_eq!(s.scroll_to_index_offset(80, Align::Auto), 710);
}

#[test]
fn scroll_to_index_start_lands_index_in_window() {
    let mut rng = Lcg::new(7);
    for _ in 0..500 {
        let count = rng.gen_range_usize(1, 2000);
        let mut s = ListState::new(
            WindowOptions::new(count, rng.gen_range_u32(1, 100), rng.gen_range_u32(1, 1000))
                .with_overscan(rng.gen_range_usize(0, 10)),
        );
        let index = rng.gen_range_usize(0, count);
        s.scroll_to_index(index, Align::Start);
        assert!(s.window().contains(index), "index {index} not in {:?}", s.window());
    }
}

#[test]
fn zero_item_extent_is_defensive_no_op() {
    let opts = WindowOptions::new(100, 0, 500);
    let w = Window::compute(&opts, 123);
    assert!(w.is_empty());
    assert_eq!(w.total_extent, 0);
}
