// Example: minimal windowing and scroll-to helper.
use listwindow::{Align, ListState, Window, WindowOptions};

fn main() {
    let opts = WindowOptions::new(1_000_000, 48, 800).with_overscan(5);

    let w = Window::compute(&opts, 123_456);
    println!("window={:?}", w);
    println!("render {} of {} items", w.len(), opts.count);

    let mut state = ListState::new(opts);
    state.scroll_to_index(999_999, Align::End);
    println!("after scroll_to_index: offset={}", state.scroll_offset());
    println!("window={:?}", state.window());
}
