// Example: drive a controller with a few scroll events and render the window.
use virtual_window::{Align, ScrollController, WindowOptions};

fn main() {
    let rows: Vec<String> = (0..100_000).map(|i| format!("row #{i}")).collect();

    let mut c = ScrollController::new(
        WindowOptions::new(rows.len(), 24.0)
            .with_viewport_height(480.0)
            .with_overscan(5),
    );
    println!("total_extent={}", c.total_extent());

    for (now_ms, offset) in [(0u64, 0.0), (16, 1_200.0), (32, 48_000.0)] {
        c.apply_scroll_event(offset, now_ms);
        let range = c.visible_range();
        println!("offset={offset} range={range:?}");
        c.for_each_item(|it| {
            if Some(it.index) == range.map(|r| r.first_visible) {
                println!("  first visible: {} at y={}", rows[it.index], it.start);
            }
        });
    }

    let off = c.scroll_to_index(rows.len() - 1, Align::End);
    println!("after scroll_to_index: offset={off} window_len={}", c.window().len());
}
