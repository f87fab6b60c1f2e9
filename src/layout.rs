use std::ops::Range;

/// Widths for `slide_count` slides sharing a container evenly, so that
/// `items_per_slide` of them fill it exactly.
///
/// A zero `items_per_slide` is treated as one; a non-finite or negative
/// container width yields zero-width slides.
pub fn uniform_widths(container_width: f64, slide_count: usize, items_per_slide: usize) -> Vec<f64> {
    let per = items_per_slide.max(1) as f64;
    let width = if container_width.is_finite() {
        (container_width / per).max(0.0)
    } else {
        0.0
    };
    vec![width; slide_count]
}

/// Translation of a track anchored at `anchor`: `-sum(widths[0..anchor])`.
///
/// Anchors beyond the end are treated as the end.
pub fn track_offset(widths: &[f64], anchor: usize) -> f64 {
    0.0 - widths.iter().take(anchor).sum::<f64>()
}

/// Slides visible in a window of `items_per_slide` starting at `anchor`,
/// truncated to `count`.
pub fn visible_range(anchor: usize, items_per_slide: usize, count: usize) -> Range<usize> {
    let start = anchor.min(count);
    let end = anchor.saturating_add(items_per_slide).min(count);
    start..end
}
