use crate::entities::LayoutResult;
use crate::fsize;
use crate::util::FPA;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the layouts produced by the engine
//Used in debug_assert!() blocks

/// Consecutive rectangles sharing a row are separated by at least `margin`.
pub fn rows_do_not_overlap(layout: &LayoutResult, margin: fsize) -> bool {
    layout
        .positioned_rects
        .iter()
        .tuple_windows()
        .filter(|(a, b)| FPA(a.y) == FPA(b.y))
        .all(|(a, b)| {
            let separated = FPA(a.x_max() + margin) <= FPA(b.x);
            if !separated {
                error!("rectangles {a:?} and {b:?} share a row but are not separated by {margin}");
            }
            separated
        })
}

/// Once a row advances, no later rectangle is placed above it.
pub fn rows_are_monotone(layout: &LayoutResult) -> bool {
    layout
        .positioned_rects
        .iter()
        .tuple_windows()
        .all(|(a, b)| FPA(a.y) <= FPA(b.y))
}

/// The container tracked by the engine encloses every placed rectangle.
pub fn container_covers_rects(layout: &LayoutResult) -> bool {
    match layout.bbox() {
        None => layout.container_width >= 0.0 && layout.container_height >= 0.0,
        Some(bbox) => {
            bbox.x_min >= 0.0
                && bbox.y_min >= 0.0
                && FPA(bbox.x_max) <= FPA(layout.container_width)
                && FPA(bbox.y_max) <= FPA(layout.container_height)
        }
    }
}

/// All checks combined
pub fn layout_is_valid(layout: &LayoutResult, margin: fsize) -> bool {
    rows_do_not_overlap(layout, margin)
        && rows_are_monotone(layout)
        && container_covers_rects(layout)
}
