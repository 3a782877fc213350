use crate::entities::{LayoutResult, PositionedRect, Rectangle};
use crate::fsize;
use crate::util::assertions;
use rand::Rng;

/// Gap enforced between adjacent rectangles, both horizontally and vertically.
pub const MARGIN: fsize = 5.0;

/// Arranges `rects` in the given order, rotating each one by 90 degrees with a probability of 50%.
/// See [`arrange_with_rotations`] for the placement rules.
pub fn arrange(rects: &[Rectangle], rng: &mut impl Rng) -> LayoutResult {
    let rotations: Vec<bool> = rects.iter().map(|_| rng.random_bool(0.5)).collect();
    arrange_with_rotations(rects, rotations)
}

/// Places `rects` left to right, in the given order, wrapping to a new row whenever the next rectangle
/// would reach beyond the widest row placed so far.
///
/// The `i`-th rotation decides whether the `i`-th rectangle is turned by 90 degrees.
/// If `rotations` runs out early, the remaining rectangles keep their orientation.
///
/// The row-break threshold is the container width achieved so far, not a fixed strip width.
/// Since the container starts out with zero width, the first rectangle always opens a row
/// (and thus ends up one margin below the origin).
pub fn arrange_with_rotations(
    rects: &[Rectangle],
    rotations: impl IntoIterator<Item = bool>,
) -> LayoutResult {
    let mut rotations = rotations.into_iter();
    let mut positioned_rects = Vec::with_capacity(rects.len());

    let mut container_width: fsize = 0.0;
    let mut container_height: fsize = 0.0;

    let mut current_x: fsize = 0.0;
    let mut current_y: fsize = 0.0;
    //height of the tallest rectangle in the current row
    let mut row_height: fsize = 0.0;

    for rect in rects {
        let Rectangle { width, height } = match rotations.next().unwrap_or(false) {
            true => rect.rotated(),
            false => *rect,
        };

        if current_x + width + MARGIN > container_width {
            //start a new row
            current_x = 0.0;
            current_y += row_height + MARGIN;
            row_height = 0.0;
        }

        positioned_rects.push(PositionedRect {
            x: current_x,
            y: current_y,
            width,
            height,
        });

        current_x += width + MARGIN;
        row_height = fsize::max(row_height, height);

        container_width = fsize::max(container_width, current_x);
        container_height = fsize::max(container_height, current_y + row_height + MARGIN);
    }

    let layout = LayoutResult {
        positioned_rects,
        container_width,
        container_height,
    };

    debug_assert!(assertions::layout_is_valid(&layout, MARGIN));

    layout
}
