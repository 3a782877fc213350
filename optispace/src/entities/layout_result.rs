use crate::entities::{PositionedRect, Rectangle};
use crate::fsize;
use crate::geometry::Rect;

/// Output of the layout engine: the placed rectangles, in placement order, together with
/// the container dimensions the engine tracked while placing them.
///
/// The container is the engine's running bound (including trailing margins),
/// which is not necessarily equal to the tight bounding box of the placed rectangles, see [`LayoutResult::bbox`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    pub positioned_rects: Vec<PositionedRect>,
    pub container_width: fsize,
    pub container_height: fsize,
}

impl LayoutResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positioned_rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positioned_rects.is_empty()
    }

    /// Sum of the areas of all placed rectangles
    pub fn total_area(&self) -> fsize {
        self.positioned_rects.iter().map(|pr| pr.area()).sum()
    }

    /// Tight bounding box around the placed rectangles, `None` if nothing is placed.
    pub fn bbox(&self) -> Option<Rect> {
        Rect::bounding(self.positioned_rects.iter().map(|pr| pr.bbox()))
    }

    /// The effective dimensions of the placed rectangles, in placement order.
    /// Positions are dropped, these are ready to be fed back into the layout engine.
    pub fn rectangles(&self) -> Vec<Rectangle> {
        self.positioned_rects.iter().map(|pr| pr.dims()).collect()
    }

    /// Area of the engine's container
    pub fn container_area(&self) -> fsize {
        self.container_width * self.container_height
    }

    /// Fraction of the container area covered by rectangles
    pub fn density(&self) -> fsize {
        let area = self.container_area();
        if area > 0.0 {
            self.total_area() / area
        } else {
            0.0
        }
    }
}
