use crate::entities::{DimKey, Rectangle};
use crate::fsize;
use crate::geometry::Rect;

/// A rectangle placed by the layout engine.
/// `width` and `height` are the effective dimensions, possibly swapped with respect to the input [`Rectangle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedRect {
    pub x: fsize,
    pub y: fsize,
    pub width: fsize,
    pub height: fsize,
}

impl PositionedRect {
    pub fn x_max(&self) -> fsize {
        self.x + self.width
    }

    pub fn y_max(&self) -> fsize {
        self.y + self.height
    }

    pub fn area(&self) -> fsize {
        self.width * self.height
    }

    /// The effective dimensions, stripped of their position
    pub fn dims(&self) -> Rectangle {
        Rectangle::new(self.width, self.height)
    }

    pub fn dim_key(&self) -> DimKey {
        DimKey::new(self.width, self.height)
    }

    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x_max(),
            y_max: self.y_max(),
        }
    }
}
