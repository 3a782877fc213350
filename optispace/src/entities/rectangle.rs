use crate::fsize;
use ordered_float::OrderedFloat;

/// Dimensions of a rectangle to be arranged.
/// Carries no position, the [`layout`](crate::layout) engine decides where it ends up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub width: fsize,
    pub height: fsize,
}

impl Rectangle {
    pub fn new(width: fsize, height: fsize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> fsize {
        self.width * self.height
    }

    pub fn perimeter(&self) -> fsize {
        2.0 * (self.width + self.height)
    }

    /// Same rectangle, turned by 90 degrees.
    pub fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub fn dim_key(&self) -> DimKey {
        DimKey::new(self.width, self.height)
    }
}

/// Hashable `(width, height)` pair.
/// Two rectangles with equal keys are considered duplicates, regardless of where they are placed.
/// Orientation matters: `(2, 3)` and `(3, 2)` are different keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimKey(pub OrderedFloat<fsize>, pub OrderedFloat<fsize>);

impl DimKey {
    pub fn new(width: fsize, height: fsize) -> Self {
        DimKey(OrderedFloat(width), OrderedFloat(height))
    }
}
