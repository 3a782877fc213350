use crate::fsize;
use serde::{Deserialize, Serialize};

/// External representation of a [`Rectangle`](crate::entities::Rectangle).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRectangle {
    pub width: fsize,
    pub height: fsize,
}

/// A set of rectangles to be arranged.
/// Duplicate dimensions are allowed, every entry is a separate rectangle.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    #[serde(default)]
    pub name: String,
    pub rectangles: Vec<ExtRectangle>,
}

/// External representation of a [`PositionedRect`](crate::entities::PositionedRect).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPositionedRect {
    pub x: fsize,
    pub y: fsize,
    pub width: fsize,
    pub height: fsize,
}

/// External representation of a [`LayoutResult`](crate::entities::LayoutResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayout {
    /// The placed rectangles, in placement order
    pub rectangles: Vec<ExtPositionedRect>,
    /// Width of the container as tracked by the layout engine
    pub container_width: fsize,
    /// Height of the container as tracked by the layout engine
    pub container_height: fsize,
}
