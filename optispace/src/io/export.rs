use crate::entities::{LayoutResult, PositionedRect};
use crate::io::ext_repr::{ExtLayout, ExtPositionedRect};

pub fn export_positioned_rect(pr: &PositionedRect) -> ExtPositionedRect {
    ExtPositionedRect {
        x: pr.x,
        y: pr.y,
        width: pr.width,
        height: pr.height,
    }
}

pub fn export_layout(layout: &LayoutResult) -> ExtLayout {
    ExtLayout {
        rectangles: layout
            .positioned_rects
            .iter()
            .map(export_positioned_rect)
            .collect(),
        container_width: layout.container_width,
        container_height: layout.container_height,
    }
}
