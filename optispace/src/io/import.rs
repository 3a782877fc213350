use crate::entities::Rectangle;
use crate::io::ext_repr::{ExtInstance, ExtRectangle};
use anyhow::{Context, Result, ensure};
use log::debug;

pub fn import_rectangle(ext_rect: &ExtRectangle) -> Result<Rectangle> {
    let ExtRectangle { width, height } = *ext_rect;
    ensure!(
        width.is_finite() && height.is_finite(),
        "rectangle dimensions must be finite, width: {width}, height: {height}"
    );
    ensure!(
        width > 0.0 && height > 0.0,
        "rectangle dimensions must be positive, width: {width}, height: {height}"
    );
    Ok(Rectangle::new(width, height))
}

/// Converts an external instance into the list of rectangles to arrange, preserving their order.
pub fn import_instance(ext_instance: &ExtInstance) -> Result<Vec<Rectangle>> {
    let rects = ext_instance
        .rectangles
        .iter()
        .enumerate()
        .map(|(i, ext_rect)| {
            import_rectangle(ext_rect).with_context(|| format!("invalid rectangle at index {i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "[IMPORT] instance {:?} contains {} rectangles",
        ext_instance.name,
        rects.len()
    );

    Ok(rects)
}
