mod layout_result;
mod positioned_rect;
mod rectangle;

#[doc(inline)]
pub use layout_result::LayoutResult;
#[doc(inline)]
pub use positioned_rect::PositionedRect;
#[doc(inline)]
pub use rectangle::DimKey;
#[doc(inline)]
pub use rectangle::Rectangle;
