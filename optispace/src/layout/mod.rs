mod shelf;

#[doc(inline)]
pub use shelf::MARGIN;
#[doc(inline)]
pub use shelf::arrange;
#[doc(inline)]
pub use shelf::arrange_with_rotations;
