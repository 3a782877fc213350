//! Core of `optispace`: the rectangle entities, the greedy shelf layout engine
//! and everything needed to move layouts in and out of the library.

/// Rectangles, positioned rectangles and layouts
pub mod entities;

/// Geometric primitives
pub mod geometry;

/// The shelf layout engine, turning an ordered list of rectangles into a [`LayoutResult`](entities::LayoutResult)
pub mod layout;

/// Importing problem instances into and exporting layouts out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// The floating point type used throughout the library for dimensions and areas
#[allow(non_camel_case_types)]
pub type fsize = f64;
