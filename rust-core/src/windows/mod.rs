//! Analysis window functions
//!
//! Ten classical window shapes used to pre-condition a frame before the FFT

pub mod kind;
pub mod shapes;
pub mod function;

pub use kind::{WindowKind, WindowError};
pub use shapes::WindowShape;
pub use function::{WindowFunction, apply_window};
