pub mod frame;
pub mod pixels;

pub use frame::*;
pub use pixels::*;
