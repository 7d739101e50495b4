pub mod bits;
pub mod decode;
pub mod encode;
pub mod types;

pub use bits::*;
pub use decode::*;
pub use encode::*;
pub use types::*;
