pub mod chaos;
pub mod seed;

pub use chaos::*;
pub use seed::*;
