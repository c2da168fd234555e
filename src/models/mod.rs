pub mod instruct;
pub mod result;

pub use instruct::*;
pub use result::*;
