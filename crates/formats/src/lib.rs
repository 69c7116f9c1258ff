pub mod district;
pub mod source;

pub use district::*;
pub use source::*;
