pub mod extent;
pub mod range;

// Foundation crate: small, well-tested primitives only.
pub use extent::*;
pub use range::*;
