pub mod embed;
pub mod map;
pub mod view;
pub mod widget;

pub use embed::*;
pub use map::*;
pub use view::*;
pub use widget::*;
