pub mod pointer;
pub mod resize;
pub mod scroll;

pub use pointer::wire_pointermove;
pub use resize::{wire_resize, ResizeWiring};
pub use scroll::wire_scroll_visibility;
