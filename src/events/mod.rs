pub mod pointer;
pub mod scroll;

pub use pointer::wire_parallax;
pub use scroll::{scroll_to_section, ScrollNavigator};
