pub mod buttons;
pub mod page;
pub mod pointer;

pub use buttons::{wire_confirm, wire_dodge};
pub use page::{
    wire_canvas_resize, wire_heading_sparkle, wire_page_lifecycle, wire_scroll_reveal, FadeReveal,
};
pub use pointer::{wire_pointer_handlers, PointerWiring};
