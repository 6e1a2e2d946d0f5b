pub mod braille;
pub mod overlay;
pub mod render;

pub use overlay::{render_overlay, OverlayMessage, OverlayStyle};
pub use render::render;
