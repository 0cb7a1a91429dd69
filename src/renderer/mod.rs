//! Frame rendering
//!
//! Paints the world through the `Canvas` trait. The browser build draws into a
//! 2D canvas context; tests and the headless runner record a `DisplayList`.

pub mod canvas;
pub mod display_list;
pub mod palette;
pub mod scene;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use canvas::{Canvas, Color, TextAlign, css_color};
pub use display_list::{DisplayList, DrawCommand};
pub use scene::render;
#[cfg(target_arch = "wasm32")]
pub use web::WebCanvas;
