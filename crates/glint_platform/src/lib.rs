//! winit-facing half of the adapter: window creation and the static
//! key/mouse code conversion tables.

pub mod convert;
pub mod window;

pub use convert::{convert_key, convert_mouse_button};
pub use window::{create_window, WindowConfig};
