//! Framework-side vocabulary for the glint windowing adapter.
//!
//! This crate defines the abstract types the platform and render layers
//! translate *into*: key and mouse button codes, the component callback
//! surface, the listener hook surface, the renderer/texture-loader seams,
//! and input press/release bookkeeping. It knows nothing about winit or
//! wgpu; those live behind the seams.

pub mod component;
pub mod filter;
pub mod input;
pub mod keycode;
pub mod listener;
pub mod render;

pub use component::{FrameState, GuiComponent};
pub use input::InputState;
pub use keycode::{KeyCode, MouseButton};
pub use listener::WindowListener;
pub use render::{GuiRenderer, TextureHandle, TextureId, TextureLoader};
