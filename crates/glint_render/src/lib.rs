//! wgpu-facing half of the adapter: GPU bootstrap, the quad pipeline, CPU
//! batching, texture upload, and the implementations of the core renderer
//! and texture-loader seams.

pub mod gpu_context;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod skin;
pub mod texture;
pub mod texture_store;
pub mod vertex;

pub use gpu_context::GpuContext;
pub use mesh::{DrawCall, QuadBatch};
pub use pipeline::QuadPipeline;
pub use renderer::BatchRenderer;
pub use skin::{load_skin_from_path, SkinRegistry};
pub use texture::GpuTexture;
pub use texture_store::TextureStore;
pub use vertex::GuiVertex;
