//! Renderer and texture-loader seams.
//!
//! The window crate hands components a `&mut dyn GuiRenderer` each frame and
//! a `&mut dyn TextureLoader` during init; the render crate supplies the
//! wgpu-backed implementations. All drawing happens in normalized `[0, 1]²`
//! coordinates with a bottom-left origin.

/// Opaque texture identifier issued by a `TextureLoader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// A drawable reference to (part of) a loaded texture.
///
/// `uv` is `[u0, v0, u1, v1]` with a bottom-left origin. Whole-texture
/// handles carry `[0, 0, 1, 1]`; region handles returned by the
/// `*_region` loaders carry the sub-rectangle. Handles are plain values
/// and stay valid until the loader that issued them is cleaned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureHandle {
    pub id: TextureId,
    pub uv: [f32; 4],
}

impl TextureHandle {
    pub fn whole(id: TextureId) -> Self {
        Self {
            id,
            uv: [0.0, 0.0, 1.0, 1.0],
        }
    }
}

/// Drawing surface handed to `GuiComponent::render`.
pub trait GuiRenderer {
    /// Fill an axis-aligned rectangle with a solid RGBA color.
    fn fill_rect(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32, color: [f32; 4]);

    /// Draw a texture (or texture region) into a rectangle.
    fn draw_texture(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32, texture: TextureHandle);

    /// Draw a texture multiplied by a tint color.
    fn draw_texture_tinted(
        &mut self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        texture: TextureHandle,
        tint: [f32; 4],
    );
}

/// Texture loading surface.
///
/// Failures are logged (through the `log` facade; the embedding application
/// chooses the sink) and reported as `None` — there is no retry or partial
/// result. Pixel rectangles are *inclusive* on both ends, in top-left image
/// coordinates; the implementation performs the flip into the bottom-left
/// UV space.
pub trait TextureLoader {
    /// Decode an image file and upload it whole.
    fn load_file(&mut self, path: &str) -> Option<TextureHandle>;

    /// Decode an image file, upload it whole, and return a handle selecting
    /// the inclusive pixel rectangle `[min_x..=max_x, min_y..=max_y]`.
    fn load_file_region(
        &mut self,
        path: &str,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    ) -> Option<TextureHandle>;

    /// Upload caller-supplied RGBA8 pixels (`width * height * 4` bytes).
    fn load_rgba(&mut self, pixels: &[u8], width: u32, height: u32) -> Option<TextureHandle>;

    /// Upload the inclusive sub-rectangle of caller-supplied RGBA8 pixels
    /// as its own texture.
    fn load_rgba_region(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    ) -> Option<TextureHandle>;

    /// Pixel size of a previously loaded texture, `None` for ids this
    /// loader never issued (or has since cleaned).
    fn texture_size(&self, id: TextureId) -> Option<(u32, u32)>;

    /// Drop every texture this loader created. Handles issued earlier
    /// (except the built-in white texture) become dangling and draw nothing.
    fn clean(&mut self);
}
