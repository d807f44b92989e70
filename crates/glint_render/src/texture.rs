//! GPU texture upload and the pixel-rectangle helpers behind the loader.
//!
//! Pixel rectangles follow the loader trait's contract: inclusive on both
//! ends, top-left image origin. UV rects leave here in the framework's
//! bottom-left space.

/// An uploaded RGBA8 texture with its view and sampler.
pub struct GpuTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub size: (u32, u32),
}

impl GpuTexture {
    /// Upload raw RGBA8 pixels (`width * height * 4` bytes).
    pub fn from_rgba8(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &[u8],
        width: u32,
        height: u32,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Clamp-to-edge, linear filtering. Region handles rely on clamping
        // so samples never wrap past the rect edges.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
            size: (width, height),
        }
    }

    /// Decode an encoded image (PNG) and upload it.
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
    ) -> Result<Self, String> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| format!("Failed to decode image '{label}': {e}"))?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba8(device, queue, &rgba, width, height, label))
    }
}

/// Copy the inclusive rectangle `[min_x..=max_x, min_y..=max_y]` out of an
/// RGBA8 pixel buffer into a tight buffer of its own. Callers validate
/// bounds first.
pub fn copy_region(
    pixels: &[u8],
    width: u32,
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
) -> Vec<u8> {
    let region_w = (max_x - min_x + 1) as usize;
    let mut out = Vec::with_capacity(region_w * (max_y - min_y + 1) as usize * 4);
    for y in min_y..=max_y {
        let row_start = (y as usize * width as usize + min_x as usize) * 4;
        out.extend_from_slice(&pixels[row_start..row_start + region_w * 4]);
    }
    out
}

/// UV rect (bottom-left space) selecting the inclusive pixel rectangle of a
/// `width` x `height` image. The vertical flip converts from the image's
/// top-left row order.
pub fn region_uv(width: u32, height: u32, min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> [f32; 4] {
    let w = width as f32;
    let h = height as f32;
    [
        min_x as f32 / w,
        1.0 - (max_y + 1) as f32 / h,
        (max_x + 1) as f32 / w,
        1.0 - min_y as f32 / h,
    ]
}

/// Expected byte length of a tightly packed RGBA8 buffer. Widened to u64
/// so absurd declared dimensions fail the length check instead of
/// overflowing it.
pub fn rgba_byte_len(width: u32, height: u32) -> u64 {
    width as u64 * height as u64 * 4
}

/// Whether the inclusive rectangle lies inside a `width` x `height` image.
pub fn region_in_bounds(width: u32, height: u32, min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> bool {
    min_x <= max_x && min_y <= max_y && max_x < width && max_y < height
}
