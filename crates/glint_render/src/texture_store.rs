//! The wgpu-backed implementation of the core `TextureLoader` seam.
//!
//! Every loaded texture gets a numeric id and a prebuilt bind group; the
//! renderer resolves draw-call ids back to bind groups at pass time. Id 0
//! is a built-in 1x1 white texture that solid fills sample; it survives
//! `clean()`.
//!
//! Failures follow the null-result contract: log through the `log` facade
//! (the embedding application picks the sink) and return `None`.

use std::collections::HashMap;

use glint_core::render::{TextureHandle, TextureId, TextureLoader};

use crate::pipeline::QuadPipeline;
use crate::texture::{copy_region, region_in_bounds, region_uv, rgba_byte_len, GpuTexture};

const WHITE_ID: u32 = 0;

struct StoredTexture {
    texture: GpuTexture,
    bind_group: wgpu::BindGroup,
}

pub struct TextureStore {
    device: wgpu::Device,
    queue: wgpu::Queue,
    texture_layout: wgpu::BindGroupLayout,
    textures: HashMap<u32, StoredTexture>,
    next_id: u32,
}

impl TextureStore {
    /// Handle of the built-in white texture.
    pub const WHITE: TextureHandle = TextureHandle {
        id: TextureId(WHITE_ID),
        uv: [0.0, 0.0, 1.0, 1.0],
    };

    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, pipeline: &QuadPipeline) -> Self {
        let mut store = Self {
            device: device.clone(),
            queue: queue.clone(),
            texture_layout: pipeline.texture_layout().clone(),
            textures: HashMap::new(),
            next_id: WHITE_ID,
        };
        let white = GpuTexture::from_rgba8(
            &store.device,
            &store.queue,
            &[255, 255, 255, 255],
            1,
            1,
            "white",
        );
        store.insert(white);
        store
    }

    fn insert(&mut self, texture: GpuTexture) -> TextureHandle {
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("gui texture bind group"),
            layout: &self.texture_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });
        let id = self.next_id;
        self.next_id += 1;
        self.textures.insert(
            id,
            StoredTexture {
                texture,
                bind_group,
            },
        );
        TextureHandle::whole(TextureId(id))
    }

    /// Bind group for a draw call's texture id, if the texture still exists.
    pub fn bind_group(&self, id: TextureId) -> Option<&wgpu::BindGroup> {
        self.textures.get(&id.0).map(|t| &t.bind_group)
    }

    /// Pixel size of a loaded texture.
    pub fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&id.0).map(|t| t.texture.size)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    fn read_and_upload(&mut self, path: &str) -> Option<TextureHandle> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::error!("Can't load texture '{path}': {e}");
                return None;
            }
        };
        match GpuTexture::from_bytes(&self.device, &self.queue, &bytes, path) {
            Ok(texture) => Some(self.insert(texture)),
            Err(e) => {
                log::error!("Can't load texture '{path}': {e}");
                None
            }
        }
    }
}

impl TextureLoader for TextureStore {
    fn load_file(&mut self, path: &str) -> Option<TextureHandle> {
        self.read_and_upload(path)
    }

    fn load_file_region(
        &mut self,
        path: &str,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    ) -> Option<TextureHandle> {
        let handle = self.read_and_upload(path)?;
        let (width, height) = self.texture_size(handle.id)?;
        if !region_in_bounds(width, height, min_x, min_y, max_x, max_y) {
            log::error!(
                "Can't load texture '{path}': region ({min_x},{min_y})..=({max_x},{max_y}) \
                 outside {width}x{height} image"
            );
            self.textures.remove(&handle.id.0);
            return None;
        }
        Some(TextureHandle {
            id: handle.id,
            uv: region_uv(width, height, min_x, min_y, max_x, max_y),
        })
    }

    fn load_rgba(&mut self, pixels: &[u8], width: u32, height: u32) -> Option<TextureHandle> {
        if width == 0 || height == 0 || pixels.len() as u64 != rgba_byte_len(width, height) {
            log::error!(
                "Can't load RGBA texture: {} bytes does not match {width}x{height}",
                pixels.len()
            );
            return None;
        }
        let texture =
            GpuTexture::from_rgba8(&self.device, &self.queue, pixels, width, height, "rgba");
        Some(self.insert(texture))
    }

    fn load_rgba_region(
        &mut self,
        pixels: &[u8],
        width: u32,
        height: u32,
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
    ) -> Option<TextureHandle> {
        if pixels.len() as u64 != rgba_byte_len(width, height) {
            log::error!(
                "Can't load RGBA texture: {} bytes does not match {width}x{height}",
                pixels.len()
            );
            return None;
        }
        if !region_in_bounds(width, height, min_x, min_y, max_x, max_y) {
            log::error!(
                "Can't load RGBA texture: region ({min_x},{min_y})..=({max_x},{max_y}) \
                 outside {width}x{height} buffer"
            );
            return None;
        }
        let region = copy_region(pixels, width, min_x, min_y, max_x, max_y);
        let texture = GpuTexture::from_rgba8(
            &self.device,
            &self.queue,
            &region,
            max_x - min_x + 1,
            max_y - min_y + 1,
            "rgba region",
        );
        Some(self.insert(texture))
    }

    fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        TextureStore::texture_size(self, id)
    }

    fn clean(&mut self) {
        // The white texture stays: fills always need it, and the renderer
        // treats its id as permanently valid.
        self.textures.retain(|&id, _| id == WHITE_ID);
        log::debug!("Texture store cleaned, {} textures retained", self.textures.len());
    }
}
