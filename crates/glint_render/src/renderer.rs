//! The wgpu-backed `GuiRenderer` implementation.
//!
//! Quads accumulate in a `QuadBatch` between `begin_frame` and `flush`;
//! `flush` streams them into GPU buffers (power-of-two growth, never
//! shrinking) and issues the merged draw calls, rebinding the texture
//! group only when it actually changes.

use glam::Mat4;
use wgpu::util::DeviceExt;

use glint_core::render::{GuiRenderer, TextureHandle, TextureId};

use crate::mesh::{grown_capacity, QuadBatch};
use crate::pipeline::QuadPipeline;
use crate::texture_store::TextureStore;
use crate::vertex::GuiVertex;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
}

pub struct BatchRenderer {
    pipeline: QuadPipeline,
    camera_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_capacity: usize,
    batch: QuadBatch,
}

impl BatchRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let pipeline = QuadPipeline::new(device, surface_format);

        // The projection is fixed: [0,1]^2 GUI space to clip space. Written
        // once, never updated.
        let globals = Globals {
            view_proj: Mat4::orthographic_rh(0.0, 1.0, 0.0, 1.0, -1.0, 1.0).to_cols_array_2d(),
        };
        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("gui globals buffer"),
            contents: bytemuck::cast_slice(&[globals]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let camera_bind_group = pipeline.create_camera_bind_group(device, &camera_buffer);

        let vertex_capacity = 64;
        let index_capacity = 96;
        Self {
            pipeline,
            camera_bind_group,
            vertex_buffer: create_vertex_buffer(device, vertex_capacity),
            index_buffer: create_index_buffer(device, index_capacity),
            vertex_capacity,
            index_capacity,
            batch: QuadBatch::new(),
        }
    }

    pub fn pipeline(&self) -> &QuadPipeline {
        &self.pipeline
    }

    /// Start collecting quads for a new frame.
    pub fn begin_frame(&mut self) {
        self.batch.clear();
    }

    pub fn quad_count(&self) -> usize {
        self.batch.vertices().len() / 4
    }

    /// Upload the collected batch and record its render pass. Always clears
    /// the target, so an empty batch still produces the background color.
    pub fn flush(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        textures: &TextureStore,
        clear_color: wgpu::Color,
    ) {
        if let Some(capacity) = grown_capacity(self.vertex_capacity, self.batch.vertices().len()) {
            self.vertex_capacity = capacity;
            self.vertex_buffer = create_vertex_buffer(device, capacity);
        }
        if let Some(capacity) = grown_capacity(self.index_capacity, self.batch.indices().len()) {
            self.index_capacity = capacity;
            self.index_buffer = create_index_buffer(device, capacity);
        }

        if !self.batch.is_empty() {
            queue.write_buffer(
                &self.vertex_buffer,
                0,
                bytemuck::cast_slice(self.batch.vertices()),
            );
            queue.write_buffer(
                &self.index_buffer,
                0,
                bytemuck::cast_slice(self.batch.indices()),
            );
        }

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gui render pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        if self.batch.is_empty() {
            return;
        }

        render_pass.set_pipeline(&self.pipeline.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        let mut last_bound: Option<TextureId> = None;
        for draw in self.batch.draw_calls() {
            let Some(bind_group) = textures.bind_group(draw.texture) else {
                log::warn!("Skipping draw call for dangling texture id {:?}", draw.texture);
                continue;
            };
            if last_bound != Some(draw.texture) {
                render_pass.set_bind_group(1, bind_group, &[]);
                last_bound = Some(draw.texture);
            }
            render_pass.draw_indexed(draw.index_start..(draw.index_start + draw.index_count), 0, 0..1);
        }
    }
}

impl GuiRenderer for BatchRenderer {
    fn fill_rect(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32, color: [f32; 4]) {
        self.batch
            .push_quad(min_x, min_y, max_x, max_y, TextureStore::WHITE, color);
    }

    fn draw_texture(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32, texture: TextureHandle) {
        self.batch
            .push_quad(min_x, min_y, max_x, max_y, texture, [1.0, 1.0, 1.0, 1.0]);
    }

    fn draw_texture_tinted(
        &mut self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        texture: TextureHandle,
        tint: [f32; 4],
    ) {
        self.batch
            .push_quad(min_x, min_y, max_x, max_y, texture, tint);
    }
}

fn create_vertex_buffer(device: &wgpu::Device, vertex_capacity: usize) -> wgpu::Buffer {
    let byte_len = (vertex_capacity * std::mem::size_of::<GuiVertex>()).max(1) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("gui vertex buffer"),
        size: byte_len,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(device: &wgpu::Device, index_capacity: usize) -> wgpu::Buffer {
    let byte_len = (index_capacity * std::mem::size_of::<u32>()).max(1) as u64;
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("gui index buffer"),
        size: byte_len,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
