//! CPU-side quad batching.
//!
//! Components draw through `GuiRenderer` in arbitrary order; the batch
//! collects every quad of a frame into one vertex/index stream and merges
//! consecutive quads that share a texture into a single indexed draw call,
//! minimizing bind-group switches in the render pass. Purely CPU-side so
//! the merging behavior is testable without a device.

use glint_core::render::{TextureHandle, TextureId};

use crate::vertex::GuiVertex;

/// A contiguous index range drawn with one texture binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub texture: TextureId,
    pub index_start: u32,
    pub index_count: u32,
}

#[derive(Debug, Default)]
pub struct QuadBatch {
    vertices: Vec<GuiVertex>,
    indices: Vec<u32>,
    draw_calls: Vec<DrawCall>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.draw_calls.clear();
    }

    /// Append one axis-aligned quad. The handle's UV rect is bottom-left
    /// like the position space; vertices store wgpu's top-left texture
    /// coordinates, so v is flipped here.
    pub fn push_quad(
        &mut self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        texture: TextureHandle,
        color: [f32; 4],
    ) {
        let [u0, v0, u1, v1] = texture.uv;
        let (tex_v_bottom, tex_v_top) = (1.0 - v0, 1.0 - v1);
        let base_index = self.vertices.len() as u32;

        self.vertices.push(GuiVertex {
            position: [min_x, min_y],
            uv: [u0, tex_v_bottom],
            color,
        });
        self.vertices.push(GuiVertex {
            position: [max_x, min_y],
            uv: [u1, tex_v_bottom],
            color,
        });
        self.vertices.push(GuiVertex {
            position: [max_x, max_y],
            uv: [u1, tex_v_top],
            color,
        });
        self.vertices.push(GuiVertex {
            position: [min_x, max_y],
            uv: [u0, tex_v_top],
            color,
        });

        let draw_start = self.indices.len() as u32;
        self.indices.extend_from_slice(&[
            base_index,
            base_index + 1,
            base_index + 2,
            base_index,
            base_index + 2,
            base_index + 3,
        ]);

        self.push_draw_call(texture.id, draw_start, 6);
    }

    /// Append a draw call, merging with the previous one when the texture
    /// matches and the indices are contiguous.
    fn push_draw_call(&mut self, texture: TextureId, index_start: u32, index_count: u32) {
        if let Some(last) = self.draw_calls.last_mut() {
            let contiguous = last.index_start + last.index_count == index_start;
            if last.texture == texture && contiguous {
                last.index_count += index_count;
                return;
            }
        }
        self.draw_calls.push(DrawCall {
            texture,
            index_start,
            index_count,
        });
    }

    pub fn vertices(&self) -> &[GuiVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Next buffer capacity for `needed` elements, or None if `current`
/// already suffices. Grows in powers of two and never shrinks.
pub fn grown_capacity(current: usize, needed: usize) -> Option<usize> {
    if needed <= current {
        None
    } else {
        Some(needed.next_power_of_two())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    fn whole(id: u32) -> TextureHandle {
        TextureHandle::whole(TextureId(id))
    }

    #[test]
    fn quad_emits_four_vertices_six_indices() {
        let mut batch = QuadBatch::new();
        batch.push_quad(0.1, 0.2, 0.4, 0.5, whole(0), WHITE);
        assert_eq!(batch.vertices().len(), 4);
        assert_eq!(batch.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(batch.vertices()[0].position, [0.1, 0.2]);
        assert_eq!(batch.vertices()[2].position, [0.4, 0.5]);
    }

    #[test]
    fn quad_flips_v_into_texture_space() {
        let mut batch = QuadBatch::new();
        let handle = TextureHandle {
            id: TextureId(0),
            uv: [0.25, 0.1, 0.75, 0.6],
        };
        batch.push_quad(0.0, 0.0, 1.0, 1.0, handle, WHITE);
        // Bottom vertices sample the region's bottom edge (v0 = 0.1 in
        // bottom-left space -> 0.9 in texture space).
        assert_eq!(batch.vertices()[0].uv, [0.25, 0.9]);
        assert_eq!(batch.vertices()[1].uv, [0.75, 0.9]);
        // Top vertices sample the top edge.
        assert!((batch.vertices()[2].uv[1] - 0.4).abs() < 1e-6);
        assert!((batch.vertices()[3].uv[1] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn same_texture_quads_merge_into_one_draw_call() {
        let mut batch = QuadBatch::new();
        batch.push_quad(0.0, 0.0, 0.1, 0.1, whole(3), WHITE);
        batch.push_quad(0.2, 0.2, 0.3, 0.3, whole(3), WHITE);
        batch.push_quad(0.4, 0.4, 0.5, 0.5, whole(3), WHITE);
        assert_eq!(
            batch.draw_calls(),
            &[DrawCall {
                texture: TextureId(3),
                index_start: 0,
                index_count: 18,
            }]
        );
    }

    #[test]
    fn texture_change_splits_draw_calls() {
        let mut batch = QuadBatch::new();
        batch.push_quad(0.0, 0.0, 0.1, 0.1, whole(1), WHITE);
        batch.push_quad(0.2, 0.2, 0.3, 0.3, whole(2), WHITE);
        batch.push_quad(0.4, 0.4, 0.5, 0.5, whole(1), WHITE);
        let calls = batch.draw_calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].texture, TextureId(1));
        assert_eq!(calls[1].texture, TextureId(2));
        assert_eq!(calls[2].texture, TextureId(1));
        assert_eq!(calls[1].index_start, 6);
        assert_eq!(calls[2].index_start, 12);
    }

    #[test]
    fn clear_resets_everything() {
        let mut batch = QuadBatch::new();
        batch.push_quad(0.0, 0.0, 1.0, 1.0, whole(0), WHITE);
        batch.clear();
        assert!(batch.is_empty());
        assert!(batch.indices().is_empty());
        assert!(batch.draw_calls().is_empty());
    }

    #[test]
    fn grown_capacity_rounds_to_power_of_two() {
        assert_eq!(grown_capacity(0, 5), Some(8));
        assert_eq!(grown_capacity(8, 9), Some(16));
        assert_eq!(grown_capacity(16, 1000), Some(1024));
    }

    #[test]
    fn grown_capacity_never_shrinks() {
        assert_eq!(grown_capacity(16, 3), None);
        assert_eq!(grown_capacity(16, 16), None);
    }
}
