//! GPU types and helpers shared by the shape renderer.

use std::num::NonZeroU64;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::scene::DrawCmd;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── vertex ────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ShapeVertex {
    pub pos: [f32; 3], // unit-shape space
}

impl ShapeVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    #[inline]
    pub(super) const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y, 0.0] }
    }

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── per-draw uniform ──────────────────────────────────────────────────────

/// Uniform block of `color.wgsl` (80 bytes).
///
///  offset  0  mvp    mat4x4<f32>  column-major
///  offset 64  color  vec4<f32>    premultiplied
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct DrawUniform {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl DrawUniform {
    #[inline]
    pub(super) fn new(mvp: glam::Mat4, color: Color) -> Self {
        Self { mvp: mvp.to_cols_array_2d(), color: color.to_array() }
    }
}

pub(super) const DRAW_UNIFORM_SIZE: NonZeroU64 =
    match NonZeroU64::new(std::mem::size_of::<DrawUniform>() as u64) {
        Some(size) => size,
        None => panic!("DrawUniform must not be zero-sized"),
    };

/// Distance between consecutive uniform records, honoring the device's
/// dynamic-offset alignment.
#[inline]
pub(super) fn uniform_stride(min_alignment: u32) -> u64 {
    let align = u64::from(min_alignment.max(1));
    DRAW_UNIFORM_SIZE.get().div_ceil(align) * align
}

/// Most records one uniform buffer may hold.
///
/// Bounded by the device's `max_buffer_size` and by the `u32` dynamic offset
/// of the last record. Never less than one.
pub(super) fn records_per_buffer(max_buffer_size: u64, stride: u64) -> usize {
    let stride = stride.max(1);
    let by_size = max_buffer_size / stride;
    let by_offset = u64::from(u32::MAX) / stride + 1;
    usize::try_from(by_size.min(by_offset)).unwrap_or(usize::MAX).max(1)
}

/// Splits `len` commands into consecutive ranges of at most `per_buffer`
/// commands, one range per uniform buffer.
pub(super) fn uniform_chunks(len: usize, per_buffer: usize) -> impl Iterator<Item = Range<usize>> {
    let per = per_buffer.max(1);
    (0..len).step_by(per).map(move |start| start..(start + per).min(len))
}

/// Records to allocate for a buffer that must hold `required` of them:
/// next power of two, at least 64, never above `per_buffer`.
#[inline]
pub(super) fn chunk_capacity(required: usize, per_buffer: usize) -> usize {
    required.next_power_of_two().max(64).min(per_buffer.max(1))
}

/// Writes one `DrawUniform` per command into a byte buffer laid out with `stride`.
pub(super) fn pack_uniforms(view_projection: glam::Mat4, items: &[DrawCmd], stride: u64) -> Vec<u8> {
    let stride = stride as usize;
    let size = DRAW_UNIFORM_SIZE.get() as usize;
    let mut bytes = vec![0u8; items.len() * stride];

    for (i, cmd) in items.iter().enumerate() {
        let u = DrawUniform::new(view_projection * cmd.transform.to_mat4(), cmd.color);
        let at = i * stride;
        bytes[at..at + size].copy_from_slice(bytemuck::bytes_of(&u));
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Transformation, Vec2};
    use crate::scene::Primitive;

    #[test]
    fn uniform_is_80_bytes() {
        assert_eq!(DRAW_UNIFORM_SIZE.get(), 80);
    }

    #[test]
    fn stride_rounds_up_to_alignment() {
        assert_eq!(uniform_stride(256), 256);
        assert_eq!(uniform_stride(64), 128);
        assert_eq!(uniform_stride(16), 80);
        assert_eq!(uniform_stride(0), 80);
    }

    // ── uniform buffer sizing ─────────────────────────────────────────────

    #[test]
    fn records_per_buffer_respects_device_buffer_limit() {
        let stride = uniform_stride(256);
        let max = wgpu::Limits::default().max_buffer_size;
        let per = records_per_buffer(max, stride);

        assert_eq!(per, 1_048_576);
        assert!(per as u64 * stride <= max);
        assert!(chunk_capacity(1_048_577, per) as u64 * stride <= max);
    }

    #[test]
    fn records_per_buffer_keeps_offsets_within_u32() {
        let stride = uniform_stride(256);
        let per = records_per_buffer(u64::MAX, stride);
        assert!((per as u64 - 1) * stride <= u64::from(u32::MAX));
        assert!(per as u64 * stride > u64::from(u32::MAX));
    }

    #[test]
    fn records_per_buffer_is_never_zero() {
        assert_eq!(records_per_buffer(0, 256), 1);
        assert_eq!(records_per_buffer(100, 0), 100);
    }

    #[test]
    fn oversized_list_splits_into_bounded_chunks() {
        let per = records_per_buffer(wgpu::Limits::default().max_buffer_size, uniform_stride(256));
        let chunks: Vec<_> = uniform_chunks(1_048_577, per).collect();
        assert_eq!(chunks, vec![0..1_048_576, 1_048_576..1_048_577]);
    }

    #[test]
    fn chunks_cover_every_command_in_order() {
        let chunks: Vec<_> = uniform_chunks(10, 4).collect();
        assert_eq!(chunks, vec![0..4, 4..8, 8..10]);
        assert_eq!(uniform_chunks(0, 4).count(), 0);
        assert_eq!(uniform_chunks(3, 0).count(), 3);
    }

    #[test]
    fn chunk_capacity_grows_in_powers_of_two() {
        assert_eq!(chunk_capacity(1, 1_000), 64);
        assert_eq!(chunk_capacity(65, 1_000), 128);
        assert_eq!(chunk_capacity(600, 1_000), 1_000);
    }

    #[test]
    fn packed_records_sit_at_stride_offsets() {
        let items = [
            DrawCmd::new(Primitive::Circle, Transformation::new(Vec2::new(5.0, 6.0), 0.0, 2.0), Color::RED),
            DrawCmd::new(Primitive::Line, Transformation::IDENTITY, Color::BLUE),
        ];
        let stride = uniform_stride(256);
        let bytes = pack_uniforms(glam::Mat4::IDENTITY, &items, stride);
        assert_eq!(bytes.len(), 512);

        let second: DrawUniform = bytemuck::pod_read_unaligned(&bytes[256..336]);
        assert_eq!(second.color, Color::BLUE.to_array());
        assert_eq!(second.mvp, glam::Mat4::IDENTITY.to_cols_array_2d());

        let first: DrawUniform = bytemuck::pod_read_unaligned(&bytes[0..80]);
        assert_eq!(first.mvp[3], [5.0, 6.0, 0.0, 1.0]);
        assert_eq!(first.mvp[0], [2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn padding_between_records_stays_zero() {
        let items = [DrawCmd::new(Primitive::Rectangle, Transformation::IDENTITY, Color::WHITE)];
        let bytes = pack_uniforms(glam::Mat4::IDENTITY, &items, 256);
        assert!(bytes[80..].iter().all(|b| *b == 0));
    }

    #[test]
    fn view_projection_is_applied_before_model() {
        let items = [DrawCmd::new(
            Primitive::Line,
            Transformation::from_basis(Vec2::new(1.0, 0.0), Vec2::X, Vec2::ZERO),
            Color::WHITE,
        )];
        let vp = glam::Mat4::from_scale(glam::Vec3::splat(2.0));
        let bytes = pack_uniforms(vp, &items, 80);
        let u: DrawUniform = bytemuck::pod_read_unaligned(&bytes[0..80]);
        assert_eq!(u.mvp[3], [2.0, 0.0, 0.0, 1.0]);
    }
}
