use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawList, Primitive};

use super::common::{
    chunk_capacity, pack_uniforms, premul_alpha_blend, records_per_buffer, uniform_chunks,
    uniform_stride, DrawUniform, ShapeVertex, DRAW_UNIFORM_SIZE,
};
use super::geometry::GeometryTemplates;

/// Renders every command of a [`DrawList`] with the shared color shader.
///
/// One GPU draw call per command, in recording order. Each call gets its own
/// MVP + color record in a dynamic-offset uniform buffer.
///
/// GPU resources are created lazily:
/// - shader + pipelines once per surface format
/// - template geometry once
/// - uniform buffers grow to the next power of two when a list outgrows them
///
/// A single uniform buffer is capped by the device's `max_buffer_size` and by
/// the `u32` dynamic offset. Longer lists spill into further buffers, one per
/// chunk of commands.
///
/// Uniform uploads go through `Queue::write_buffer`, so a renderer holds one
/// list's uniforms per submission. Use one renderer per list drawn in a frame.
#[derive(Default)]
pub struct ShapeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    fill_pipeline: Option<wgpu::RenderPipeline>,
    line_pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    uniform_chunks: Vec<UniformChunk>,
    uniform_stride: u64,

    templates: Option<GeometryTemplates>,
}

impl ShapeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `draw_list` into `target`, loading (not clearing) existing contents.
    ///
    /// An empty list records nothing.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        if draw_list.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_templates(ctx);
        let per_buffer = self.ensure_uniform_chunks(ctx, draw_list.len());

        let items = draw_list.items();
        if self.uniform_chunks.len() < items.len().div_ceil(per_buffer) {
            return;
        }

        let view_projection = draw_list
            .view_projection()
            .unwrap_or_else(|| ctx.viewport.pixel_projection());

        for (chunk, range) in self.uniform_chunks.iter().zip(uniform_chunks(items.len(), per_buffer)) {
            let bytes = pack_uniforms(view_projection, &items[range], self.uniform_stride);
            ctx.queue.write_buffer(&chunk.buffer, 0, &bytes);
        }

        let Some(fill_pipeline) = self.fill_pipeline.as_ref() else { return };
        let Some(line_pipeline) = self.line_pipeline.as_ref() else { return };
        let Some(templates) = self.templates.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("rgb shape pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        let mut bound_lines: Option<bool> = None;
        for (chunk, range) in self.uniform_chunks.iter().zip(uniform_chunks(items.len(), per_buffer)) {
            for (i, cmd) in items[range].iter().enumerate() {
                let is_line = cmd.primitive == Primitive::Line;
                if bound_lines != Some(is_line) {
                    rpass.set_pipeline(if is_line { line_pipeline } else { fill_pipeline });
                    bound_lines = Some(is_line);
                }

                // In range: records_per_buffer keeps every offset within u32.
                let Ok(offset) = u32::try_from(i as u64 * self.uniform_stride) else { break };
                rpass.set_bind_group(0, &chunk.bind_group, &[offset]);
                templates.get(cmd.primitive).draw(&mut rpass);
            }
        }

        log::trace!(
            "ShapeRenderer: {} draw calls over {} uniform buffer(s)",
            items.len(),
            items.len().div_ceil(per_buffer)
        );
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.fill_pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("rgb color shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/color.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("rgb color bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: Some(DRAW_UNIFORM_SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("rgb color pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let create = |label: &str, topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[ShapeVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        self.fill_pipeline = Some(create("rgb fill pipeline", wgpu::PrimitiveTopology::TriangleList));
        self.line_pipeline = Some(create("rgb line pipeline", wgpu::PrimitiveTopology::LineList));
        self.pipeline_format = Some(ctx.surface_format);
        self.bind_group_layout = Some(bind_group_layout);

        // Bind groups belong to the old layout.
        self.uniform_chunks.clear();

        log::debug!("ShapeRenderer: pipelines created for {:?}", ctx.surface_format);
    }

    fn ensure_templates(&mut self, ctx: &RenderCtx<'_>) {
        if self.templates.is_none() {
            self.templates = Some(GeometryTemplates::new(ctx.device));
        }
    }

    /// Makes sure there is one uniform buffer per chunk of `required` commands,
    /// each large enough for its chunk. Returns the per-buffer record limit.
    fn ensure_uniform_chunks(&mut self, ctx: &RenderCtx<'_>, required: usize) -> usize {
        let limits = ctx.device.limits();
        let stride = uniform_stride(limits.min_uniform_buffer_offset_alignment);
        let per_buffer = records_per_buffer(limits.max_buffer_size, stride);
        debug_assert!(stride >= std::mem::size_of::<DrawUniform>() as u64);

        if stride != self.uniform_stride {
            self.uniform_chunks.clear();
            self.uniform_stride = stride;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return per_buffer };

        for (index, range) in uniform_chunks(required, per_buffer).enumerate() {
            let needed = range.len();
            if self.uniform_chunks.get(index).is_some_and(|c| c.capacity >= needed) {
                continue;
            }

            let chunk = UniformChunk::new(ctx.device, bgl, chunk_capacity(needed, per_buffer), stride);
            log::debug!(
                "ShapeRenderer: uniform buffer {index} sized for {} draws ({stride} bytes each)",
                chunk.capacity
            );

            if index < self.uniform_chunks.len() {
                self.uniform_chunks[index] = chunk;
            } else {
                self.uniform_chunks.push(chunk);
            }
        }

        per_buffer
    }
}

/// One dynamic-offset uniform buffer and the bind group over it.
struct UniformChunk {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    capacity: usize,
}

impl UniformChunk {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, capacity: usize, stride: u64) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("rgb draw uniforms"),
            size: capacity as u64 * stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("rgb color bind group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: Some(DRAW_UNIFORM_SIZE),
                }),
            }],
        });

        Self { buffer, bind_group, capacity }
    }
}
