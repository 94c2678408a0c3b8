//! Unit-shape templates uploaded once and reused for every draw.

use core::f32::consts::TAU;

use wgpu::util::DeviceExt;

use crate::scene::shapes::CIRCLE_DETAIL;
use crate::scene::Primitive;

use super::common::ShapeVertex;

/// Center vertex followed by `CIRCLE_DETAIL + 1` rim vertices; the last rim
/// vertex repeats the first so the fan closes.
pub(super) fn circle_vertices() -> Vec<ShapeVertex> {
    let mut v = Vec::with_capacity(CIRCLE_DETAIL as usize + 2);
    v.push(ShapeVertex::new(0.0, 0.0));
    for i in 0..=CIRCLE_DETAIL {
        let angle = TAU * (i % CIRCLE_DETAIL) as f32 / CIRCLE_DETAIL as f32;
        let (sin, cos) = angle.sin_cos();
        v.push(ShapeVertex::new(cos, sin));
    }
    v
}

/// Triangle-list expansion of the circle fan around vertex 0.
pub(super) fn circle_indices() -> Vec<u16> {
    (1..=CIRCLE_DETAIL as u16).flat_map(|i| [0, i, i + 1]).collect()
}

pub(super) const LINE_VERTICES: [ShapeVertex; 2] = [
    ShapeVertex::new(0.0, 0.0),
    ShapeVertex::new(1.0, 0.0),
];

pub(super) const RECT_VERTICES: [ShapeVertex; 6] = [
    ShapeVertex::new(0.0, 0.0),
    ShapeVertex::new(1.0, 0.0),
    ShapeVertex::new(1.0, 1.0),
    ShapeVertex::new(0.0, 0.0),
    ShapeVertex::new(1.0, 1.0),
    ShapeVertex::new(0.0, 1.0),
];

/// One uploaded template: vertex buffer plus optional index buffer.
pub(super) struct GeometryBuffer {
    vbo: wgpu::Buffer,
    ibo: Option<wgpu::Buffer>,
    count: u32,
}

impl GeometryBuffer {
    fn new(device: &wgpu::Device, label: &str, vertices: &[ShapeVertex], indices: Option<&[u16]>) -> Self {
        let vbo_label = format!("rgb {label} vbo");
        let vbo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(vbo_label.as_str()),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ibo = indices.map(|idx| {
            let ibo_label = format!("rgb {label} ibo");
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(ibo_label.as_str()),
                contents: bytemuck::cast_slice(idx),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        let count = indices.map_or(vertices.len(), <[u16]>::len) as u32;
        Self { vbo, ibo, count }
    }

    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vbo.slice(..));
        match &self.ibo {
            Some(ibo) => {
                rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..self.count, 0, 0..1);
            }
            None => rpass.draw(0..self.count, 0..1),
        }
    }
}

/// All shape templates, created together.
pub(super) struct GeometryTemplates {
    circle: GeometryBuffer,
    line: GeometryBuffer,
    rectangle: GeometryBuffer,
}

impl GeometryTemplates {
    pub(super) fn new(device: &wgpu::Device) -> Self {
        Self {
            circle: GeometryBuffer::new(device, "circle", &circle_vertices(), Some(circle_indices().as_slice())),
            line: GeometryBuffer::new(device, "line", &LINE_VERTICES, None),
            rectangle: GeometryBuffer::new(device, "rectangle", &RECT_VERTICES, None),
        }
    }

    #[inline]
    pub(super) fn get(&self, primitive: Primitive) -> &GeometryBuffer {
        match primitive {
            Primitive::Circle => &self.circle,
            Primitive::Line => &self.line,
            Primitive::Rectangle => &self.rectangle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_template_sizes() {
        assert_eq!(circle_vertices().len(), 42);
        assert_eq!(circle_indices().len(), 120);
    }

    #[test]
    fn circle_indices_stay_in_range() {
        let n = circle_vertices().len() as u16;
        assert!(circle_indices().iter().all(|&i| i < n));
    }

    #[test]
    fn circle_rim_is_unit_and_closed() {
        let v = circle_vertices();
        assert_eq!(v[0].pos, [0.0, 0.0, 0.0]);
        for p in &v[1..] {
            let r = (p.pos[0] * p.pos[0] + p.pos[1] * p.pos[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-6);
        }
        assert_eq!(v[1], v[v.len() - 1]);
    }

    #[test]
    fn circle_fan_triangles_share_center_and_wind_ccw() {
        let v = circle_vertices();
        for tri in circle_indices().chunks(3) {
            assert_eq!(tri[0], 0);
            let a = v[tri[1] as usize].pos;
            let b = v[tri[2] as usize].pos;
            assert!(a[0] * b[1] - a[1] * b[0] > 0.0);
        }
    }

    #[test]
    fn rectangle_triangles_cover_unit_square() {
        // Two triangles with total area 1.
        let area: f32 = RECT_VERTICES
            .chunks(3)
            .map(|t| {
                let (a, b, c) = (t[0].pos, t[1].pos, t[2].pos);
                ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() * 0.5
            })
            .sum();
        assert_eq!(area, 1.0);
    }

    #[test]
    fn line_template_is_unit_segment() {
        assert_eq!(LINE_VERTICES[0].pos, [0.0, 0.0, 0.0]);
        assert_eq!(LINE_VERTICES[1].pos, [1.0, 0.0, 0.0]);
    }
}
