use core::f32::consts::{FRAC_PI_4, TAU};

use anyhow::Result;
use winit::dpi::LogicalSize;

use rgb_engine::coords::{Transformation, Vec2, Vec3};
use rgb_engine::core::{App, AppControl, FrameCtx};
use rgb_engine::device::GpuInit;
use rgb_engine::logging::{init_logging, LoggingConfig};
use rgb_engine::paint::Color;
use rgb_engine::render::ShapeRenderer;
use rgb_engine::scene::DrawList;
use rgb_engine::window::{Runtime, RuntimeConfig};

/// Draws every primitive the engine offers, animated by frame time.
#[derive(Default)]
struct Showcase {
    flat: DrawList,
    flat_renderer: ShapeRenderer,

    // 3D lines need their own projection, hence their own list + renderer.
    cube: DrawList,
    cube_renderer: ShapeRenderer,
}

impl Showcase {
    fn record_flat(&mut self, t: f32) {
        let list = &mut self.flat;
        list.clear();

        let accent = Color::from_srgb_u8(255, 120, 40, 255);
        let teal = Color::from_srgb_u8(40, 200, 190, 255);

        // Filled and outlined circles.
        list.draw_circle(Vec2::new(120.0, 120.0), 60.0, accent);
        list.draw_circle_outline(Vec2::new(120.0, 120.0), 75.0, Color::WHITE);
        list.draw_circle(Vec2::new(120.0, 120.0), 20.0 + 8.0 * (t * 2.0).sin(), teal.with_opacity(0.8));

        // Star of thin lines.
        let hub = Vec2::new(340.0, 120.0);
        for i in 0..12 {
            let dir = Vec2::new(70.0, 0.0).rotate(t * 0.5 + TAU * i as f32 / 12.0);
            list.draw_line(hub, hub + dir, Color::from_straight(1.0, 1.0, 1.0, 0.6));
        }

        // Rotating rectangle and its outline.
        let spin = Transformation::new(Vec2::new(560.0, 120.0), t, 80.0);
        list.draw_rectangle(spin, Color::BLUE.with_opacity(0.7));
        list.draw_rectangle_outline(spin, Color::WHITE);
        list.draw_rectangle_outline(
            Transformation::from_origin_size(Vec2::new(480.0, 40.0), Vec2::new(160.0, 160.0)),
            Color::GREEN,
        );

        // Wide lines of increasing width.
        for i in 0..5 {
            let y = 260.0 + i as f32 * 40.0;
            let wobble = 20.0 * (t + i as f32).sin();
            let width = 2.0 + i as f32 * 4.0;
            list.draw_wide_line(Vec2::new(60.0, y), Vec2::new(400.0, y + wobble), width, teal);
            list.draw_line(Vec2::new(60.0, y), Vec2::new(400.0, y + wobble), Color::RED);
        }
    }

    fn record_cube(&mut self, t: f32, aspect: f32) {
        const CORNERS: [Vec3; 8] = [
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
        ];
        const EDGES: [(usize, usize); 12] = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];

        let list = &mut self.cube;
        list.clear();

        let view = glam::Mat4::look_at_rh(glam::Vec3::new(0.0, 0.0, 6.0), glam::Vec3::ZERO, glam::Vec3::Y);
        let proj = glam::Mat4::perspective_rh(FRAC_PI_4, aspect, 0.1, 100.0);
        // Push the cube into the lower-right quadrant of clip space.
        let shift = glam::Mat4::from_translation(glam::Vec3::new(0.5, -0.4, 0.0));
        let model = glam::Mat4::from_rotation_y(t * 0.7) * glam::Mat4::from_rotation_x(t * 0.4);
        list.set_view_projection(shift * proj * view * model);

        for (a, b) in EDGES {
            list.draw_line_3d(CORNERS[a], CORNERS[b], Color::WHITE);
        }
    }
}

impl App for Showcase {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let t = ctx.time.elapsed;
        let viewport = ctx.window.viewport();

        self.record_flat(t);
        self.record_cube(t, viewport.width.max(1.0) / viewport.height.max(1.0));

        let clear = Color::from_srgb_u8(18, 18, 24, 255);
        let Self { flat, flat_renderer, cube, cube_renderer } = self;
        ctx.render(clear, |rctx, target| {
            flat_renderer.render(rctx, target, flat);
            cube_renderer.render(rctx, target, cube);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "rgb demo".to_string(),
        initial_size: LogicalSize::new(900.0, 520.0),
    };

    log::info!("starting rgb demo");
    Runtime::run(config, GpuInit::default(), Showcase::default())
}
