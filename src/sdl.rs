use crate::paint::{Painter, Rgba};
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, RenderTarget};

// helper trait to convert strings into std::error types
pub trait StringToAnyhow<T> {
    fn ah(self) -> anyhow::Result<T>;
}

impl<T> StringToAnyhow<T> for Result<T, String> {
    fn ah(self) -> anyhow::Result<T> {
        self.map_err(|err| anyhow::anyhow!("{err}"))
    }
}

impl From<Rgba> for Color {
    fn from(Rgba { r, g, b, a }: Rgba) -> Self {
        Color::RGBA(r, g, b, a)
    }
}

fn point(v: Vec2) -> Point {
    Point::new(v.x.round() as i32, v.y.round() as i32)
}

impl<T: RenderTarget> Painter for Canvas<T> {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) -> anyhow::Result<()> {
        if size.x < 1. || size.y < 1. {
            return Ok(());
        }
        self.set_blend_mode(BlendMode::Blend);
        self.set_draw_color(Color::from(color));
        let rect = Rect::new(
            pos.x.round() as i32,
            pos.y.round() as i32,
            size.x.round() as u32,
            size.y.round() as u32,
        );
        Canvas::fill_rect(self, rect).ah()
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) -> anyhow::Result<()> {
        self.set_blend_mode(BlendMode::Blend);
        self.set_draw_color(Color::from(color));
        self.draw_line(point(from), point(to)).ah()
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> anyhow::Result<()> {
        self.set_blend_mode(BlendMode::Blend);
        self.set_draw_color(Color::from(color));

        // one horizontal span per scanline
        let r = radius.round().max(1.) as i32;
        let c = point(center);
        for dy in -r..=r {
            let half = (((r * r - dy * dy) as f32).sqrt()) as i32;
            self.draw_line(
                Point::new(c.x() - half, c.y() + dy),
                Point::new(c.x() + half, c.y() + dy),
            )
            .ah()?;
        }

        Ok(())
    }
}
