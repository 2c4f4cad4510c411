use glam::Vec2;

/// 8-bit RGBA color, independent of any graphics backend.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    /// scale the color channels, leaving alpha untouched
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0., 255.) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Drawing primitives the renderer needs from a graphics surface.
///
/// Coordinates are in screen pixels. Geometry code never calls these to make
/// decisions, only to present results.
pub trait Painter {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) -> anyhow::Result<()>;

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) -> anyhow::Result<()>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> anyhow::Result<()>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    pub(crate) enum Call {
        Rect { pos: Vec2, size: Vec2, color: Rgba },
        Line { from: Vec2, to: Vec2, color: Rgba },
        Circle { center: Vec2, radius: f32, color: Rgba },
    }

    /// painter that just remembers what it was asked to draw
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub calls: Vec<Call>,
    }

    impl Painter for Recorder {
        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) -> anyhow::Result<()> {
            self.calls.push(Call::Rect { pos, size, color });
            Ok(())
        }

        fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) -> anyhow::Result<()> {
            self.calls.push(Call::Line { from, to, color });
            Ok(())
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> anyhow::Result<()> {
            self.calls.push(Call::Circle {
                center,
                radius,
                color,
            });
            Ok(())
        }
    }

    #[test]
    fn scaled_keeps_alpha() {
        let c = Rgba::new(200, 100, 10, 40).scaled(0.5);
        assert_eq!(c, Rgba::new(100, 50, 5, 40));
    }

    #[test]
    fn scaled_saturates() {
        assert_eq!(Rgba::rgb(200, 0, 0).scaled(2.).r, 255);
    }
}
