//! Drawing seam between bodies and whatever backend puts pixels on screen.
//!
//! Bodies only ever ask for two primitives: a filled sphere and a line. Any
//! graphics backend can implement [`SphereRenderer`]; [`DrawList`] records
//! the calls instead, which is what the demo binary and the tests use.

use palette::Srgba;
use ultraviolet::Vec3;

/// 8-bit sRGB color with alpha.
pub type Color = Srgba<u8>;

pub trait SphereRenderer {
    /// Draw a filled sphere centered at `center`.
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color);

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Sphere {
        center: Vec3,
        radius: f32,
        color: Color,
    },
    Line {
        from: Vec3,
        to: Vec3,
        color: Color,
    },
}

/// Records draw calls in the order they were issued.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn spheres(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sphere { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl SphereRenderer for DrawList {
    fn draw_sphere(&mut self, center: Vec3, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Sphere {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}

/// Returns `color` with its alpha multiplied by `factor` (clamped to `0..=1`).
pub fn fade(color: Color, factor: f32) -> Color {
    let alpha = (color.alpha as f32 * factor.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.red, color.green, color.blue, alpha)
}
