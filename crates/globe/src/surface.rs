//! Drawing target abstraction: a canvas in the browser, SVG in tools.

use foundation::math::Vec2;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` notation.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Surface {
    /// Backing-store size in pixels.
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba, width: f64);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Vec2 {
        (**self).size()
    }
    fn clear(&mut self) {
        (**self).clear()
    }
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        (**self).fill_circle(center, radius, color)
    }
    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba, width: f64) {
        (**self).stroke_circle(center, radius, color, width)
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{Rgba, Surface};
    use foundation::math::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Clear,
        Fill { center: Vec2, radius: f64, color: Rgba },
        Stroke { center: Vec2, radius: f64, color: Rgba, width: f64 },
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub size: Vec2,
        pub ops: Vec<DrawOp>,
    }

    impl RecordingSurface {
        pub fn new(size: f64) -> Self {
            Self {
                size: Vec2::new(size, size),
                ops: Vec::new(),
            }
        }

        pub fn fills(&self) -> impl Iterator<Item = (Vec2, f64, Rgba)> + '_ {
            self.ops.iter().filter_map(|op| match *op {
                DrawOp::Fill { center, radius, color } => Some((center, radius, color)),
                _ => None,
            })
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Vec2 {
            self.size
        }
        fn clear(&mut self) {
            self.ops.push(DrawOp::Clear);
        }
        fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
            self.ops.push(DrawOp::Fill { center, radius, color });
        }
        fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba, width: f64) {
            self.ops.push(DrawOp::Stroke { center, radius, color, width });
        }
    }
}
