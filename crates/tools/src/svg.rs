//! SVG backend for [`globe::Surface`].

use std::fmt::Write as _;

use foundation::math::Vec2;
use globe::{Rgba, Surface};

/// Collects circles as SVG elements. `clear` drops everything drawn so far.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Vec2,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Vec2::new(width, height),
            elements: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

fn paint(color: Rgba) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

impl Surface for SvgSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.elements.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{:.3}"/>"#,
            center.x,
            center.y,
            radius,
            paint(color),
            color.a
        ));
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f64, color: Rgba, width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}" stroke-opacity="{:.3}" stroke-width="{}"/>"#,
            center.x,
            center.y,
            radius,
            paint(color),
            color.a,
            width
        ));
    }
}

/// Stacks layers bottom to top on a black background.
pub fn document(size: Vec2, layers: &[&SvgSurface]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.x,
        h = size.y
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="black"/>"#);
    for layer in layers {
        out.push_str("<g>\n");
        for e in &layer.elements {
            out.push_str(e);
            out.push('\n');
        }
        out.push_str("</g>\n");
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::{SvgSurface, document};
    use foundation::math::Vec2;
    use globe::{Rgba, Surface};

    #[test]
    fn circles_become_elements() {
        let mut s = SvgSurface::new(100.0, 100.0);
        s.fill_circle(Vec2::new(10.0, 20.0), 3.0, Rgba::new(255, 160, 0, 0.5));
        s.stroke_circle(Vec2::new(1.0, 1.0), 1.0, Rgba::new(255, 255, 255, 0.25), 0.5);
        let doc = document(Vec2::new(100.0, 100.0), &[&s]);
        assert!(doc.contains(r#"<circle cx="10.00" cy="20.00" r="3.00" fill="rgb(255,160,0)" fill-opacity="0.500"/>"#));
        assert!(doc.contains(r#"stroke-width="0.5""#));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn clear_drops_elements() {
        let mut s = SvgSurface::new(10.0, 10.0);
        s.fill_circle(Vec2::new(1.0, 1.0), 1.0, Rgba::new(0, 0, 0, 1.0));
        s.clear();
        assert!(s.is_empty());
    }
}
