//! Interactive globe: renderer, selection and star layer behind one handle.
//!
//! Every input is plain data (positions, timestamps, canvas metrics), so the
//! browser glue only translates events and the whole flow runs natively in
//! tests.

use std::sync::Arc;

use foundation::math::Vec2;
use foundation::time::Millis;

use crate::config::{GlobeConfig, InteractionConfig};
use crate::markers::{DataCenter, MarkerId};
use crate::picking::{CanvasMetrics, PickOptions, pick_screen};
use crate::projection::MarkerSnapshot;
use crate::renderer::{FrameStats, GlobeRenderer};
use crate::selection::{MarkerSelection, Tooltip};
use crate::starfield::Starfield;
use crate::surface::Surface;

#[derive(Debug)]
pub struct Globe {
    renderer: GlobeRenderer,
    selection: MarkerSelection,
    stars: Starfield,
    pick: PickOptions,
}

impl Default for Globe {
    fn default() -> Self {
        Self::new(GlobeConfig::default(), InteractionConfig::default())
    }
}

impl Globe {
    pub fn new(config: GlobeConfig, interaction: InteractionConfig) -> Self {
        let canvas = Vec2::new(config.canvas_size, config.canvas_size);
        Self {
            stars: Starfield::generate(config.star_count, canvas, config.star_seed),
            pick: PickOptions {
                radius_px: interaction.hit_radius_px,
                cull_depth: config.cull_depth,
            },
            renderer: GlobeRenderer::new(config),
            selection: MarkerSelection::new(interaction),
        }
    }

    pub fn renderer(&self) -> &GlobeRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut GlobeRenderer {
        &mut self.renderer
    }

    pub fn selection(&self) -> &MarkerSelection {
        &self.selection
    }

    pub fn markers(&self) -> &[DataCenter] {
        self.renderer.markers()
    }

    pub fn snapshot(&self) -> Arc<MarkerSnapshot> {
        self.renderer.snapshot()
    }

    /// One globe frame; also fires an expired auto-dismiss timer.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, now: Millis, surface: &mut S) -> FrameStats {
        self.selection.poll(now);
        self.renderer.frame(now, surface)
    }

    pub fn render_stars<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.stars.draw(surface);
    }

    pub fn is_dragging(&self) -> bool {
        self.renderer.controller().is_dragging()
    }

    pub fn pointer_down(&mut self, client: Vec2) {
        self.renderer.controller_mut().on_pointer_down(client);
        self.selection.leave();
    }

    pub fn pointer_move(&mut self, client: Vec2) {
        self.renderer.controller_mut().on_pointer_move(client);
    }

    pub fn pointer_up(&mut self) {
        self.renderer.controller_mut().on_pointer_up();
    }

    /// `css` is the pointer offset inside the canvas element; `client` anchors
    /// the tooltip. Ignored while dragging.
    pub fn click(&mut self, css: Vec2, client: Vec2, metrics: CanvasMetrics, now: Millis) -> Option<MarkerId> {
        if self.is_dragging() {
            return self.selection.selected();
        }
        let hit = pick_screen(&self.renderer.snapshot(), css, metrics, self.pick).map(|h| h.id);
        self.selection.click(hit, client, now);
        hit
    }

    pub fn hover(&mut self, css: Vec2, client: Vec2, metrics: CanvasMetrics) -> Option<MarkerId> {
        let hit = if self.is_dragging() {
            None
        } else {
            pick_screen(&self.renderer.snapshot(), css, metrics, self.pick).map(|h| h.id)
        };
        self.selection.hover(hit, client);
        hit
    }

    pub fn leave(&mut self) {
        self.selection.leave();
    }

    pub fn scroll(&mut self) {
        self.selection.scroll();
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.selection.set_viewport_width(width);
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        self.selection.tooltip(self.renderer.markers())
    }

    /// CSS cursor for the canvas.
    pub fn cursor(&self) -> &'static str {
        if self.selection.hovered().is_some() {
            "pointer"
        } else {
            "grab"
        }
    }

    /// Earliest pending auto-dismiss deadline.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.selection.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::Globe;
    use crate::markers::MarkerId;
    use crate::picking::CanvasMetrics;
    use crate::surface::recording::RecordingSurface;
    use foundation::math::Vec2;
    use foundation::time::Millis;
    use pretty_assertions::assert_eq;

    fn native_metrics() -> CanvasMetrics {
        CanvasMetrics::new(Vec2::new(1000.0, 1000.0), Vec2::new(1000.0, 1000.0))
    }

    fn rendered() -> Globe {
        let mut g = Globe::default();
        let mut surface = RecordingSurface::new(1000.0);
        g.render_frame(Millis(0.0), &mut surface);
        g
    }

    fn visible_marker(g: &Globe, id: MarkerId) -> Vec2 {
        g.snapshot()
            .markers
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.screen)
            .expect("marker in snapshot")
    }

    #[test]
    fn click_before_first_frame_hits_nothing() {
        let mut g = Globe::default();
        let hit = g.click(Vec2::new(500.0, 500.0), Vec2::new(0.0, 0.0), native_metrics(), Millis(0.0));
        assert_eq!(hit, None);
    }

    #[test]
    fn clicking_a_marker_selects_it() {
        let mut g = rendered();
        let at = visible_marker(&g, MarkerId("pl"));
        let hit = g.click(at, Vec2::new(40.0, 50.0), native_metrics(), Millis(10.0));
        assert_eq!(hit, Some(MarkerId("pl")));
        let tip = g.tooltip().expect("tooltip");
        assert_eq!(tip.name, "Warsaw");
        assert_eq!(tip.position, Vec2::new(52.0, 62.0));
    }

    #[test]
    fn clicks_during_drag_are_ignored() {
        let mut g = rendered();
        let at = visible_marker(&g, MarkerId("pl"));
        g.pointer_down(Vec2::new(0.0, 0.0));
        assert_eq!(g.click(at, at, native_metrics(), Millis(10.0)), None);
        assert_eq!(g.selection().selected(), None);
        assert_eq!(g.hover(at, at, native_metrics()), None);
        assert_eq!(g.cursor(), "grab");
    }

    #[test]
    fn mobile_selection_dismissed_on_frame() {
        let mut g = rendered();
        g.set_viewport_width(400.0);
        let at = visible_marker(&g, MarkerId("pl"));
        g.click(at, at, native_metrics(), Millis(0.0));
        assert_eq!(g.next_deadline(), Some(Millis(3000.0)));

        let mut surface = RecordingSurface::new(1000.0);
        g.render_frame(Millis(2990.0), &mut surface);
        assert_eq!(g.selection().selected(), Some(MarkerId("pl")));
        g.render_frame(Millis(3005.0), &mut surface);
        assert_eq!(g.selection().selected(), None);
    }

    #[test]
    fn hover_sets_pointer_cursor() {
        let mut g = rendered();
        let at = visible_marker(&g, MarkerId("es"));
        assert!(g.hover(at, at, native_metrics()).is_some());
        assert_eq!(g.cursor(), "pointer");
        g.leave();
        assert_eq!(g.cursor(), "grab");
    }
}
