use std::sync::Arc;

use foundation::math::Vec2;
use foundation::time::Millis;
use runtime::{Frame, FrameClock};

use crate::cloud::{SurfacePoint, generate_point_cloud};
use crate::config::GlobeConfig;
use crate::controller::GlobeController;
use crate::markers::{DataCenter, data_centers};
use crate::projection::{MarkerSnapshot, ProjectedPoint, project_markers, project_points_into};
use crate::render::{draw_markers, draw_points};
use crate::surface::Surface;

/// Counts from one rendered frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub points_drawn: usize,
    pub markers_drawn: usize,
}

/// Owns the static geometry and runs the per-frame pipeline.
#[derive(Debug)]
pub struct GlobeRenderer {
    config: GlobeConfig,
    points: Vec<SurfacePoint>,
    markers: Vec<DataCenter>,
    controller: GlobeController,
    clock: FrameClock,
    snapshot: Arc<MarkerSnapshot>,
    scratch: Vec<ProjectedPoint>,
}

impl GlobeRenderer {
    pub fn new(config: GlobeConfig) -> Self {
        let points = generate_point_cloud(config.sample_count, config.radius);
        let markers = data_centers(config.radius);
        tracing::debug!(points = points.len(), markers = markers.len(), "globe geometry built");
        Self {
            controller: GlobeController::new(config.motion),
            scratch: Vec::with_capacity(points.len()),
            config,
            points,
            markers,
            clock: FrameClock::new(),
            snapshot: MarkerSnapshot::empty(),
        }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    pub fn markers(&self) -> &[DataCenter] {
        &self.markers
    }

    pub fn controller(&self) -> &GlobeController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut GlobeController {
        &mut self.controller
    }

    /// Markers as placed by the most recent frame.
    pub fn snapshot(&self) -> Arc<MarkerSnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Advances motion by one frame and draws it.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: Millis, surface: &mut S) -> FrameStats {
        let frame = self.clock.tick(now);
        self.controller.update(frame.dt_s);
        self.draw(frame, surface)
    }

    /// Draws the current orientation without advancing motion.
    pub fn draw_still<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        let frame = Frame::first(Millis::ZERO);
        self.draw(frame, surface)
    }

    fn draw<S: Surface + ?Sized>(&mut self, frame: Frame, surface: &mut S) -> FrameStats {
        let size = surface.size();
        let center = Vec2::new(size.x * 0.5, size.y * 0.5);
        let rotation = self.controller.angles();

        surface.clear();
        project_points_into(&self.points, &rotation, &mut self.scratch);
        let points_drawn = draw_points(surface, &self.scratch, center, &self.config);

        let markers = project_markers(&self.markers, &rotation, center);
        let markers_drawn = draw_markers(surface, &markers, center, &self.config);

        self.snapshot = Arc::new(MarkerSnapshot {
            frame_index: frame.index,
            markers,
        });

        FrameStats {
            points_drawn,
            markers_drawn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GlobeRenderer;
    use crate::config::GlobeConfig;
    use crate::surface::recording::{DrawOp, RecordingSurface};
    use foundation::time::Millis;
    use std::sync::Arc;

    #[test]
    fn frame_publishes_a_fresh_snapshot() {
        let mut r = GlobeRenderer::new(GlobeConfig::default());
        assert!(r.snapshot().is_empty());

        let mut surface = RecordingSurface::new(1000.0);
        let stats = r.frame(Millis(0.0), &mut surface);
        let first = r.snapshot();
        assert_eq!(first.markers.len(), 12);
        assert!(stats.points_drawn > 0);
        assert_eq!(surface.ops[0], DrawOp::Clear);

        r.frame(Millis(16.0), &mut surface);
        let second = r.snapshot();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.frame_index, first.frame_index + 1);
        // The old snapshot is untouched by the new frame.
        assert_eq!(first.frame_index, 0);
    }

    #[test]
    fn idle_frames_rotate_the_globe() {
        let mut r = GlobeRenderer::new(GlobeConfig::default());
        let mut surface = RecordingSurface::new(1000.0);
        let mut t = 0.0;
        let mut last = r.controller().angles().y_rad;
        for _ in 0..30 {
            r.frame(Millis(t), &mut surface);
            t += 16.0;
            let y = r.controller().angles().y_rad;
            assert!(y >= last);
            last = y;
        }
        assert!(last > 0.0);
    }
}
