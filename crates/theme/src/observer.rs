use foundation::time::Millis;
use runtime::frame_request::FrameRequest;
use runtime::timers::TimerQueue;
use tracing::{debug, warn};

use crate::config::ThemeConfig;
use crate::hysteresis::{ThemeMode, next_mode};
use crate::ledger::{IntersectionSample, SectionId, VisibilityLedger, effective_visibility};
use crate::sink::ThemeSink;

/// Derives the page theme from section visibility.
///
/// Lifecycle:
/// - `new` registers the sections to watch (none ⇒ inert, permanently dark).
/// - The host forwards intersection reports to `observe` and, when it returns
///   `true`, schedules one animation frame that calls `on_frame`.
/// - The host arms a timer for `next_deadline` and calls `poll_timers`.
/// - `teardown` resets the sink to dark and hands it back.
#[derive(Debug)]
pub struct ThemeObserver<S: ThemeSink> {
    config: ThemeConfig,
    sink: S,
    ledger: VisibilityLedger,
    mode: ThemeMode,
    active: bool,
    animating: bool,
    viewport_height: f64,
    recompute: FrameRequest,
    windows: TimerQueue<()>,
}

impl<S: ThemeSink> ThemeObserver<S> {
    pub fn new(
        targets: impl IntoIterator<Item = SectionId>,
        config: ThemeConfig,
        mut sink: S,
    ) -> Self {
        let ledger = VisibilityLedger::with_targets(targets);
        let active = !ledger.is_empty();
        let mut recompute = FrameRequest::new();
        if active {
            recompute.request();
        } else {
            sink.set_theme(false);
        }
        debug!(sections = ledger.len(), active, "theme observer mounted");

        Self {
            config,
            sink,
            ledger,
            mode: ThemeMode::Dark,
            active,
            animating: false,
            viewport_height: 0.0,
            recompute,
            windows: TimerQueue::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_light(&self) -> bool {
        self.mode.is_light()
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn ledger(&self) -> &VisibilityLedger {
        &self.ledger
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether a recomputation is waiting for the next frame.
    pub fn needs_frame(&self) -> bool {
        self.recompute.is_pending()
    }

    /// Fallback root height for reports that carry none.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    /// Records a batch of intersection reports.
    ///
    /// Returns `true` when the caller must schedule an animation frame; any
    /// further batches before that frame are coalesced into it.
    pub fn observe(&mut self, samples: &[IntersectionSample]) -> bool {
        if !self.active {
            return false;
        }
        for sample in samples {
            let ratio = effective_visibility(sample, self.viewport_height);
            if !self.ledger.record(sample.target, ratio) {
                warn!(section = sample.target.0, "ignoring report for unobserved section");
            }
        }
        self.recompute.request()
    }

    /// Runs the pending recomputation, if any.
    ///
    /// Returns the new mode when the theme flipped.
    pub fn on_frame(&mut self, now: Millis) -> Option<ThemeMode> {
        if !self.recompute.take() {
            return None;
        }
        let max_ratio = self.ledger.max_ratio();
        let next = next_mode(self.mode, max_ratio, &self.config);
        if next == self.mode {
            return None;
        }

        self.mode = next;
        self.animating = true;
        self.sink.set_animating(true);
        self.windows
            .schedule(now + Millis(self.config.animation_window_ms), ());
        self.sink.set_theme(next.is_light());
        debug!(max_ratio, theme = next.as_str(), "theme flipped");
        Some(next)
    }

    /// Closes every transition window that has expired by `now`.
    pub fn poll_timers(&mut self, now: Millis) {
        for () in self.windows.drain_due(now) {
            self.animating = false;
            self.sink.set_animating(false);
        }
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.windows.next_deadline()
    }

    /// Stops all pending work and restores the dark baseline.
    pub fn teardown(mut self) -> S {
        self.recompute.cancel();
        self.windows.clear();
        self.ledger.clear();
        self.active = false;
        self.animating = false;
        self.mode = ThemeMode::Dark;
        self.sink.set_animating(false);
        self.sink.set_theme(false);
        debug!("theme observer torn down");
        self.sink
    }
}
