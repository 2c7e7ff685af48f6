//! Click selection and hover state, with auto-dismiss on small viewports.

use foundation::math::Vec2;
use foundation::time::Millis;
use runtime::{TimerId, TimerQueue};
use tracing::debug;

use crate::config::InteractionConfig;
use crate::markers::{DataCenter, MarkerId, find};

/// What the tooltip should show, in client (CSS) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub id: MarkerId,
    pub name: &'static str,
    pub country: &'static str,
    pub position: Vec2,
}

#[derive(Debug, Clone)]
pub struct MarkerSelection {
    config: InteractionConfig,
    selected: Option<MarkerId>,
    hovered: Option<MarkerId>,
    /// Client position of the last click or hover.
    anchor: Vec2,
    viewport_width: f64,
    dismiss: TimerQueue<()>,
    armed: Option<TimerId>,
}

impl Default for MarkerSelection {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

impl MarkerSelection {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            selected: None,
            hovered: None,
            anchor: Vec2::default(),
            viewport_width: f64::INFINITY,
            dismiss: TimerQueue::new(),
            armed: None,
        }
    }

    pub fn selected(&self) -> Option<MarkerId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<MarkerId> {
        self.hovered
    }

    /// Selected marker if any, else the hovered one.
    pub fn shown(&self) -> Option<MarkerId> {
        self.selected.or(self.hovered)
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.config.mobile_breakpoint_px
    }

    pub fn is_dismiss_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.dismiss.next_deadline()
    }

    /// A click hit selects; a miss clears. A new selection on a small
    /// viewport replaces any pending dismiss timer.
    pub fn click(&mut self, hit: Option<MarkerId>, client: Vec2, now: Millis) {
        self.disarm();
        self.selected = hit;
        if let Some(id) = hit {
            self.anchor = client;
            if self.is_mobile() {
                let deadline = now + Millis(self.config.auto_dismiss_ms);
                self.armed = Some(self.dismiss.schedule(deadline, ()));
            }
            debug!(marker = %id, mobile = self.is_mobile(), "marker selected");
        } else {
            debug!("selection cleared");
        }
    }

    pub fn hover(&mut self, hit: Option<MarkerId>, client: Vec2) {
        if hit.is_some() && self.selected.is_none() {
            self.anchor = client;
        }
        self.hovered = hit;
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Scroll dismisses a selection only while its dismiss timer is pending.
    pub fn scroll(&mut self) {
        if self.armed.is_some() {
            self.disarm();
            self.selected = None;
            debug!("selection dismissed by scroll");
        }
    }

    /// Fires an expired dismiss timer. Returns `true` if the selection changed.
    pub fn poll(&mut self, now: Millis) -> bool {
        if self.dismiss.drain_due(now).is_empty() {
            return false;
        }
        self.armed = None;
        let changed = self.selected.take().is_some();
        if changed {
            debug!("selection auto-dismissed");
        }
        changed
    }

    pub fn tooltip(&self, markers: &[DataCenter]) -> Option<Tooltip> {
        let m = find(markers, self.shown()?)?;
        let offset = self.config.tooltip_offset_px;
        Some(Tooltip {
            id: m.id,
            name: m.name,
            country: m.country,
            position: self.anchor + Vec2::new(offset, offset),
        })
    }

    pub fn clear(&mut self) {
        self.disarm();
        self.selected = None;
        self.hovered = None;
    }

    fn disarm(&mut self) {
        if let Some(id) = self.armed.take() {
            self.dismiss.cancel(id);
        }
    }
}
