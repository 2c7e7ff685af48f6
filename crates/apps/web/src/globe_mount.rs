//! Globe and star canvases driven by `requestAnimationFrame` and pointer,
//! mouse, scroll and resize listeners.

use std::cell::RefCell;
use std::rc::Rc;

use foundation::math::Vec2;
use foundation::time::Millis;
use globe::picking::CanvasMetrics;
use globe::{Globe, GlobeConfig, InteractionConfig};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, MouseEvent, PointerEvent};

use crate::canvas::CanvasSurface;
use crate::schedule::{AnimationFrame, Listener, now_ms};

struct GlobeState {
    globe: Globe,
    surface: CanvasSurface,
    stars: Option<CanvasSurface>,
    tooltip: Option<HtmlElement>,
}

impl GlobeState {
    fn metrics(&self) -> (CanvasMetrics, Vec2) {
        let canvas = self.surface.canvas();
        let rect = canvas.get_bounding_client_rect();
        let metrics = CanvasMetrics::new(
            Vec2::new(canvas.width() as f64, canvas.height() as f64),
            Vec2::new(rect.width(), rect.height()),
        );
        (metrics, Vec2::new(rect.left(), rect.top()))
    }

    /// Local CSS offset and client position of a mouse event.
    fn locate(&self, ev: &MouseEvent) -> (Vec2, Vec2, CanvasMetrics) {
        let client = Vec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let (metrics, origin) = self.metrics();
        (client - origin, client, metrics)
    }

    fn sync_overlay(&self) {
        let style = self.surface.canvas().style();
        let _ = style.set_property("cursor", self.globe.cursor());

        let Some(tooltip) = &self.tooltip else {
            return;
        };
        let style = tooltip.style();
        match self.globe.tooltip() {
            Some(tip) => {
                tooltip.set_text_content(Some(&format!("{}, {}", tip.name, tip.country)));
                let _ = tooltip.set_attribute("data-marker", tip.id.as_str());
                let _ = style.set_property("left", &format!("{}px", tip.position.x));
                let _ = style.set_property("top", &format!("{}px", tip.position.y));
                let _ = style.set_property("display", "block");
            }
            None => {
                let _ = style.set_property("display", "none");
            }
        }
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// Live globe wiring; `unmount` (or drop) cancels the loop and listeners.
pub struct GlobeMount {
    frame: AnimationFrame,
    listeners: Vec<Listener>,
    state: Rc<RefCell<GlobeState>>,
}

impl GlobeMount {
    /// Returns `None` when the canvas or its 2D context is missing.
    pub fn mount(
        canvas_id: &str,
        stars_canvas_id: Option<&str>,
        tooltip_id: Option<&str>,
        config: GlobeConfig,
        interaction: InteractionConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(surface) = CanvasSurface::by_id(canvas_id, config.canvas_size) else {
            debug!(canvas_id, "globe canvas or 2d context unavailable; not mounting");
            return Ok(None);
        };
        let stars = stars_canvas_id.and_then(|id| CanvasSurface::by_id(id, config.canvas_size));
        let tooltip = tooltip_id
            .and_then(|id| web_sys::window()?.document()?.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let mut globe = Globe::new(config, interaction);
        globe.set_viewport_width(viewport_width());
        let state = Rc::new(RefCell::new(GlobeState {
            globe,
            surface,
            stars,
            tooltip,
        }));

        let frame = AnimationFrame::new();
        {
            let state = state.clone();
            let again = frame.clone();
            frame.set_callback(move |ts| {
                {
                    let mut guard = state.borrow_mut();
                    let st = &mut *guard;
                    st.globe.render_frame(Millis(ts), &mut st.surface);
                    if let Some(stars) = st.stars.as_mut() {
                        st.globe.render_stars(stars);
                    }
                    st.sync_overlay();
                }
                again.request();
            });
        }

        let canvas = state.borrow().surface.canvas().clone();
        let canvas_target: &web_sys::EventTarget = canvas.as_ref();
        let mut listeners = Vec::new();

        {
            let state = state.clone();
            let canvas = canvas.clone();
            listeners.push(Listener::new(canvas_target, "pointerdown", move |ev: Event| {
                let Some(ev) = ev.dyn_ref::<PointerEvent>() else {
                    return;
                };
                let _ = canvas.set_pointer_capture(ev.pointer_id());
                let client = Vec2::new(ev.client_x() as f64, ev.client_y() as f64);
                let mut st = state.borrow_mut();
                st.globe.pointer_down(client);
                st.sync_overlay();
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::new(canvas_target, "pointermove", move |ev: Event| {
                if let Some(ev) = ev.dyn_ref::<PointerEvent>() {
                    let client = Vec2::new(ev.client_x() as f64, ev.client_y() as f64);
                    state.borrow_mut().globe.pointer_move(client);
                }
            })?);
        }
        for event in ["pointerup", "pointercancel"] {
            let state = state.clone();
            let canvas = canvas.clone();
            listeners.push(Listener::new(canvas_target, event, move |ev: Event| {
                if let Some(ev) = ev.dyn_ref::<PointerEvent>() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                state.borrow_mut().globe.pointer_up();
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::new(canvas_target, "mousemove", move |ev: Event| {
                let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let mut st = state.borrow_mut();
                let (css, client, metrics) = st.locate(ev);
                st.globe.hover(css, client, metrics);
                st.sync_overlay();
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::new(canvas_target, "mouseleave", move |_ev: Event| {
                let mut st = state.borrow_mut();
                st.globe.leave();
                st.sync_overlay();
            })?);
        }
        {
            let state = state.clone();
            listeners.push(Listener::new(canvas_target, "click", move |ev: Event| {
                let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let mut st = state.borrow_mut();
                let (css, client, metrics) = st.locate(ev);
                st.globe.click(css, client, metrics, Millis(now_ms()));
                st.sync_overlay();
            })?);
        }

        if let Some(window) = web_sys::window() {
            let window_target: &web_sys::EventTarget = window.as_ref();
            {
                let state = state.clone();
                listeners.push(Listener::new(window_target, "scroll", move |_ev: Event| {
                    let mut st = state.borrow_mut();
                    st.globe.scroll();
                    st.sync_overlay();
                })?);
            }
            {
                let state = state.clone();
                listeners.push(Listener::new(window_target, "resize", move |_ev: Event| {
                    state.borrow_mut().globe.set_viewport_width(viewport_width());
                })?);
            }
        }

        frame.request();
        debug!(canvas_id, stars = stars_canvas_id.is_some(), "globe mounted");
        Ok(Some(Self {
            frame,
            listeners,
            state,
        }))
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.state.borrow().globe.selection().selected().map(|id| id.as_str())
    }

    pub fn unmount(&mut self) {
        self.frame.clear();
        self.listeners.clear();
    }
}

impl Drop for GlobeMount {
    fn drop(&mut self) {
        self.unmount();
    }
}
