//! Theme observer wired to the page: root-element sink plus
//! `IntersectionObserver` reports for `[data-theme-trigger="light"]`.

use std::cell::RefCell;
use std::rc::Rc;

use foundation::time::Millis;
use theme::{IntersectionSample, SectionId, ThemeConfig, ThemeObserver, ThemeSink};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node};

use crate::schedule::{AnimationFrame, Timeout, now_ms};

pub const TRIGGER_SELECTOR: &str = "[data-theme-trigger=\"light\"]";
pub const ROOT_MARGIN: &str = "-40% 0px -40% 0px";
pub const THRESHOLDS: [f64; 8] = [0.0, 0.15, 0.3, 0.45, 0.58, 0.68, 0.8, 1.0];

const LIGHT_CLASS: &str = "global-light-mode";
const ANIM_CLASS: &str = "theme-anim";

/// Writes the theme onto `<html>`.
pub struct DomThemeSink {
    root: Option<Element>,
}

impl DomThemeSink {
    pub fn for_document() -> Self {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        Self { root }
    }
}

impl ThemeSink for DomThemeSink {
    fn set_theme(&mut self, is_light: bool) {
        let Some(root) = &self.root else {
            return;
        };
        let _ = root.class_list().toggle_with_force(LIGHT_CLASS, is_light);
        let _ = root.set_attribute("data-theme", if is_light { "light" } else { "dark" });
    }

    fn set_animating(&mut self, animating: bool) {
        if let Some(root) = &self.root {
            let _ = root.class_list().toggle_with_force(ANIM_CLASS, animating);
        }
    }
}

struct ThemeState {
    observer: Option<ThemeObserver<DomThemeSink>>,
    targets: Vec<Element>,
}

impl ThemeState {
    fn section_of(&self, el: &Element) -> Option<SectionId> {
        let node: &Node = el;
        self.targets
            .iter()
            .position(|t| t.is_same_node(Some(node)))
            .map(|i| SectionId(i as u32))
    }
}

/// Live theme wiring; `unmount` (or drop) stops everything and resets to dark.
pub struct ThemeMount {
    state: Rc<RefCell<ThemeState>>,
    io: Option<IntersectionObserver>,
    io_callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    frame: AnimationFrame,
    timer: Timeout,
}

fn has_intersection_observer() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn find_targets() -> Vec<Element> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(TRIGGER_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn arm_timer(state: &Rc<RefCell<ThemeState>>, timer: &Timeout) {
    let deadline = state.borrow().observer.as_ref().and_then(|o| o.next_deadline());
    match deadline {
        Some(d) => timer.arm(d.0 - now_ms()),
        None => timer.cancel(),
    }
}

impl ThemeMount {
    /// Returns `None` when the page has no observation primitive; the
    /// theme then simply stays dark.
    pub fn mount(config: ThemeConfig) -> Result<Option<Self>, JsValue> {
        if !has_intersection_observer() {
            debug!("IntersectionObserver unavailable; theme stays dark");
            return Ok(None);
        }
        let targets = find_targets();
        let ids = (0..targets.len() as u32).map(SectionId);
        let mut observer = ThemeObserver::new(ids, config, DomThemeSink::for_document());
        observer.set_viewport_height(viewport_height());
        let active = observer.is_active();

        let state = Rc::new(RefCell::new(ThemeState {
            observer: Some(observer),
            targets,
        }));
        let frame = AnimationFrame::new();
        let timer = Timeout::new();

        {
            let state = state.clone();
            let timer_for_frame = timer.clone();
            frame.set_callback(move |ts| {
                if let Some(obs) = state.borrow_mut().observer.as_mut() {
                    obs.on_frame(Millis(ts));
                }
                arm_timer(&state, &timer_for_frame);
            });
        }
        {
            let state = state.clone();
            let this = timer.clone();
            timer.set_callback(move || {
                if let Some(obs) = state.borrow_mut().observer.as_mut() {
                    obs.poll_timers(Millis(now_ms()));
                }
                arm_timer(&state, &this);
            });
        }

        let mut mount = Self {
            state,
            io: None,
            io_callback: None,
            frame,
            timer,
        };
        if !active {
            return Ok(Some(mount));
        }

        let callback = {
            let state = mount.state.clone();
            let frame = mount.frame.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, _io: IntersectionObserver| {
                let mut st = state.borrow_mut();
                let samples: Vec<IntersectionSample> = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let target = st.section_of(&entry.target())?;
                        Some(IntersectionSample {
                            target,
                            intersection_ratio: entry.intersection_ratio(),
                            intersection_height: entry.intersection_rect().height(),
                            root_height: entry.root_bounds().map(|r| r.height()),
                        })
                    })
                    .collect();
                let Some(obs) = st.observer.as_mut() else {
                    return;
                };
                obs.set_viewport_height(viewport_height());
                let wants_frame = obs.observe(&samples);
                drop(st);
                if wants_frame {
                    frame.request();
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_root_margin(ROOT_MARGIN);
        let thresholds: js_sys::Array = THRESHOLDS.iter().map(|t| JsValue::from_f64(*t)).collect();
        init.set_threshold(&thresholds);
        let io = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for el in &mount.state.borrow().targets {
            io.observe(el);
        }
        mount.io = Some(io);
        mount.io_callback = Some(callback);

        if mount.state.borrow().observer.as_ref().is_some_and(|o| o.needs_frame()) {
            mount.frame.request();
        }
        debug!(sections = mount.state.borrow().targets.len(), "theme observer wired");
        Ok(Some(mount))
    }

    pub fn is_light(&self) -> bool {
        self.state
            .borrow()
            .observer
            .as_ref()
            .is_some_and(|o| o.is_light())
    }

    pub fn unmount(&mut self) {
        if let Some(io) = self.io.take() {
            io.disconnect();
        }
        self.io_callback = None;
        self.frame.clear();
        self.timer.clear();
        let observer = self.state.borrow_mut().observer.take();
        if let Some(observer) = observer {
            observer.teardown();
        }
        self.state.borrow_mut().targets.clear();
    }
}

impl Drop for ThemeMount {
    fn drop(&mut self) {
        self.unmount();
    }
}
