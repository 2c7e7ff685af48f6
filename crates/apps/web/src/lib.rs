//! Browser entry points for the site's theme observer, globe and forms.
//!
//! JS calls `init_site` once with the optional config JSON, then mounts the
//! pieces it needs. Each mount returns a handle whose `unmount` stops all
//! scheduled work.

use std::cell::RefCell;
use std::sync::OnceLock;

use forms::{ContactForm, DemoBooking};
use site_config::SiteConfig;
use tracing::info;
use wasm_bindgen::prelude::*;

mod canvas;
mod dom_theme;
mod forms_glue;
mod globe_mount;
mod logging;
mod schedule;

use dom_theme::ThemeMount;
use forms_glue::SubmitReport;
use globe_mount::GlobeMount;

static LOGGING: OnceLock<()> = OnceLock::new();

thread_local! {
    static CONFIG: RefCell<SiteConfig> = RefCell::new(SiteConfig::default());
}

/// Returns the default on thread-local teardown instead of panicking.
fn config() -> SiteConfig {
    CONFIG.try_with(|c| c.borrow().clone()).unwrap_or_default()
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Loads site configuration and installs console logging. `None` or an
/// empty string keeps the defaults. Only the first call picks the log level.
#[wasm_bindgen]
pub fn init_site(config_json: Option<String>, log_level: Option<String>) -> Result<(), JsValue> {
    LOGGING.get_or_init(|| {
        let level = log_level.as_deref().map_or(tracing::Level::INFO, logging::parse_level);
        logging::init(level);
    });
    let cfg = SiteConfig::from_json_str(config_json.as_deref().unwrap_or("")).map_err(js_err)?;
    info!(
        forms_configured = cfg.forms.is_configured(),
        "site config loaded"
    );
    let _ = CONFIG.try_with(|c| *c.borrow_mut() = cfg);
    Ok(())
}

#[wasm_bindgen]
pub struct ThemeHandle {
    mount: Option<ThemeMount>,
}

#[wasm_bindgen]
impl ThemeHandle {
    /// `false` when the observer never activated.
    pub fn is_active(&self) -> bool {
        self.mount.is_some()
    }

    pub fn is_light(&self) -> bool {
        self.mount.as_ref().is_some_and(|m| m.is_light())
    }

    pub fn unmount(&mut self) {
        if let Some(mut mount) = self.mount.take() {
            mount.unmount();
        }
    }
}

/// Starts watching `[data-theme-trigger="light"]` sections.
#[wasm_bindgen]
pub fn mount_theme_observer() -> Result<ThemeHandle, JsValue> {
    let mount = ThemeMount::mount(config().theme)?;
    Ok(ThemeHandle { mount })
}

#[wasm_bindgen]
pub struct GlobeHandle {
    mount: Option<GlobeMount>,
}

#[wasm_bindgen]
impl GlobeHandle {
    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    pub fn selected(&self) -> Option<String> {
        self.mount.as_ref()?.selected().map(str::to_string)
    }

    pub fn unmount(&mut self) {
        if let Some(mut mount) = self.mount.take() {
            mount.unmount();
        }
    }
}

/// Mounts the globe on `canvas_id`. A missing canvas or 2D context yields
/// an unmounted handle rather than an error.
#[wasm_bindgen]
pub fn mount_globe(
    canvas_id: &str,
    stars_canvas_id: Option<String>,
    tooltip_id: Option<String>,
) -> Result<GlobeHandle, JsValue> {
    let cfg = config();
    let mount = GlobeMount::mount(
        canvas_id,
        stars_canvas_id.as_deref(),
        tooltip_id.as_deref(),
        cfg.globe,
        cfg.interaction,
    )?;
    Ok(GlobeHandle { mount })
}

/// Validates contact form JSON; returns a field → message JSON map
/// (empty when valid).
#[wasm_bindgen]
pub fn validate_contact(form_json: &str) -> Result<String, JsValue> {
    let form: ContactForm = serde_json::from_str(form_json).map_err(js_err)?;
    let errors = form.validate().err().unwrap_or_default();
    serde_json::to_string(&errors).map_err(js_err)
}

#[wasm_bindgen]
pub fn validate_booking(form_json: &str) -> Result<String, JsValue> {
    let form: DemoBooking = serde_json::from_str(form_json).map_err(js_err)?;
    let errors = form.validate().err().unwrap_or_default();
    serde_json::to_string(&errors).map_err(js_err)
}

/// Validates and posts the contact form. Resolves to a JSON report with
/// either `errors` or a `status` banner.
#[wasm_bindgen]
pub async fn submit_contact(form_json: String) -> Result<String, JsValue> {
    let form: ContactForm = serde_json::from_str(&form_json).map_err(js_err)?;
    let report = match form.validate() {
        Ok(submission) => forms_glue::send_contact(&config().forms, &submission).await,
        Err(errors) => SubmitReport::invalid(errors),
    };
    serde_json::to_string(&report).map_err(js_err)
}

#[wasm_bindgen]
pub async fn submit_booking(form_json: String) -> Result<String, JsValue> {
    let form: DemoBooking = serde_json::from_str(&form_json).map_err(js_err)?;
    let report = match form.validate() {
        Ok(submission) => forms_glue::send_booking(&config().forms, &submission).await,
        Err(errors) => SubmitReport::invalid(errors),
    };
    serde_json::to_string(&report).map_err(js_err)
}
