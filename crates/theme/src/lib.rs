//! Scroll-driven light/dark theme switching.
//!
//! Sections report how much of the viewport they occupy; the observer folds
//! those reports into a single light/dark flag with hysteresis and publishes
//! it through a [`ThemeSink`].

pub mod config;
pub mod hysteresis;
pub mod ledger;
pub mod observer;
pub mod sink;

pub use config::ThemeConfig;
pub use hysteresis::{ThemeMode, next_mode};
pub use ledger::{IntersectionSample, SectionId, VisibilityLedger, effective_visibility};
pub use observer::ThemeObserver;
pub use sink::{RecordingThemeSink, SinkEvent, ThemeSink};
