pub mod cloud;
pub mod config;
pub mod controller;
pub mod globe;
pub mod land;
pub mod markers;
pub mod picking;
pub mod projection;
pub mod render;
pub mod renderer;
pub mod selection;
pub mod spring;
pub mod starfield;
pub mod surface;

pub use config::*;
pub use globe::Globe;
pub use markers::{DataCenter, MarkerId};
pub use surface::{Rgba, Surface};
pub use picking::CanvasMetrics;
pub use renderer::{FrameStats, GlobeRenderer};
pub use selection::Tooltip;
