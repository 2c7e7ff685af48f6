pub mod frame;
pub mod frame_request;
pub mod timers;

pub use frame::*;
pub use frame_request::*;
pub use timers::*;
