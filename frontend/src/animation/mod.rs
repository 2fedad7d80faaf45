//! Timer and frame driven text effects, independent of any view layer.

pub mod count_up;
pub mod driver;
pub mod error;
#[cfg(test)]
pub mod manual;
pub mod scheduler;
pub mod typewriter;

pub use count_up::CountUpConfig;
pub use driver::{CountUpDriver, TypewriterDriver};
pub use scheduler::BrowserScheduler;
pub use typewriter::{CursorBlink, Frame, TypewriterConfig};
