//! Terminal backend.
//!
//! Maps the view's abstract surface onto a framebuffer of styled character
//! cells (one surface pixel = one cell), flushes it to a real terminal with
//! crossterm, and translates terminal key events into the controller's
//! platform-neutral input events.

pub mod fb;
pub mod keymap;
pub mod renderer;

pub use fb::{Cell, FrameBuffer, Style};
pub use keymap::{map_key_event, should_quit, ReleaseWatchdog};
pub use renderer::TerminalRenderer;
