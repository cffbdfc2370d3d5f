//! View: maps an engine snapshot onto an abstract drawing surface.
//!
//! This crate is pure (no I/O). Layout metrics are computed once at
//! construction; every render call is a self-contained projection of its
//! input, which makes the whole crate unit-testable against a scripted
//! surface.

pub mod layout;
pub mod surface;
mod view;

pub use layout::Layout;
pub use surface::{FontSize, Rgb, Surface, TextAlign};
pub use view::View;
