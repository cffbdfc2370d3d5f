//! Blockfall (workspace facade crate).
//!
//! This package keeps a stable `blockfall::{types,game,view,control,term}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use blockfall_control as control;
pub use blockfall_game as game;
pub use blockfall_term as term;
pub use blockfall_types as types;
pub use blockfall_view as view;
