//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - let callers reserve a paint position now and fill it in later
//! - keep shape-specific helpers isolated per file under `scene::shapes`

mod cmd;
mod key;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList, Slot};
pub use shapes::{FillPathCmd, StrokePathCmd};
