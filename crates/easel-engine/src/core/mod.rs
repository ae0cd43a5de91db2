//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the layers
//! above it (studio binary, turtle drawings) and the per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
