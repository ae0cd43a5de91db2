/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; request another redraw.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate.
    Fatal,
}

impl SurfaceErrorAction {
    /// Whether the runtime should schedule another redraw to recover.
    #[inline]
    pub fn wants_redraw(self) -> bool {
        matches!(self, SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame)
    }
}
