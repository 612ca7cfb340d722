//! Step result returned by routine ticks.

/// The result of ticking a routine for one frame.
///
/// # Frame-based Semantics
///
/// Unlike turn-based behavior nodes, a routine spans multiple frames:
/// - `Running` means the routine suspended and wants another tick next frame
/// - `Complete` means the routine finished and must not be ticked again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// The routine has more work to do on a later frame.
    Running,

    /// The routine ran to completion (or decided there is nothing to do).
    Complete,
}

impl Step {
    /// Returns `true` if this step is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Step::Running)
    }

    /// Returns `true` if this step is `Complete`.
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, Step::Complete)
    }
}
