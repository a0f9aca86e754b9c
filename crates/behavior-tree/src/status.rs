//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Tick Semantics
///
/// A tick runs to completion before returning. Work that spans several ticks
/// is expressed by returning [`Status::Running`] and being evaluated again on
/// a later tick; nothing else is suspended between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished without errors.
    Success,

    /// The behavior failed.
    ///
    /// This is an ordinary outcome, not an error. Construction faults are
    /// reported through [`TreeError`](crate::TreeError) instead.
    Failure,

    /// The behavior has not finished yet and wants to be evaluated again on a
    /// later tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `Running` is returned unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}
