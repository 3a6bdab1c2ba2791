use core::fmt;
use std::fmt::Display;

use serde::Serialize;

/// Outcome of a [`crate::solve`] call, using the fixed integer encoding of
/// the underlying algorithm rather than a library-defined ordering.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[repr(i32)]
pub enum Status {
    /// Unique optimum; the solution vector is returned alongside this status.
    Single = 0,
    /// The optimum is attained on a face of the feasible region; any vertex
    /// of that face is returned.
    Multi = 1,
    /// The feasible region is empty.
    Infeasible = -1,
    /// The objective grows without bound in the feasible region.
    Unbounded = -2,
}

impl Status {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Single => "single optimum",
            Status::Multi => "multiple optima",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
        };
        f.write_str(s)
    }
}

/// Internal control-flow signal between the phase code and the driver.
///
/// A small, exhaustively matched error enum passed between the pivot loop
/// and its callers instead of a string: this type never reaches a caller of
/// [`crate::solve`], it is converted into a [`Status`] before returning.
#[derive(Debug)]
pub(crate) enum PhaseError {
    Unbounded,
    Infeasible,
}

impl Display for PhaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PhaseError::Unbounded => "Unbounded Problem",
            PhaseError::Infeasible => "Infeasible Problem",
        };
        f.write_str(s)
    }
}
