//! # simplex-core
//!
//! A two-phase revised simplex solver for linear programs in the form
//! `maximize cᵀx subject to Ax <= b, x >= 0`.
//!
//! ```rust
//! let (status, x) = simplex_core::solve(
//!     &[1.0, 2.0],
//!     &[vec![1.0, 1.0, 4.0], vec![0.0, 1.0, 2.0]],
//! );
//! assert_eq!(status, simplex_core::Status::Single);
//! println!("{:?}", x);
//! ```
//!
//! The solver runs Phase I to find a feasible dictionary (or prove the
//! problem infeasible), then Phase II to optimize it, both driven by Bland's
//! rule so that neither phase can cycle.

mod basis;
mod config;
mod dictionary;
mod driver;
mod math;
mod phase1;
mod simplex;
mod status;
mod tableau;

pub use config::SolverConfig;
pub use driver::{solve, solve_with_config};
pub use status::Status;
