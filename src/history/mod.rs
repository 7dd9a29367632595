//! Snapshot navigation
//!
//! - [`stepper`]: [`StepEngine`], the pull-based adapter over a sort engine
//! - [`controller`]: [`History`], O(1) step back and replay-on-forward
//!
//! Stepping back never re-runs the algorithm; stepping forward replays a
//! buffered snapshot before asking the engine for a new one.

pub mod controller;
pub mod stepper;

pub use controller::History;
pub use stepper::StepEngine;
