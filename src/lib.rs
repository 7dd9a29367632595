//! # Introduction
//!
//! sortty runs a sorting algorithm one micro-step at a time, recording an
//! annotated snapshot of the array at every comparison and swap. The snapshot
//! sequence is produced lazily and navigated forward and backward through a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! ArraySource → Sort Engine → StepEngine → History → Playback / keys → TUI
//! ```
//!
//! 1. [`input`] — where arrays come from (random or user supplied).
//! 2. [`algorithms`] — bubble, selection, cycle and heap sort written as
//!    resumable state machines yielding [`snapshot::Snapshot`]s, plus the
//!    [`algorithms::AlgorithmRegistry`] of static metadata.
//! 3. [`history`] — pulls snapshots on demand and buffers them so stepping
//!    back is O(1) and stepping forward again replays instead of recomputing.
//! 4. [`playback`] — single-slot auto-play timer.
//! 5. [`session`] — ties the above together for the UI.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Snapshot tags
//!
//! Elements carry a semantic [`snapshot::Tag`] (comparing, swapping, tracked,
//! finalized) rather than a color; the UI theme maps tags to colors.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod history;
pub mod input;
pub mod playback;
pub mod session;
pub mod snapshot;
pub mod ui;
