//! A visualization session: the one object the UI drives
//!
//! Ties together the algorithm registry, the array source, the navigation
//! history and the playback timer. Manual navigation always cancels playback
//! so the timer and the user never race to step the same history.

use crate::algorithms::{Algorithm, AlgorithmInfo, AlgorithmRegistry};
use crate::errors::NavigationError;
use crate::history::History;
use crate::input::ArraySource;
use crate::playback::{Playback, PlaybackEvent};
use crate::snapshot::{Element, Snapshot};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct Session {
    registry: AlgorithmRegistry,
    algorithm: AlgorithmInfo,
    source: Box<dyn ArraySource>,
    elements: Vec<Element>,
    history: History,
    playback: Playback,
}

impl Session {
    /// Start a session on `algorithm` with a fresh array from `source`.
    ///
    /// Falls back to the first registered algorithm if `algorithm` is missing
    /// from the registry; returns `None` only for an empty registry.
    pub fn new(
        registry: AlgorithmRegistry,
        algorithm: Algorithm,
        mut source: Box<dyn ArraySource>,
        interval: Duration,
    ) -> Option<Self> {
        let info = registry
            .get(algorithm)
            .or_else(|| registry.iter().next())
            .copied()?;
        let elements = source.generate();
        let history = History::new(info.engine, &elements);
        info!(algorithm = %info.algorithm, len = elements.len(), "session started");

        Some(Session {
            registry,
            algorithm: info,
            source,
            elements,
            history,
            playback: Playback::new(interval),
        })
    }

    /// Switch algorithm and start over on a fresh array
    pub fn select(&mut self, algorithm: Algorithm) -> bool {
        let Some(info) = self.registry.get(algorithm).copied() else {
            return false;
        };
        self.algorithm = info;
        self.elements = self.source.generate();
        self.history.reset_with(info.engine, &self.elements);
        self.playback.stop();
        info!(algorithm = %algorithm, len = self.elements.len(), "algorithm selected");
        true
    }

    /// New array, same algorithm; clears buffers and playback
    pub fn reset(&mut self) {
        self.elements = self.source.generate();
        self.history.reset(&self.elements);
        self.playback.stop();
        debug!(len = self.elements.len(), "session reset");
    }

    pub fn step_forward(&mut self) -> Result<&Snapshot, NavigationError> {
        self.playback.stop();
        self.history.step_forward()
    }

    pub fn step_back(&mut self) -> Result<&Snapshot, NavigationError> {
        self.playback.stop();
        self.history.step_back()
    }

    pub fn step_forward_by(&mut self, n: usize) -> usize {
        self.playback.stop();
        self.history.step_forward_by(n)
    }

    pub fn jump_to_start(&mut self) -> usize {
        self.playback.stop();
        self.history.rewind()
    }

    pub fn jump_to_end(&mut self) -> usize {
        self.playback.stop();
        self.history.fast_forward()
    }

    /// Start or stop auto-play. Returns whether it is now playing
    pub fn toggle_playback(&mut self, now: Instant) -> bool {
        self.playback.toggle(now)
    }

    /// Drive auto-play; call on every UI loop iteration
    pub fn tick(&mut self, now: Instant) -> PlaybackEvent {
        self.playback.tick(now, &mut self.history)
    }

    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        self.playback.time_until_next(now)
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn algorithm(&self) -> &AlgorithmInfo {
        &self.algorithm
    }

    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// The array the current run started from
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}
