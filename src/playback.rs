//! Auto-play scheduling
//!
//! The scheduler owns a single timer slot. The UI event loop calls
//! [`Playback::tick`] on every iteration with the current time; when the slot
//! is armed and due, the history is stepped forward and the slot re-armed one
//! interval later. Arming replaces any previous deadline, so at most one timer
//! is ever active.

use crate::history::History;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default delay between automatic steps
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// What a call to [`Playback::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Playback is stopped
    Idle,
    /// Playing, next step not due yet
    Waiting,
    /// Took one step forward
    Stepped,
    /// The run is exhausted; playback stopped itself
    Finished,
}

#[derive(Debug, Clone)]
pub struct Playback {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Playback {
    pub fn new(interval: Duration) -> Self {
        Playback {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_playing(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm the timer; the first step is due immediately
    pub fn start(&mut self, now: Instant) {
        debug!(interval_ms = self.interval.as_millis() as u64, "playback started");
        self.deadline = Some(now);
    }

    /// Cancel the timer. No further automatic steps occur until restarted
    pub fn stop(&mut self) {
        if self.deadline.take().is_some() {
            debug!("playback stopped");
        }
    }

    /// Start if stopped, stop if playing. Returns whether playback is now active
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.stop();
        } else {
            self.start(now);
        }
        self.is_playing()
    }

    /// Step `history` forward if the timer is due
    pub fn tick(&mut self, now: Instant, history: &mut History) -> PlaybackEvent {
        let Some(deadline) = self.deadline else {
            return PlaybackEvent::Idle;
        };
        if now < deadline {
            return PlaybackEvent::Waiting;
        }

        match history.step_forward() {
            Ok(_) => {
                self.deadline = Some(now + self.interval);
                PlaybackEvent::Stepped
            }
            Err(_) => {
                debug!("playback reached end of run");
                self.deadline = None;
                PlaybackEvent::Finished
            }
        }
    }

    /// Time left before the next automatic step, if playing
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for Playback {
    fn default() -> Self {
        Playback::new(DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::selection::selection_sort;
    use crate::snapshot::Element;

    fn history() -> History {
        let input: Vec<Element> = [3, 1, 2].into_iter().map(Element::from_value).collect();
        History::new(selection_sort, &input)
    }

    #[test]
    fn test_steps_once_per_interval() {
        let mut history = history();
        let mut playback = Playback::new(Duration::from_millis(500));
        let t0 = Instant::now();

        playback.start(t0);
        assert_eq!(playback.tick(t0, &mut history), PlaybackEvent::Stepped);
        assert_eq!(
            playback.tick(t0 + Duration::from_millis(100), &mut history),
            PlaybackEvent::Waiting
        );
        assert_eq!(
            playback.tick(t0 + Duration::from_millis(500), &mut history),
            PlaybackEvent::Stepped
        );
        assert_eq!(history.position(), 2);
    }

    #[test]
    fn test_stopped_playback_is_idle() {
        let mut history = history();
        let mut playback = Playback::default();
        let t0 = Instant::now();

        assert!(playback.toggle(t0));
        assert!(!playback.toggle(t0));
        assert_eq!(playback.tick(t0, &mut history), PlaybackEvent::Idle);
        assert_eq!(history.position(), 0);
        assert_eq!(playback.time_until_next(t0), None);
    }
}
