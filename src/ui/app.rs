//! Main TUI application state and logic

use crate::errors::NavigationError;
use crate::playback::PlaybackEvent;
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Longest the event loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Minimum time between two play/pause toggles (key repeat guard)
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// The main application state
pub struct App {
    /// The visualization session being driven
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over the given session
    pub fn new(session: Session) -> Self {
        App {
            session,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            let now = Instant::now();
            match self.session.tick(now) {
                PlaybackEvent::Stepped => self.status_message = "Playing...".to_string(),
                PlaybackEvent::Finished => {
                    self.status_message = "Playback complete".to_string();
                }
                PlaybackEvent::Idle | PlaybackEvent::Waiting => {}
            }

            // Wake up in time for the next automatic step
            let timeout = self
                .session
                .time_until_next_step(now)
                .map_or(POLL_INTERVAL, |wait| wait.min(POLL_INTERVAL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Header (menu | info), chart, step description, status bar
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(0)])
            .split(rows[0]);

        let snapshot = self.session.current();
        let history = self.session.history();

        super::panes::render_menu_pane(
            frame,
            header[0],
            self.session.registry(),
            self.session.algorithm().algorithm,
        );
        super::panes::render_info_pane(frame, header[1], self.session.algorithm());
        super::panes::render_chart_pane(frame, rows[1], snapshot);
        super::panes::render_step_pane(frame, rows[2], snapshot);

        super::panes::render_status_bar(
            frame,
            rows[3],
            super::panes::StatusRenderData {
                message: &self.status_message,
                position: history.position(),
                total: history.total(),
                is_playing: self.session.is_playing(),
                is_at_end: history.is_at_end(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                let stepped = self.session.step_forward_by(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => self.step_backward(),
            KeyCode::Right => self.step_forward(),
            KeyCode::Tab => {
                let next = self.session.algorithm().algorithm.next();
                self.select(next);
            }
            KeyCode::BackTab => {
                let prev = self.session.algorithm().algorithm.prev();
                self.select(prev);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.session.reset();
                self.status_message = "New array".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= SPACE_DEBOUNCE {
                    let now = Instant::now();
                    self.last_space_press = now;
                    if self.session.toggle_playback(now) {
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                let stepped = self.session.jump_to_end();
                debug!(stepped, "jumped to end");
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.session.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn select(&mut self, algorithm: crate::algorithms::Algorithm) {
        if self.session.select(algorithm) {
            self.status_message = format!("Selected {}", algorithm);
        }
    }

    /// Step forward one snapshot
    fn step_forward(&mut self) {
        self.status_message = match self.session.step_forward() {
            Ok(_) => "Stepped forward".to_string(),
            Err(e) => format!("Cannot step forward: {}", e),
        };
    }

    /// Step backward one snapshot
    fn step_backward(&mut self) {
        self.status_message = match self.session.step_back() {
            Ok(_) => "Stepped backward".to_string(),
            Err(NavigationError::AtStart) => "Already at the unsorted array".to_string(),
            Err(e) => format!("Cannot step backward: {}", e),
        };
    }
}
