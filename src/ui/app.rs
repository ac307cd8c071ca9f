//! Main TUI application state and logic

use crate::config::Config;
use crate::error::Result;
use crate::playback::{Player, Speed};
use crate::ui::panes::{self, InputRenderData, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::time::{Duration, Instant};
use tracing::debug;

/// The main application state
pub struct App {
    /// The playback controller; the only owner of trace and position
    pub player: Player,

    /// Expression being typed, while in edit mode
    pub editing: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last accepted play/pause toggle (for debouncing key repeat)
    last_toggle: Option<Instant>,

    poll_interval: Duration,
    toggle_debounce: Duration,
}

impl App {
    /// Create a new app from the resolved configuration
    pub fn new(config: &Config) -> Self {
        let mut app = App {
            player: Player::new(&config.expression, config.speed),
            editing: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_toggle: None,
            poll_interval: config.poll_interval,
            toggle_debounce: config.toggle_debounce,
        };
        if config.autoplay && app.player.play(Instant::now()) {
            app.status_message = "Playing...".to_string();
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.on_tick(Instant::now());

            // Wake up for the next auto-advance even if no key arrives
            let timeout = self
                .player
                .time_to_next_tick(Instant::now())
                .map_or(self.poll_interval, |left| left.min(self.poll_interval));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, Instant::now());
                    }
                }
            }
        }

        Ok(())
    }

    /// Let the controller fire a due auto-advance
    pub fn on_tick(&mut self, now: Instant) {
        if self.player.tick(now) {
            self.status_message = if self.player.is_playing() {
                "Playing...".to_string()
            } else {
                "Playback complete".to_string()
            };
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Stack (left) | Trace (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[1]);

        let step = self.player.current_step();

        panes::render_input_pane(
            frame,
            main_chunks[0],
            InputRenderData {
                input: self.player.input(),
                step,
                editing: self.editing.as_deref(),
            },
        );

        panes::render_stack_pane(frame, columns[0], step);

        panes::render_trace_pane(
            frame,
            columns[1],
            self.player.steps(),
            self.player.position(),
        );

        panes::render_status_bar(
            frame,
            main_chunks[2],
            StatusRenderData {
                message: &self.status_message,
                position: self.player.position(),
                total_steps: self.player.steps().len(),
                state: self.player.state(),
                speed: self.player.speed(),
                valid: self.player.result(),
                editing: self.editing.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                let stepped = self.player.step_forward_by(n, now);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.status_message = if self.player.step_backward(now) {
                    "Stepped backward".to_string()
                } else {
                    "Already at the first step".to_string()
                };
            }
            KeyCode::Right => {
                self.status_message = if self.player.step_forward(now) {
                    "Stepped forward".to_string()
                } else {
                    "Already at the last step".to_string()
                };
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (debounced against key repeat)
                let accepted = self
                    .last_toggle
                    .map_or(true, |at| now.saturating_duration_since(at) >= self.toggle_debounce);
                if accepted {
                    self.last_toggle = Some(now);
                    let was_playing = self.player.is_playing();
                    self.status_message = if self.player.toggle(now) {
                        "Playing...".to_string()
                    } else if was_playing {
                        "Paused".to_string()
                    } else {
                        "Already at the last step".to_string()
                    };
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(self.player.speed().faster()),
            KeyCode::Char('-') | KeyCode::Char('_') => self.change_speed(self.player.speed().slower()),
            KeyCode::Enter => {
                self.player.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.player.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.player.reset();
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.editing = Some(self.player.input().to_string());
                self.status_message = "Editing input".to_string();
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.editing.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let input = std::mem::take(buffer);
                self.editing = None;
                self.player.set_input(&input);
                debug!(input = %input, "input applied from editor");
                self.status_message = format!(
                    "New input: {} steps, {}",
                    self.player.steps().len(),
                    if self.player.result() { "valid" } else { "invalid" }
                );
            }
            KeyCode::Esc => {
                self.editing = None;
                self.status_message = "Edit cancelled".to_string();
            }
            _ => {}
        }
    }

    fn change_speed(&mut self, speed: Speed) {
        self.player.set_speed(speed);
        self.status_message = format!("Speed: {}", speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_for(expression: &str) -> App {
        App::new(&Config {
            expression: expression.to_string(),
            ..Config::default()
        })
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_arrow_keys_step() {
        let now = Instant::now();
        let mut app = app_for("()");
        app.handle_key_event(press(KeyCode::Right), now);
        app.handle_key_event(press(KeyCode::Right), now);
        assert_eq!(app.player.position(), 2);
        app.handle_key_event(press(KeyCode::Left), now);
        assert_eq!(app.player.position(), 1);
        app.handle_key_event(press(KeyCode::Enter), now);
        assert_eq!(app.player.position(), 3);
        app.handle_key_event(press(KeyCode::Right), now);
        assert_eq!(app.status_message, "Already at the last step");
    }

    #[test]
    fn test_digit_steps_are_clamped() {
        let now = Instant::now();
        let mut app = app_for("()");
        app.handle_key_event(press(KeyCode::Char('9')), now);
        assert_eq!(app.player.position(), 3);
        assert_eq!(app.status_message, "Stepped forward 3 step(s)");
    }

    #[test]
    fn test_space_is_debounced() {
        let t0 = Instant::now();
        let mut app = app_for("([{}])");
        app.handle_key_event(press(KeyCode::Char(' ')), t0);
        assert!(app.player.is_playing());
        app.handle_key_event(press(KeyCode::Char(' ')), t0 + Duration::from_millis(50));
        assert!(app.player.is_playing());
        app.handle_key_event(press(KeyCode::Char(' ')), t0 + Duration::from_millis(250));
        assert!(!app.player.is_playing());
        assert_eq!(app.status_message, "Paused");
    }

    #[test]
    fn test_autoplay_runs_to_end() {
        let t0 = Instant::now();
        let mut app = App::new(&Config {
            expression: "()".to_string(),
            speed: Speed::Fast,
            autoplay: true,
            ..Config::default()
        });
        assert!(app.player.is_playing());
        let mut now = t0;
        for _ in 0..10 {
            now += Speed::Fast.interval();
            app.on_tick(now);
        }
        assert_eq!(app.player.position(), 3);
        assert!(!app.player.is_playing());
        assert_eq!(app.status_message, "Playback complete");
    }

    #[test]
    fn test_edit_mode_replaces_input() {
        let now = Instant::now();
        let mut app = app_for("()");
        app.handle_key_event(press(KeyCode::Right), now);
        app.handle_key_event(press(KeyCode::Char('e')), now);
        assert_eq!(app.editing.as_deref(), Some("()"));
        // Keys are text while editing
        app.handle_key_event(press(KeyCode::Char('q')), now);
        assert!(!app.should_quit);
        app.handle_key_event(press(KeyCode::Backspace), now);
        app.handle_key_event(press(KeyCode::Backspace), now);
        app.handle_key_event(press(KeyCode::Backspace), now);
        for c in "(]".chars() {
            app.handle_key_event(press(KeyCode::Char(c)), now);
        }
        app.handle_key_event(press(KeyCode::Enter), now);
        assert!(app.editing.is_none());
        assert_eq!(app.player.input(), "(]");
        assert_eq!(app.player.position(), 0);
        assert!(!app.player.result());
    }

    #[test]
    fn test_escape_keeps_old_input() {
        let now = Instant::now();
        let mut app = app_for("{}");
        app.handle_key_event(press(KeyCode::Char('e')), now);
        app.handle_key_event(press(KeyCode::Char('(')), now);
        app.handle_key_event(press(KeyCode::Esc), now);
        assert_eq!(app.player.input(), "{}");
        assert_eq!(app.status_message, "Edit cancelled");
    }

    #[test]
    fn test_speed_keys() {
        let now = Instant::now();
        let mut app = app_for("()");
        app.handle_key_event(press(KeyCode::Char('+')), now);
        assert_eq!(app.player.speed(), Speed::Fast);
        app.handle_key_event(press(KeyCode::Char('-')), now);
        app.handle_key_event(press(KeyCode::Char('-')), now);
        assert_eq!(app.player.speed(), Speed::Slow);
    }

    #[test]
    fn test_render_shows_panes() {
        let now = Instant::now();
        let mut app = app_for("(]");
        app.handle_key_event(press(KeyCode::Enter), now);
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("Input"));
        assert!(text.contains("Stack (1)"));
        assert!(text.contains("Trace"));
        assert!(text.contains("INVALID"));
        assert!(text.contains("Step 3/3"));
    }
}
