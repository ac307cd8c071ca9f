//! Playback controller for a bracket-matching trace
//!
//! [`Player`] owns the current input, its [`Trace`], the position within
//! it, the auto-play [`Speed`] and a single-slot [`TickTimer`]. The view
//! layer drives it only through the named commands below and reads the
//! results back through the getters.
//!
//! # States
//!
//! - **Idle**: not playing; the position changes only on request
//! - **Playing**: a tick is pending and advances the position when due
//! - **AtEnd**: the position is the last step; playing is always off here
//!
//! Time is injected: every command that can schedule a tick takes `now`.
//! Position is always within `0..=trace.last_index()`; out-of-range requests
//! are clamped or ignored.

pub mod speed;
pub mod timer;

pub use speed::Speed;
pub use timer::TickTimer;

use crate::trace::{generate, Step, Trace};
use std::time::{Duration, Instant};
use tracing::debug;

/// Observable playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    AtEnd,
}

/// Step-through and auto-play controller
#[derive(Debug, Clone)]
pub struct Player {
    trace: Trace,
    position: usize,
    speed: Speed,
    timer: TickTimer,
}

impl Player {
    /// Create an idle player positioned at the initial step of `input`'s trace
    pub fn new(input: &str, speed: Speed) -> Self {
        Player {
            trace: generate(input),
            position: 0,
            speed,
            timer: TickTimer::new(),
        }
    }

    // ========== Commands ==========

    /// Start auto-play. Does nothing at the last step or while already playing.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.is_playing() || self.at_end() {
            return false;
        }
        self.timer.schedule(now, self.speed.interval());
        debug!(position = self.position, speed = %self.speed, "play");
        true
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            self.timer.cancel();
            debug!(position = self.position, "pause");
        }
    }

    /// Play when idle, pause when playing. Returns whether it is now playing.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.pause();
            false
        } else {
            self.play(now)
        }
    }

    /// Move one step forward. While playing, the pending tick restarts from
    /// `now`, and landing on the last step stops playback.
    pub fn step_forward(&mut self, now: Instant) -> bool {
        if self.at_end() {
            return false;
        }
        self.position += 1;
        self.after_manual_step(now);
        true
    }

    /// Move one step back. Keeps playing if it was.
    pub fn step_backward(&mut self, now: Instant) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        self.after_manual_step(now);
        true
    }

    /// Step forward up to `n` times; returns how many steps were taken.
    pub fn step_forward_by(&mut self, n: usize, now: Instant) -> usize {
        let mut stepped = 0;
        while stepped < n && self.step_forward(now) {
            stepped += 1;
        }
        stepped
    }

    /// Jump to step `index` (clamped). Manual scrubbing always stops playback.
    pub fn seek(&mut self, index: usize) {
        self.timer.cancel();
        self.position = index.min(self.trace.last_index());
        debug!(requested = index, position = self.position, "seek");
    }

    pub fn jump_to_start(&mut self) {
        self.seek(0);
    }

    pub fn jump_to_end(&mut self) {
        self.seek(self.trace.last_index());
    }

    /// Regenerate the trace for the current input and return to step 0.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.trace = generate(self.trace.input());
        self.position = 0;
        debug!(steps = self.trace.len(), "reset");
    }

    /// Replace the input: stops playback, regenerates, returns to step 0.
    pub fn set_input(&mut self, input: &str) {
        self.timer.cancel();
        self.trace = generate(input);
        self.position = 0;
        debug!(
            chars = input.chars().count(),
            steps = self.trace.len(),
            valid = self.trace.is_valid(),
            "input changed"
        );
    }

    /// Change the auto-play rate. A tick that is already pending keeps its
    /// deadline; the new interval applies from the next one.
    pub fn set_speed(&mut self, speed: Speed) {
        if self.speed != speed {
            debug!(from = %self.speed, to = %speed, "speed changed");
            self.speed = speed;
        }
    }

    /// Advance if the pending tick is due. Returns whether the position moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        // A tick is only ever pending below the last step.
        self.position = (self.position + 1).min(self.trace.last_index());
        if self.at_end() {
            debug!(position = self.position, "playback reached the end");
        } else {
            self.timer.schedule(now, self.speed.interval());
        }
        true
    }

    fn after_manual_step(&mut self, now: Instant) {
        if !self.is_playing() {
            return;
        }
        if self.at_end() {
            self.timer.cancel();
            debug!(position = self.position, "stepped onto the last step, playback stopped");
        } else {
            self.timer.schedule(now, self.speed.interval());
        }
    }

    // ========== Getters for the view ==========

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn input(&self) -> &str {
        self.trace.input()
    }

    pub fn steps(&self) -> &[Step] {
        self.trace.steps()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_step(&self) -> &Step {
        &self.trace.steps()[self.position]
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.trace.last_index()
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_playing() {
            PlaybackState::Playing
        } else if self.at_end() {
            PlaybackState::AtEnd
        } else {
            PlaybackState::Idle
        }
    }

    /// Whether the whole input is balanced
    pub fn result(&self) -> bool {
        self.trace.is_valid()
    }

    /// When the next auto-advance is due, if playing
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Time until the next auto-advance, if playing
    pub fn time_to_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }
}
