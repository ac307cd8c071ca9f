//! # Introduction
//!
//! parentrace visualizes the classic stack-based "valid parentheses" check
//! one step at a time. The input string is turned into a complete, immutable
//! trace of algorithm states up front; that trace is then stepped through,
//! scrubbed and auto-played in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Trace generator → Trace → Player → TUI
//! ```
//!
//! 1. [`trace`] — runs the matching algorithm and records a [`trace::Step`]
//!    for every input position, stopping at the first bad closer.
//! 2. [`playback`] — the [`playback::Player`] controller: position, speed and
//!    a single pending auto-advance tick.
//! 3. [`config`] — command-line parsing with clap and resolved settings.
//! 4. [`logging`] — tracing subscriber setup.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Matching rule
//!
//! `)`↔`(`, `]`↔`[`, `}`↔`{`. Every other character is recorded but leaves
//! the stack alone.

pub mod config;
pub mod error;
pub mod logging;
pub mod playback;
pub mod trace;
pub mod ui;
