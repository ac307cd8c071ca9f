//! TUI pane rendering modules
//!
//! Each pane is a stateless render function that reads controller output
//! and draws it; none of them touch the [`Player`](crate::playback::Player).
//!
//! - [`input`]: the expression with per-character highlighting and an index ruler
//! - [`stack`]: the stack snapshot of the current step
//! - [`trace`]: every step of the run, current one highlighted
//! - [`status`]: step counter, verdict, speed, playback state and key hints

pub mod input;
pub mod stack;
pub mod status;
pub mod trace;

pub use input::{render_input_pane, InputRenderData};
pub use stack::render_stack_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use trace::render_trace_pane;
