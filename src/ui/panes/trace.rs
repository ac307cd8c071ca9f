//! Trace pane rendering: every step of the run, current one highlighted

use crate::trace::{Action, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// First visible row so the current step stays centred when possible
pub(crate) fn visible_window(current: usize, total: usize, height: usize) -> usize {
    if total <= height {
        return 0;
    }
    current.saturating_sub(height / 2).min(total - height)
}

fn action_color(step: &Step) -> ratatui::style::Color {
    match (step.action, step.final_result) {
        (_, Some(true)) => DEFAULT_THEME.success,
        (Action::Error, _) => DEFAULT_THEME.error,
        (Action::Pop, _) => DEFAULT_THEME.success,
        (Action::Push, _) => DEFAULT_THEME.primary,
        (Action::None, _) => DEFAULT_THEME.fg,
    }
}

/// Render the trace pane
pub fn render_trace_pane(frame: &mut Frame, area: Rect, steps: &[Step], current: usize) {
    let block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let offset = visible_window(current, steps.len(), visible_height);

    let lines: Vec<Line> = steps
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_height)
        .map(|(idx, step)| {
            let is_current = idx == current;
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let mut content_style = Style::default().fg(action_color(step));
            if is_current {
                content_style = content_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!("{}{:3} ", if is_current { "▶" } else { " " }, idx), num_style),
                Span::styled(step.to_string(), content_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
