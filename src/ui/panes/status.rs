//! Status bar rendering with keybindings and state indicators

use crate::playback::{PlaybackState, Speed};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub position: usize,
    pub total_steps: usize,
    pub state: PlaybackState,
    pub speed: Speed,
    pub valid: bool,
    pub editing: bool,
}

fn badge(text: &str, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);

    // Left side: step counter, verdict and message
    let left_spans = vec![
        badge(
            &format!("Step {}/{}", data.position + 1, data.total_steps),
            DEFAULT_THEME.primary,
        ),
        if data.valid {
            badge("VALID", DEFAULT_THEME.success)
        } else {
            badge("INVALID", DEFAULT_THEME.error)
        },
        Span::styled(" | ", sep_style),
        Span::styled(format!("{} ", data.message), desc_style),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds and state
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let mut right_spans = Vec::new();
    let keys: &[(&str, &str)] = if data.editing {
        &[(" ↵ ", " apply "), (" Esc ", " cancel ")]
    } else {
        &[
            (" ←/→ ", " step "),
            (" ⎵ ", " play "),
            (" +/- ", " speed "),
            (" ↵ / ⌫ ", " end/start "),
            (" e ", " edit "),
            (" r ", " reset "),
            (" q ", " quit "),
        ]
    };
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(format!(" {} ", data.speed), desc_style));
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(match data.state {
        PlaybackState::Playing => badge("▶ PLAYING", DEFAULT_THEME.secondary),
        PlaybackState::AtEnd => badge("END", DEFAULT_THEME.error),
        PlaybackState::Idle if data.position == 0 => badge("START", DEFAULT_THEME.success),
        PlaybackState::Idle => badge("PAUSED", DEFAULT_THEME.comment),
    });

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
