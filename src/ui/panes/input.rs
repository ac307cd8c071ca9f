//! Input pane rendering
//!
//! Shows the expression one character per cell with an index ruler below
//! it and a caret under the character the current step refers to. Colours
//! follow the current step:
//!
//! - current character: red on error, green on pop, blue otherwise
//! - the opener it matched (pop) or failed to match (error): same colour
//! - already processed characters: brackets highlighted, others plain
//! - characters not reached yet: dimmed
//!
//! Long inputs scroll horizontally so the current character stays centred.

use crate::trace::brackets::is_bracket;
use crate::trace::{Action, Cursor, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the input pane
pub struct InputRenderData<'a> {
    pub input: &'a str,
    pub step: &'a Step,
    /// Buffer being typed, when the user is editing the expression
    pub editing: Option<&'a str>,
}

fn action_style(action: Action) -> Style {
    let color = match action {
        Action::Error => DEFAULT_THEME.error,
        Action::Pop => DEFAULT_THEME.success,
        Action::Push | Action::None => DEFAULT_THEME.primary,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style for the character at `index` given the current step
pub(crate) fn char_style(index: usize, ch: char, step: &Step) -> Style {
    if step.cursor.char_index() == Some(index) {
        return action_style(step.action).bg(DEFAULT_THEME.current_line_bg);
    }
    if step.match_index == Some(index) && matches!(step.action, Action::Pop | Action::Error) {
        return action_style(step.action);
    }

    let processed = match step.cursor {
        Cursor::Initial => false,
        Cursor::At(cur) => index < cur,
        Cursor::End(_) => true,
    };
    if !processed {
        Style::default().fg(DEFAULT_THEME.comment)
    } else if is_bracket(ch) {
        Style::default().fg(DEFAULT_THEME.bracket)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// First visible cell so that `focus` sits near the middle
fn scroll_offset(focus: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        return 0;
    }
    focus.saturating_sub(visible / 2).min(total - visible)
}

/// Render the input pane
pub fn render_input_pane(frame: &mut Frame, area: Rect, data: InputRenderData) {
    if let Some(buffer) = data.editing {
        render_editor(frame, area, buffer);
        return;
    }

    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let chars: Vec<char> = data.input.chars().collect();
    if chars.is_empty() {
        let paragraph = Paragraph::new("(empty string)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // One cell per character, wide enough for the largest index
    let cell_width = (chars.len() - 1).to_string().len() + 1;
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let visible = (inner_width / cell_width).max(1);

    let focus = match data.step.cursor {
        Cursor::Initial => 0,
        Cursor::At(i) => i,
        Cursor::End(len) => len.saturating_sub(1),
    };
    let offset = scroll_offset(focus, chars.len(), visible);

    let mut char_spans = Vec::new();
    let mut index_spans = Vec::new();
    let mut caret_spans = Vec::new();
    for (i, &ch) in chars.iter().enumerate().skip(offset).take(visible) {
        char_spans.push(Span::styled(
            format!("{:<width$}", ch, width = cell_width),
            char_style(i, ch, data.step),
        ));
        index_spans.push(Span::styled(
            format!("{:<width$}", i, width = cell_width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        let caret = if data.step.cursor.char_index() == Some(i) {
            "^"
        } else {
            " "
        };
        caret_spans.push(Span::styled(
            format!("{:<width$}", caret, width = cell_width),
            action_style(data.step.action),
        ));
    }

    let lines = vec![
        Line::from(char_spans),
        Line::from(index_spans),
        Line::from(caret_spans),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_editor(frame: &mut Frame, area: Rect, buffer: &str) {
    let block = Block::default()
        .title(" Edit Input (↵ apply, Esc cancel) ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("█", Style::default().fg(DEFAULT_THEME.secondary)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
