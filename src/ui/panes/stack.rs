//! Stack pane rendering
//!
//! Draws the current stack snapshot top-down, so the element the next
//! closer will be compared against is always on the first row.

use crate::trace::{Action, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Colour of the top element: green right after a pop, red on an error
fn top_style(action: Action) -> Style {
    let color = match action {
        Action::Pop => DEFAULT_THEME.success,
        Action::Error => DEFAULT_THEME.error,
        Action::Push | Action::None => DEFAULT_THEME.primary,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Build the rows for a stack snapshot, top first
pub(crate) fn stack_rows(step: &Step) -> Vec<Line<'static>> {
    let depth = step.stack.len();
    step.stack
        .iter()
        .enumerate()
        .rev()
        .map(|(i, &ch)| {
            let is_top = i + 1 == depth;
            let style = if is_top {
                top_style(step.action)
            } else {
                Style::default().fg(DEFAULT_THEME.primary)
            };
            let marker = match (is_top, i == 0) {
                (true, true) => "← top / bottom",
                (true, false) => "← top",
                (false, true) => "← bottom",
                (false, false) => "",
            };
            Line::from(vec![
                Span::styled(format!("[ {} ]", ch), style),
                Span::styled(format!(" {}", marker), Style::default().fg(DEFAULT_THEME.comment)),
            ])
        })
        .collect()
}

/// Render the stack pane
pub fn render_stack_pane(frame: &mut Frame, area: Rect, step: &Step) {
    let direction = match step.action {
        Action::Push => " ⬇ push",
        Action::Pop => " ⬆ pop",
        _ => "",
    };
    let block = Block::default()
        .title(format!(" Stack ({}){} ", step.stack.len(), direction))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if step.stack.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let items: Vec<ListItem> = stack_rows(step)
        .into_iter()
        .take(visible_height)
        .map(ListItem::new)
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}
