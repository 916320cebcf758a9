//! Keypad grid.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::calculator::Action;
use crate::keypad::Button;

/// Render every keypad button into `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    for (rect, button) in super::keypad_areas(area) {
        render_button(frame, button, rect);
    }
}

fn render_button(frame: &mut Frame, button: &Button, area: Rect) {
    let style = button_style(button);

    // Center the label vertically inside the border.
    let inner_height = area.height.saturating_sub(2);
    let padding = usize::from(inner_height.saturating_sub(1) / 2);
    let mut lines = vec![Line::default(); padding];
    lines.push(Line::from(button.label));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered().border_style(style));

    frame.render_widget(paragraph, area);
}

fn button_style(button: &Button) -> Style {
    match button.action {
        Action::ChooseOperation(_) => Style::default().fg(Color::Yellow),
        Action::Evaluate => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Action::Clear | Action::DeleteDigit => Style::default().fg(Color::Magenta),
        Action::AddDigit(_) => Style::default(),
    }
}
