// Alert overlay widget.
//
// Renders a centered modal with the alert text on top of the main layout
// while `ViewState::alert` is set. Any key dismisses it.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 60;
/// Borders, message line, blank line, hint line.
const DIALOG_HEIGHT: u16 = 5;

/// Render the alert overlay centered on `area`.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let width = dialog_width(message);
    let dialog_area = centered_rect(width, DIALOG_HEIGHT, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            " Notice ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(Span::raw(format!(" {message}"))),
        Line::from(""),
        Line::from(Span::styled(
            " press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(Color::Black));

    frame.render_widget(paragraph, dialog_area);
}

/// Wide enough for the message plus padding, within fixed bounds.
fn dialog_width(message: &str) -> u16 {
    let wanted = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    wanted.clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Compute a centered rectangle of the given size within `area`, clamped to it.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let clamped_width = width.min(area.width);
    let clamped_height = height.min(area.height);

    let vertical = Layout::vertical([Constraint::Length(clamped_height)])
        .flex(Flex::Center)
        .split(area);

    let horizontal = Layout::horizontal([Constraint::Length(clamped_width)])
        .flex(Flex::Center)
        .split(vertical[0]);

    horizontal[0]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
