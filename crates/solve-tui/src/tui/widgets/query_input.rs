// Query input widget: the editable text field and the submit control.
//
// The input shows the current query with a block cursor. The submit control
// shows its label and dims while disabled.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

const CURSOR: &str = "█";

/// Render the input field into `input_area` and the submit control into
/// `button_area`.
pub fn render(frame: &mut Frame, input_area: Rect, button_area: Rect, state: &ViewState) {
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let line = Line::from(vec![
        Span::raw(visible_tail(&state.query, inner_width.saturating_sub(1))),
        Span::styled(CURSOR, Style::default().fg(Color::Gray)),
    ]);

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Query")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, input_area);

    let button = Paragraph::new(Span::styled(
        state.submit_label.clone(),
        button_style(state.submit_enabled),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(button_style(state.submit_enabled)),
    );
    frame.render_widget(button, button_area);
}

/// The last `width` characters of `text`, so the end being typed stays visible.
pub fn visible_tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(width)).collect()
}

fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
