// Status bar widget: request state and solver endpoint.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [request indicator] [endpoint]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (dot, label, color) = request_indicator(state.submit_enabled);
    let mut spans = vec![
        Span::styled(format!(" {dot} "), Style::default().fg(color)),
        Span::styled(label, Style::default().fg(Color::White)),
    ];

    if !state.endpoint.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            state.endpoint.clone(),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Dot, word and color describing whether a request is in flight.
pub fn request_indicator(submit_enabled: bool) -> (&'static str, &'static str, Color) {
    if submit_enabled {
        ("●", "Ready", Color::Green)
    } else {
        ("●", "Waiting for solver", Color::Yellow)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_ready() {
        assert_eq!(request_indicator(true), ("●", "Ready", Color::Green));
    }

    #[test]
    fn indicator_in_flight() {
        let (_, label, color) = request_indicator(false);
        assert_eq!(label, "Waiting for solver");
        assert_eq!(color, Color::Yellow);
    }

    #[test]
    fn render_shows_endpoint() {
        let backend = ratatui::backend::TestBackend::new(60, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.endpoint = "http://127.0.0.1:5000/api/solve".into();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..60u16)
            .map(|x| buffer[(x, 0u16)].symbol().to_string())
            .collect();
        assert!(row.contains("Ready"));
        assert!(row.contains("127.0.0.1:5000"));
    }
}
