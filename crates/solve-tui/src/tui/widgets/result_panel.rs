// Result panel widget: the rendered solver reply.
//
// Hidden until a submission settles; while hidden a dim hint is drawn in
// its place. Long replies wrap and scroll with the arrow keys.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::ViewState;

const PLACEHOLDER: &str = "  Type a problem and press Enter to solve it.";

/// Render the result panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    if !state.result_visible {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        )))
        .block(Block::default().borders(Borders::ALL).title("Result"));
        frame.render_widget(paragraph, area);
        return;
    }

    let scroll = u16::try_from(state.result_scroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(state.result_text.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title(&state.result_text))
                .border_style(border_style(&state.result_text)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Panel title; failures caught during the request get called out.
pub fn title(text: &str) -> &'static str {
    if is_error_text(text) {
        "Result -- error"
    } else {
        "Result"
    }
}

fn border_style(text: &str) -> Style {
    if is_error_text(text) {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    }
}

fn is_error_text(text: &str) -> bool {
    text.starts_with("Error: ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn title_flags_caught_failures() {
        assert_eq!(title("Error: timeout"), "Result -- error");
        assert_eq!(title("parse error"), "Result");
        assert_eq!(title("5"), "Result");
    }

    #[test]
    fn hidden_panel_shows_placeholder() {
        let backend = ratatui::backend::TestBackend::new(60, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.result_text = "stale".into();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("press Enter"));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn visible_panel_shows_text() {
        let backend = ratatui::backend::TestBackend::new(60, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.result_visible = true;
        state.result_text = "Mode: algebra\n\n{\n  \"x\": 2\n}".into();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Mode: algebra"));
        assert!(text.contains("\"x\": 2"));
    }

    #[test]
    fn render_does_not_panic_when_scrolled_past_end() {
        let backend = ratatui::backend::TestBackend::new(40, 5);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.result_visible = true;
        state.result_text = (0..50).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        state.result_scroll = 1000;
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
