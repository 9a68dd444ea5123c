// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +---------------------------------------+----------+
// | Query Input (3 rows)                  | [Solve]  |
// +---------------------------------------+----------+
// | Result Panel (fill)                               |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width reserved for the submit button, borders included.
pub const SUBMIT_BUTTON_WIDTH: u16 = 16;

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: endpoint and request state.
    pub status_bar: Rect,
    /// Editable query text.
    pub query_input: Rect,
    /// Submit control to the right of the input.
    pub submit_button: Rect,
    /// Rendered reply, or a placeholder while hidden.
    pub result_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | input(3) | result(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(SUBMIT_BUTTON_WIDTH),
        ])
        .split(vertical[1]);

    AppLayout {
        status_bar: vertical[0],
        query_input: input_row[0],
        submit_button: input_row[1],
        result_panel: vertical[2],
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
