// Terminal UI: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the query page. The app
// orchestrator pushes `UiUpdate` messages over an mpsc channel; the TUI
// applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use solve_core::UiConfig;
use tokio::sync::mpsc;

use crate::protocol::{UiUpdate, UserCommand};

use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state backing every widget.
///
/// Typing and scrolling mutate it directly; everything the submitter
/// controls arrives as `UiUpdate`s.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Current contents of the query input.
    pub query: String,
    /// Whether Enter fires the Solve action.
    pub submit_enabled: bool,
    /// Text on the submit control.
    pub submit_label: String,
    /// Whether the result panel is shown.
    pub result_visible: bool,
    /// Text inside the result panel.
    pub result_text: String,
    /// Vertical scroll of the result panel, in lines.
    pub result_scroll: usize,
    /// Blocking message; dismissed by the next key press.
    pub alert: Option<String>,
    /// Endpoint shown in the status bar.
    pub endpoint: String,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(&UiConfig::default(), String::new())
    }
}

impl ViewState {
    pub fn new(labels: &UiConfig, endpoint: String) -> Self {
        ViewState {
            query: String::new(),
            submit_enabled: true,
            submit_label: labels.submit_label.clone(),
            result_visible: false,
            result_text: String::new(),
            result_scroll: 0,
            alert: None,
            endpoint,
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::QueryText(text) => {
            state.query = text;
        }
        UiUpdate::Alert(message) => {
            state.alert = Some(message);
        }
        UiUpdate::SubmitEnabled(enabled) => {
            state.submit_enabled = enabled;
        }
        UiUpdate::SubmitLabel(label) => {
            state.submit_label = label;
        }
        UiUpdate::ResultVisible(visible) => {
            state.result_visible = visible;
        }
        UiUpdate::ResultText(text) => {
            state.result_text = text;
            state.result_scroll = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::query_input::render(frame, layout.query_input, layout.submit_button, state);
    widgets::result_panel::render(frame, layout.result_panel, state);
    render_help_bar(frame, &layout);

    if let Some(message) = &state.alert {
        widgets::alert::render(frame, frame.area(), message);
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout) {
    let text = " Enter:Solve | Esc/Ctrl+L:Clear | Up/Down/PgUp/PgDn:Scroll | Ctrl+C:Quit";
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Selects over UI updates, keyboard input, and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::UnboundedReceiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    mut view_state: ViewState,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // Channel closed: app is shutting down
                    None => break Ok(()),
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            if cmd_tx.send(cmd).await.is_err() || quit {
                                break Ok(());
                            }
                        }
                    }
                    // Mouse, resize, focus: redrawn on the next tick
                    Some(Ok(_)) => {}
                    Some(Err(e)) => break Err(anyhow::Error::from(e).context("terminal input error")),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::from(e).context("failed to draw frame"));
                }
            }
        }
    };

    ratatui::restore();

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert!(state.query.is_empty());
        assert!(state.submit_enabled);
        assert_eq!(state.submit_label, "Solve");
        assert!(!state.result_visible);
        assert!(state.result_text.is_empty());
        assert_eq!(state.result_scroll, 0);
        assert!(state.alert.is_none());
    }

    #[test]
    fn view_state_uses_configured_label() {
        let labels = UiConfig {
            submit_label: "Go".into(),
            ..UiConfig::default()
        };
        let state = ViewState::new(&labels, "http://h/api/solve".into());
        assert_eq!(state.submit_label, "Go");
        assert_eq!(state.endpoint, "http://h/api/solve");
    }

    #[test]
    fn apply_query_text() {
        let mut state = ViewState::default();
        state.query = "old".into();
        apply_ui_update(&mut state, UiUpdate::QueryText(String::new()));
        assert!(state.query.is_empty());
    }

    #[test]
    fn apply_alert() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Alert("Please type a math problem".into()));
        assert_eq!(state.alert.as_deref(), Some("Please type a math problem"));
    }

    #[test]
    fn apply_submit_state() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::SubmitEnabled(false));
        apply_ui_update(&mut state, UiUpdate::SubmitLabel("Solving...".into()));
        assert!(!state.submit_enabled);
        assert_eq!(state.submit_label, "Solving...");
    }

    #[test]
    fn apply_result_text_resets_scroll() {
        let mut state = ViewState::default();
        state.result_scroll = 7;
        apply_ui_update(&mut state, UiUpdate::ResultText("5".into()));
        apply_ui_update(&mut state, UiUpdate::ResultVisible(true));
        assert_eq!(state.result_text, "5");
        assert_eq!(state.result_scroll, 0);
        assert!(state.result_visible);
    }

    #[test]
    fn render_frame_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.query = "x^2 - 4 = 0".into();
        state.result_visible = true;
        state.result_text = "Mode: equation\n\n[\n  {\n    \"x\": -2\n  }\n]".into();
        state.alert = Some("Please type a math problem".into());
        terminal
            .draw(|frame| render_frame(frame, &state))
            .unwrap();
    }
}
