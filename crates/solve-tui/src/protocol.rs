// Messages exchanged between the TUI and the app orchestrator.
//
// The TUI sends `UserCommand`s when the user acts; the orchestrator answers
// with `UiUpdate`s, one per view change, which the TUI applies to its
// `ViewState` before the next render.

/// A user action forwarded from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// The Solve action fired with the current input text (untrimmed).
    Submit(String),
    /// The Clear action fired.
    Clear,
    Quit,
}

/// A single view change pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    QueryText(String),
    Alert(String),
    SubmitEnabled(bool),
    SubmitLabel(String),
    ResultVisible(bool),
    ResultText(String),
}
