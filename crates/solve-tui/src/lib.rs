// Library root: re-exports all modules so integration tests can drive the
// orchestrator and the view state without a terminal.

pub mod app;
pub mod protocol;
pub mod tui;
