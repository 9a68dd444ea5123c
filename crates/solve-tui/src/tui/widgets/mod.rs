// TUI widget modules for each screen zone.

pub mod alert;
pub mod query_input;
pub mod result_panel;
pub mod status_bar;
