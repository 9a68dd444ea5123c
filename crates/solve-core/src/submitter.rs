// Query submission: validate, lock the submit control, call the solver,
// render the reply, unlock.
//
// `QuerySubmitter` never touches a concrete UI. Every visible effect goes
// through the `View` trait so the terminal front-end, a channel-backed proxy,
// or a test recorder can sit behind it.

use tracing::{debug, info, warn};

use crate::client::SolveClient;
use crate::config::UiConfig;
use crate::protocol::SolveResponse;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// The UI affordances a submitter drives.
pub trait View {
    /// Replace the contents of the query input.
    fn set_query(&mut self, text: &str);
    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_submit_label(&mut self, label: &str);
    fn set_result_visible(&mut self, visible: bool);
    fn set_result_text(&mut self, text: &str);
}

// ---------------------------------------------------------------------------
// InputLock
// ---------------------------------------------------------------------------

/// Holds the submit control disabled for as long as it lives.
///
/// Acquiring disables the control and shows the busy label; dropping
/// re-enables it and restores the idle label. Drop runs on every exit path,
/// unwinding included. Derefs to the view so the holder can keep updating it.
pub struct InputLock<'a, V: View + ?Sized> {
    view: &'a mut V,
    idle_label: &'a str,
}

impl<'a, V: View + ?Sized> InputLock<'a, V> {
    pub fn acquire(view: &'a mut V, busy_label: &str, idle_label: &'a str) -> Self {
        view.set_submit_enabled(false);
        view.set_submit_label(busy_label);
        InputLock { view, idle_label }
    }
}

impl<V: View + ?Sized> std::ops::Deref for InputLock<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: View + ?Sized> std::ops::DerefMut for InputLock<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: View + ?Sized> Drop for InputLock<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_enabled(true);
        self.view.set_submit_label(self.idle_label);
    }
}

// ---------------------------------------------------------------------------
// QuerySubmitter
// ---------------------------------------------------------------------------

/// Wires the query input, the Solve and Clear actions, and the result panel
/// to a `SolveClient`.
pub struct QuerySubmitter<C> {
    client: C,
    labels: UiConfig,
}

impl<C: SolveClient> QuerySubmitter<C> {
    pub fn new(client: C, labels: UiConfig) -> Self {
        Self { client, labels }
    }

    /// Submit `query` and render the outcome into `view`.
    ///
    /// A blank query raises an alert and changes nothing else. Otherwise
    /// exactly one request is made while the submit control is locked, and
    /// the result panel is shown with either the rendered reply or
    /// `"Error: <message>"`. There is no timeout.
    pub async fn submit<V>(&self, query: &str, view: &mut V)
    where
        V: View + Send + ?Sized,
    {
        let query = trim_query(query);
        if query.is_empty() {
            debug!("ignoring blank query");
            view.alert(&self.labels.empty_query_alert);
            return;
        }

        let mut lock = InputLock::acquire(view, &self.labels.busy_label, &self.labels.submit_label);
        info!(query, "submitting query");

        let text = match self.client.solve(query).await {
            Ok(value) => {
                let response = SolveResponse::decode(value);
                info!(kind = response.kind(), "solve reply received");
                response.render()
            }
            Err(e) => {
                warn!(error = %e, "solve request failed");
                format!("Error: {e}")
            }
        };

        lock.set_result_text(&text);
        lock.set_result_visible(true);
    }

    /// Empty the query input and hide and blank the result panel.
    pub fn clear<V: View + ?Sized>(&self, view: &mut V) {
        debug!("clearing query and result");
        view.set_query("");
        view.set_result_visible(false);
        view.set_result_text("");
    }
}

/// Strip leading and trailing whitespace, byte order marks included.
fn trim_query(query: &str) -> &str {
    query.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
