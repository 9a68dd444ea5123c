// Application orchestration.
//
// Receives user commands from the TUI, runs the query submitter, and pushes
// the resulting view changes back to the TUI as `UiUpdate` messages. At most
// one submission runs at a time; a clear is applied immediately even while a
// submission is pending, and that submission's reply still lands afterwards.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use solve_core::{QuerySubmitter, SolveClient, View};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::protocol::{UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// InFlight
// ---------------------------------------------------------------------------

/// Which submission currently owns the submit control (0 = none).
///
/// Claimed by the orchestrator when it spawns a submission, so a second
/// Solve that races the first task's startup is still refused. Released by
/// that submission only; a stale release is a no-op.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicU64>);

impl InFlight {
    /// Claim the control for `id`. False if another submission holds it.
    pub fn claim(&self, id: u64) -> bool {
        self.0
            .compare_exchange(0, id, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Release the control if `id` still holds it.
    pub fn release(&self, id: u64) {
        let _ = self
            .0
            .compare_exchange(id, 0, Ordering::SeqCst, Ordering::SeqCst);
    }

    #[cfg(test)]
    fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst) != 0
    }
}

// ---------------------------------------------------------------------------
// ChannelView
// ---------------------------------------------------------------------------

/// `View` that forwards every change to the TUI over a channel.
///
/// Sends are synchronous so the submit lock can be released from `Drop`. A
/// closed channel means the TUI is gone, so failed sends are dropped.
#[derive(Clone)]
pub struct ChannelView {
    tx: mpsc::UnboundedSender<UiUpdate>,
    slot: Option<(InFlight, u64)>,
}

impl ChannelView {
    pub fn new(tx: mpsc::UnboundedSender<UiUpdate>) -> Self {
        Self { tx, slot: None }
    }

    /// Release submission `id` from `in_flight` when the submit control is
    /// re-enabled, before the TUI hears about it.
    pub fn tracking(mut self, in_flight: InFlight, id: u64) -> Self {
        self.slot = Some((in_flight, id));
        self
    }

    fn push(&self, update: UiUpdate) {
        if self.tx.send(update).is_err() {
            debug!("UI channel closed, dropping view update");
        }
    }
}

impl View for ChannelView {
    fn set_query(&mut self, text: &str) {
        self.push(UiUpdate::QueryText(text.to_string()));
    }

    fn alert(&mut self, message: &str) {
        self.push(UiUpdate::Alert(message.to_string()));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        if enabled {
            if let Some((in_flight, id)) = &self.slot {
                in_flight.release(*id);
            }
        }
        self.push(UiUpdate::SubmitEnabled(enabled));
    }

    fn set_submit_label(&mut self, label: &str) {
        self.push(UiUpdate::SubmitLabel(label.to_string()));
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.push(UiUpdate::ResultVisible(visible));
    }

    fn set_result_text(&mut self, text: &str) {
        self.push(UiUpdate::ResultText(text.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the orchestrator until `Quit` arrives or the command channel closes.
pub async fn run<C>(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::UnboundedSender<UiUpdate>,
    submitter: Arc<QuerySubmitter<C>>,
) -> anyhow::Result<()>
where
    C: SolveClient + 'static,
{
    info!("Application event loop started");

    let in_flight = InFlight::default();
    let mut next_id: u64 = 0;
    let mut task: Option<JoinHandle<()>> = None;

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            UserCommand::Submit(query) => {
                next_id += 1;
                let id = next_id;
                if !in_flight.claim(id) {
                    debug!("submit ignored: a request is already in flight");
                    continue;
                }
                let submitter = Arc::clone(&submitter);
                let slot = in_flight.clone();
                let mut view = ChannelView::new(ui_tx.clone()).tracking(slot.clone(), id);
                task = Some(tokio::spawn(async move {
                    submitter.submit(&query, &mut view).await;
                    // Blank queries return without ever taking the lock.
                    slot.release(id);
                }));
            }
            UserCommand::Clear => {
                let mut view = ChannelView::new(ui_tx.clone());
                submitter.clear(&mut view);
            }
            UserCommand::Quit => {
                info!("Quit command received, shutting down");
                break;
            }
        }
    }

    if let Some(task) = task {
        if !task.is_finished() {
            debug!("abandoning in-flight request on shutdown");
            task.abort();
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
