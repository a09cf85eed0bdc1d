use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::console::{Request, Response, execute};
use crate::remote::ConsoleApi;

/// Runs every request on its own thread. Responses come back over a channel in
/// completion order, which is not necessarily submission order.
pub(super) struct Worker<A> {
    api: A,
    project_id: String,
    tx: Sender<Response>,
    rx: Receiver<Response>,
    pending: usize,
}

impl<A> Worker<A>
where
    A: ConsoleApi + Clone + Send + 'static,
{
    pub(super) fn new(api: A, project_id: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            api,
            project_id: project_id.into(),
            tx,
            rx,
            pending: 0,
        }
    }

    pub(super) fn submit(&mut self, req: Request) {
        let api = self.api.clone();
        let project_id = self.project_id.clone();
        let tx = self.tx.clone();
        self.pending += 1;
        thread::spawn(move || {
            let resp = execute(&api, &project_id, req);
            // Send fails only after the console has exited.
            let _ = tx.send(resp);
        });
    }

    /// Everything that has completed so far; never blocks.
    pub(super) fn drain(&mut self) -> Vec<Response> {
        let mut out = Vec::new();
        while let Ok(resp) = self.rx.try_recv() {
            self.pending = self.pending.saturating_sub(1);
            out.push(resp);
        }
        out
    }

    pub(super) fn pending(&self) -> usize {
        self.pending
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/worker_tests.rs"]
mod tests;
