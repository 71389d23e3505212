use std::{
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};

use quadra_explain::{Explainer, FALLBACK, explain_or_fallback};

use crate::state::Ticket;

/// The text returned for a [`Ticket`].
#[derive(Debug, Clone)]
pub struct Answer {
    pub ticket: Ticket,
    pub text: String,
}

/// Runs explanation requests on background threads.
///
/// Each request gets its own thread; answers are collected with
/// [`poll`](Self::poll) from the UI thread.
pub struct ExplainWorker {
    explainer: Arc<dyn Explainer>,
    tx: Sender<Answer>,
    rx: Receiver<Answer>,
}

impl ExplainWorker {
    #[must_use]
    pub fn new(explainer: Arc<dyn Explainer>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { explainer, tx, rx }
    }

    /// Starts a request. The answer always arrives, as fallback text on failure.
    pub fn request(&self, ticket: Ticket) {
        let explainer = Arc::clone(&self.explainer);
        let tx = self.tx.clone();

        let spawned = thread::Builder::new()
            .name("quadra-explain".to_owned())
            .spawn(move || {
                let text = explain_or_fallback(explainer.as_ref(), &ticket.coefficients);
                // The receiver is gone only when the app is shutting down.
                let _ = tx.send(Answer { ticket, text });
            });

        if let Err(err) = spawned {
            tracing::warn!(error = %err, "could not start explanation thread");
            let _ = self.tx.send(Answer {
                ticket,
                text: FALLBACK.to_owned(),
            });
        }
    }

    /// Returns a finished answer, if any, without blocking.
    #[must_use]
    pub fn poll(&self) -> Option<Answer> {
        self.rx.try_recv().ok()
    }
}
