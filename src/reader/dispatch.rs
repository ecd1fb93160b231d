//! Request execution
//!
//! [`execute`] performs a [`Request`] against a [`BookApi`] synchronously.
//! [`Dispatcher`] runs it on a worker thread and delivers the [`Outcome`]
//! over a channel, so the UI thread never blocks on the network.

use super::navigator::{BookDetails, Outcome, Request};
use crate::api::{ApiError, BookApi};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Perform `request` on the calling thread
pub fn execute(api: &dyn BookApi, request: Request) -> Outcome {
    match request {
        Request::Library { token } => Outcome::Library {
            token,
            result: api.books(),
        },
        Request::Chapters { token, book } => {
            let result = fetch_book_details(api, &book);
            Outcome::Chapters {
                token,
                book,
                result,
            }
        }
        Request::Content {
            token,
            book,
            chapter,
        } => Outcome::Content {
            token,
            chapter,
            result: api.content(&book, chapter),
        },
    }
}

/// Fetch the chapter list and metadata of `book` concurrently
///
/// Only the chapter list is required. A metadata failure, including a
/// panicking metadata worker, yields `metadata: None`.
///
/// # Errors
///
/// Returns the chapter request's `ApiError` if the chapter list fails.
pub fn fetch_book_details(api: &dyn BookApi, book: &str) -> Result<BookDetails, ApiError> {
    thread::scope(|scope| {
        let metadata = scope.spawn(|| api.metadata(book));
        let chapters = api.chapters(book);

        let metadata = match metadata.join() {
            Ok(Ok(metadata)) => Some(metadata),
            Ok(Err(e)) => {
                tracing::debug!(book, "metadata unavailable: {e}");
                None
            }
            Err(_) => {
                tracing::warn!(book, "metadata worker panicked");
                None
            }
        };

        Ok(BookDetails {
            chapters: chapters?,
            metadata,
        })
    })
}

/// Runs requests on worker threads
pub struct Dispatcher {
    api: Arc<dyn BookApi>,
    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(api: Arc<dyn BookApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx }
    }

    /// Start `request` in the background
    ///
    /// # Errors
    ///
    /// Returns the spawn error if no worker thread can be started. The
    /// request is dropped and no outcome will arrive for it.
    pub fn submit(&self, request: Request) -> io::Result<()> {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        thread::Builder::new()
            .name("readr-fetch".to_string())
            .spawn(move || {
                let outcome = execute(api.as_ref(), request);
                let _ = tx.send(outcome);
            })
            .map(drop)
            .inspect_err(|e| tracing::error!("Failed to spawn fetch worker: {e}"))
    }

    /// Every outcome that has arrived so far
    #[must_use]
    pub fn drain(&self) -> Vec<Outcome> {
        self.rx.try_iter().collect()
    }

    /// Wait up to `timeout` for the next outcome
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Outcome> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }
}
