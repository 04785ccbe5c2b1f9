//! Background pipeline worker.
//!
//! The pipeline is CPU-bound and has no dependency on its caller once the
//! inputs are handed over, so it suits execution off the interactive thread.
//! This module reproduces that boundary as an explicit request/response
//! contract rather than a function call: a dedicated thread owns the
//! pipeline, a request channel carries complete [`ProcessRequest`] messages
//! in, and a response channel carries one complete result per request back
//! out. No partial results, no shared mutable state.
//!
//! Requests submitted while one is in flight queue in the channel and run
//! sequentially. Dropping the handle disconnects the request channel; the
//! worker thread drains nothing further and is joined. There are no internal
//! cancellation checkpoints — an in-flight run completes or is abandoned
//! wholesale with its thread.
//!
//! # Example
//!
//! ```
//! use duolog::identity::Identities;
//! use duolog::core::ProcessRequest;
//! use duolog::worker::PipelineWorker;
//!
//! let worker = PipelineWorker::spawn();
//! let request = ProcessRequest::new(Identities::new("Alice", "Bob"))
//!     .with_whatsapp_file("[1/2/24, 09:00:00] Alice: Hello");
//!
//! let output = worker.process(request)?;
//! assert_eq!(output.events.len(), 1);
//! # Ok::<(), duolog::DuologError>(())
//! ```

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::JoinHandle;

use tracing::debug;

use crate::core::processor::{ProcessRequest, ProcessingOutput, process};
use crate::error::{DuologError, Result};

/// Handle to a background pipeline thread.
///
/// Submitting and receiving are separate so a caller can hand off a request
/// and pick the response up later; [`process`](Self::process) combines both
/// for the common blocking case.
pub struct PipelineWorker {
    requests: Option<Sender<ProcessRequest>>,
    responses: Receiver<Result<ProcessingOutput>>,
    handle: Option<JoinHandle<()>>,
}

impl PipelineWorker {
    /// Spawns the worker thread.
    pub fn spawn() -> Self {
        let (request_tx, request_rx) = channel::<ProcessRequest>();
        let (response_tx, response_rx) = channel::<Result<ProcessingOutput>>();

        let handle = std::thread::spawn(move || {
            for request in request_rx {
                let result = process(&request);
                if response_tx.send(result).is_err() {
                    // Receiver gone; nobody is waiting for results anymore.
                    break;
                }
            }
            debug!("pipeline worker shutting down");
        });

        Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
        }
    }

    /// Submits a request without waiting for its result.
    ///
    /// # Errors
    ///
    /// Returns [`DuologError::WorkerClosed`] if the worker thread has exited.
    pub fn submit(&self, request: ProcessRequest) -> Result<()> {
        self.requests
            .as_ref()
            .ok_or(DuologError::WorkerClosed)?
            .send(request)
            .map_err(|_| DuologError::WorkerClosed)
    }

    /// Blocks until the next response arrives.
    ///
    /// Responses come back in submission order, one per request.
    ///
    /// # Errors
    ///
    /// Returns [`DuologError::WorkerClosed`] if the worker thread has exited,
    /// or the run's own error if processing failed.
    pub fn recv(&self) -> Result<ProcessingOutput> {
        self.responses.recv().map_err(|_| DuologError::WorkerClosed)?
    }

    /// Submits a request and blocks for its result.
    pub fn process(&self, request: ProcessRequest) -> Result<ProcessingOutput> {
        self.submit(request)?;
        self.recv()
    }
}

impl Drop for PipelineWorker {
    fn drop(&mut self) {
        // Disconnect the request channel so the worker loop ends, then join.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
