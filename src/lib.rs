//! # duolog
//!
//! A Rust library for normalizing WhatsApp and Instagram chat exports from a
//! single two-person conversation into one unified, time-ordered event
//! stream with summary statistics — the ingestion core behind a personal
//! relationship-analytics dashboard.
//!
//! ## Overview
//!
//! duolog handles the messy part of chat-history analytics:
//!
//! - **WhatsApp** — line-oriented TXT exports with locale-dependent date
//!   formats and multi-line message continuations
//! - **Instagram** — JSON message exports with epoch-millisecond timestamps,
//!   attachment collections, and Meta's broken text encoding
//!
//! Both become [`MessageEvent`]s attributed to one of exactly two canonical
//! identities, merged across any number of files, sorted, and enriched with
//! per-event signals (local hour-of-day, reply latency) before a single-pass
//! aggregation into [`SummaryStats`](core::SummaryStats).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use duolog::core::{ProcessRequest, process};
//! use duolog::identity::Identities;
//!
//! fn main() -> duolog::Result<()> {
//!     let request = ProcessRequest::new(Identities::new("You", "Partner"))
//!         .with_whatsapp_file(std::fs::read_to_string("whatsapp_chat.txt")?)
//!         .with_instagram_file(std::fs::read_to_string("message_1.json")?);
//!
//!     let output = process(&request)?;
//!
//!     println!("{} events", output.events.len());
//!     if let Some(stats) = &output.stats {
//!         println!("{:.1} messages/day", stats.messages_per_day);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Background Execution
//!
//! The pipeline is a CPU-bound batch computation with no partial results, so
//! it runs well off the interactive thread. [`worker::PipelineWorker`] wraps
//! it in a request/response channel pair:
//!
//! ```rust,no_run
//! use duolog::core::ProcessRequest;
//! use duolog::identity::Identities;
//! use duolog::worker::PipelineWorker;
//!
//! # fn main() -> duolog::Result<()> {
//! let worker = PipelineWorker::spawn();
//! let request = ProcessRequest::new(Identities::new("You", "Partner"))
//!     .with_whatsapp_file(std::fs::read_to_string("whatsapp_chat.txt")?);
//! let output = worker.process(request)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`event`] — [`MessageEvent`], [`Platform`](event::Platform),
//!   [`EventKind`](event::EventKind)
//! - [`identity`] — [`Identities`](identity::Identities), the closed
//!   two-party sender resolution
//! - [`parsers`] — [`WhatsAppParser`](parsers::WhatsAppParser),
//!   [`InstagramParser`](parsers::InstagramParser)
//! - [`core`] — ordering, enrichment, aggregation, and the
//!   [`process`](core::process) orchestrator
//! - [`worker`] — background pipeline thread with channel-based
//!   request/response
//! - [`output`] — JSON payload writers for external persistence
//! - [`config`] — parser configuration types
//! - [`error`] — unified error types ([`DuologError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod identity;
pub mod output;
pub mod parsers;
pub mod worker;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export the main types at the crate root for convenience
pub use error::{DuologError, Result};
pub use event::MessageEvent;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use duolog::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageEvent;
    pub use crate::config::{DateOrder, InstagramConfig, WhatsAppConfig};
    pub use crate::core::{
        ProcessRequest, ProcessingOutput, SummaryStats, enrich, process, sort_events, summarize,
    };
    pub use crate::error::{DuologError, Result};
    pub use crate::event::{EventKind, Platform};
    pub use crate::identity::{Identities, Participant};
    pub use crate::parsers::{InstagramParser, WhatsAppParser};
    pub use crate::worker::PipelineWorker;
}
