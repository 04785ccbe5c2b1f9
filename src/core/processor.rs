//! Processing orchestrator: the pipeline's single boundary entry point.
//!
//! [`process`] accepts one [`ProcessRequest`] — every input the pipeline
//! needs, bundled into a self-contained value — and drives the stages in
//! order: parse each file, concatenate, sort, enrich, aggregate. It is
//! all-or-nothing: the first terminal error (malformed Instagram JSON)
//! aborts the whole invocation with no partial payload, even though
//! individual malformed messages inside a readable file are skipped by the
//! parsers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{InstagramConfig, WhatsAppConfig};
use crate::core::enrich::{enrich, sort_events};
use crate::core::stats::{SummaryStats, summarize};
use crate::error::Result;
use crate::event::MessageEvent;
use crate::identity::Identities;
use crate::parsers::{InstagramParser, WhatsAppParser};

/// A complete processing request: raw file contents, the canonical identity
/// labels, and the parser configurations.
///
/// The request owns everything the pipeline touches, so it can be handed to
/// another thread as a single message (see [`crate::worker`]).
///
/// # Example
///
/// ```
/// use duolog::core::{ProcessRequest, process};
/// use duolog::identity::Identities;
///
/// let request = ProcessRequest::new(Identities::new("Alice", "Bob"))
///     .with_whatsapp_file("[1/2/24, 09:00:00] Alice: Hello");
/// let output = process(&request)?;
/// assert_eq!(output.events.len(), 1);
/// # Ok::<(), duolog::DuologError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Full text of each WhatsApp chat export.
    pub whatsapp_files: Vec<String>,
    /// Full JSON text of each Instagram message export.
    pub instagram_files: Vec<String>,
    /// The two canonical identity labels.
    pub identities: Identities,
    /// WhatsApp parser configuration.
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
    /// Instagram parser configuration.
    #[serde(default)]
    pub instagram: InstagramConfig,
}

impl ProcessRequest {
    /// Creates an empty request for the given identity pair.
    pub fn new(identities: Identities) -> Self {
        Self {
            whatsapp_files: Vec::new(),
            instagram_files: Vec::new(),
            identities,
            whatsapp: WhatsAppConfig::default(),
            instagram: InstagramConfig::default(),
        }
    }

    /// Adds one WhatsApp export's content.
    #[must_use]
    pub fn with_whatsapp_file(mut self, content: impl Into<String>) -> Self {
        self.whatsapp_files.push(content.into());
        self
    }

    /// Adds one Instagram export's content.
    #[must_use]
    pub fn with_instagram_file(mut self, content: impl Into<String>) -> Self {
        self.instagram_files.push(content.into());
        self
    }

    /// Sets the WhatsApp parser configuration.
    #[must_use]
    pub fn with_whatsapp_config(mut self, config: WhatsAppConfig) -> Self {
        self.whatsapp = config;
        self
    }

    /// Sets the Instagram parser configuration.
    #[must_use]
    pub fn with_instagram_config(mut self, config: InstagramConfig) -> Self {
        self.instagram = config;
        self
    }
}

/// The success payload of one processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingOutput {
    /// The sorted, enriched event sequence.
    pub events: Vec<MessageEvent>,
    /// Summary statistics; absent when the event sequence is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub stats: Option<SummaryStats>,
}

/// Runs the full pipeline for one request.
///
/// Stages are strictly sequential; the sort is the only sort and completes
/// before any derived field is computed, because both derivations depend on
/// final sequence position.
///
/// # Errors
///
/// Returns the first terminal error encountered (currently only malformed
/// Instagram JSON). No partial results are delivered.
pub fn process(request: &ProcessRequest) -> Result<ProcessingOutput> {
    let whatsapp = WhatsAppParser::with_config(request.whatsapp.clone());
    let instagram = InstagramParser::with_config(request.instagram.clone());

    let mut events: Vec<MessageEvent> = Vec::new();

    for content in &request.whatsapp_files {
        events.extend(whatsapp.parse_str(content, &request.identities));
    }
    for content in &request.instagram_files {
        events.extend(instagram.parse_str(content, &request.identities)?);
    }
    debug!(
        "parsed {} events from {} WhatsApp and {} Instagram file(s)",
        events.len(),
        request.whatsapp_files.len(),
        request.instagram_files.len()
    );

    sort_events(&mut events);
    enrich(&mut events);
    let stats = summarize(&events);

    Ok(ProcessingOutput { events, stats })
}
