//! Canonical message event type shared by all pipeline stages.
//!
//! This module provides [`MessageEvent`], the normalized representation of a
//! single message from either supported platform. Both format parsers convert
//! their native export shapes into this structure; everything downstream
//! (ordering, enrichment, aggregation) operates on it exclusively.
//!
//! # Overview
//!
//! An event consists of:
//! - **Source fields**, filled by the parsers: `timestamp`, `sender_id`,
//!   `platform`, `kind`, `content`, `media_count`, `call_duration_seconds`
//! - **Derived fields**, filled by the enricher after the global sort:
//!   `hour_of_day_local`, `reply_latency_seconds`
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use duolog::event::{EventKind, MessageEvent, Platform};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
//! let event = MessageEvent::new(ts, "Alice", Platform::WhatsApp, EventKind::Text, "Hello");
//!
//! assert_eq!(event.sender_id, "Alice");
//! assert_eq!(event.media_count, 0);
//! assert!(event.reply_latency_seconds.is_none());
//! ```
//!
//! ## Serialization
//!
//! Events serialize to the JSON shape the dashboard payload expects: enums
//! are lowercase strings, the message kind travels under the key `type`, and
//! derived fields are omitted until the enricher has populated them.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use duolog::event::{EventKind, MessageEvent, Platform};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
//! let event = MessageEvent::new(ts, "Alice", Platform::Instagram, EventKind::Image, "[2 photo(s)]")
//!     .with_media_count(2);
//!
//! let json = serde_json::to_string(&event)?;
//! assert!(json.contains("\"platform\":\"instagram\""));
//! assert!(json.contains("\"type\":\"image\""));
//! assert!(!json.contains("hour_of_day_local"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source platform of a message event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// WhatsApp TXT chat export
    WhatsApp,
    /// Instagram JSON message export
    Instagram,
}

impl Platform {
    /// Returns the lowercase wire name used in payloads and stat keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::WhatsApp => "whatsapp",
            Platform::Instagram => "instagram",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified kind of a message event.
///
/// Classification is best-effort and substring-based for WhatsApp (export
/// wording varies by locale) and attachment-based for Instagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Plain text message
    Text,
    /// One or more photos
    Image,
    /// One or more videos
    Video,
    /// Voice message / audio attachment
    Voice,
    /// Call record (currently only missed calls are recognized)
    Call,
}

impl EventKind {
    /// Returns the lowercase wire name used in payloads and stat keys.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Text => "text",
            EventKind::Image => "image",
            EventKind::Video => "video",
            EventKind::Voice => "voice",
            EventKind::Call => "call",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized message event from either platform.
///
/// Constructed by the format parsers in file order, then sorted globally and
/// enriched in place. Once the enricher has run, events are treated as
/// immutable: the aggregator and all external consumers only read them.
///
/// | Field | Filled by | Notes |
/// |-------|-----------|-------|
/// | `timestamp` | parser | UTC-normalized instant |
/// | `sender_id` | parser | one of the two canonical labels, never a raw export name |
/// | `platform` | parser | |
/// | `kind` | parser | serialized under the JSON key `type` |
/// | `content` | parser | synthesized placeholder for media/call events |
/// | `media_count` | parser | 0 for text/voice/call |
/// | `call_duration_seconds` | — | schema field, never populated today |
/// | `hour_of_day_local` | enricher | 0–23 in the runtime's local zone |
/// | `reply_latency_seconds` | enricher | only set when the previous event has a different sender |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// When the message was sent, normalized to UTC.
    pub timestamp: DateTime<Utc>,

    /// Canonical sender label supplied by the caller.
    pub sender_id: String,

    /// Source platform.
    pub platform: Platform,

    /// Classified message kind.
    #[serde(rename = "type")]
    pub kind: EventKind,

    /// Text body, or a placeholder such as `[2 photo(s)]` for media events.
    pub content: String,

    /// Number of attached media items (0 for text/voice/call).
    pub media_count: u32,

    /// Call length in seconds. Neither export format carries this today, so
    /// the field stays `None`; it remains part of the schema for consumers.
    #[serde(default)]
    pub call_duration_seconds: Option<f64>,

    /// Hour component (0–23) of `timestamp` in the viewer's local time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub hour_of_day_local: Option<u8>,

    /// Seconds since the previous event in the sorted sequence, present only
    /// when that event was sent by the other participant.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub reply_latency_seconds: Option<f64>,
}

impl MessageEvent {
    /// Creates a provisional event with no media and no derived fields.
    pub fn new(
        timestamp: DateTime<Utc>,
        sender_id: impl Into<String>,
        platform: Platform,
        kind: EventKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender_id: sender_id.into(),
            platform,
            kind,
            content: content.into(),
            media_count: 0,
            call_duration_seconds: None,
            hour_of_day_local: None,
            reply_latency_seconds: None,
        }
    }

    /// Builder method to set the media count.
    #[must_use]
    pub fn with_media_count(mut self, count: u32) -> Self {
        self.media_count = count;
        self
    }

    /// Returns `true` if this event carries media attachments.
    pub fn is_media(&self) -> bool {
        matches!(self.kind, EventKind::Image | EventKind::Video | EventKind::Voice)
    }

    /// Returns `true` if the enricher marked this event as a reply.
    pub fn is_reply(&self) -> bool {
        self.reply_latency_seconds.is_some()
    }
}
