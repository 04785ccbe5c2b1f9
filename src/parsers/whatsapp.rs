//! WhatsApp TXT export parser.
//!
//! WhatsApp chat exports are line-oriented: each message starts with a header
//! line carrying a date, a time, and the sender, and may continue over any
//! number of header-less follow-up lines. Two header grammars occur in the
//! wild, depending on export platform:
//!
//! - Bracketed: `[1/15/24, 10:30:45] Alice: Hello`
//! - Dashed: `15/1/2024, 10:30 - Alice: Hello`
//!
//! Both are attempted for every line, bracketed first.
//!
//! Numeric dates are ambiguous between month-first and day-first locales.
//! The parser tries the configured preferred ordering literally and, on
//! failure, retries with the first two date components swapped. A date that
//! fails both attempts skips that single message (warn-logged) — it never
//! fails the file.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use tracing::warn;

use crate::config::{DateOrder, WhatsAppConfig};
use crate::event::{EventKind, MessageEvent, Platform};
use crate::identity::Identities;

/// Bracketed header: `[1/15/24, 10:30:45] Sender: Message`
const BRACKETED_PATTERN: &str =
    r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}:\d{2})\]\s([^:]+):\s(.+)";

/// Dashed header: `15/1/2024, 10:30 - Sender: Message`
const DASHED_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2})\s-\s([^:]+):\s(.+)";

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```
/// use duolog::identity::Identities;
/// use duolog::parsers::WhatsAppParser;
///
/// let ids = Identities::new("Alice", "Bob");
/// let parser = WhatsAppParser::new();
/// let events = parser.parse_str("[1/2/24, 09:00:00] Alice: Hello", &ids);
/// assert_eq!(events.len(), 1);
/// ```
pub struct WhatsAppParser {
    config: WhatsAppConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: WhatsAppConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: WhatsAppConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }

    /// Parses the full text of one exported chat log.
    ///
    /// Returns provisional events in file order. Never fails: a file with no
    /// recognizable headers yields an empty list, and individual messages
    /// with unparseable dates are skipped.
    pub fn parse_str(&self, content: &str, identities: &Identities) -> Vec<MessageEvent> {
        let bracketed = Regex::new(BRACKETED_PATTERN).unwrap();
        let dashed = Regex::new(DASHED_PATTERN).unwrap();

        let mut events: Vec<MessageEvent> = Vec::new();
        let mut current: Option<MessageEvent> = None;

        for line in content.lines() {
            let caps = bracketed.captures(line).or_else(|| dashed.captures(line));

            let Some(caps) = caps else {
                // Continuation of the open message; orphan lines before the
                // first header are dropped.
                if let Some(open) = current.as_mut() {
                    open.content.push('\n');
                    open.content.push_str(line.trim());
                }
                continue;
            };

            // New header: finalize the open message before anything else, so
            // a failed date below skips exactly one message.
            if let Some(prev) = current.take() {
                events.push(prev);
            }

            let date_str = &caps[1];
            let time_str = &caps[2];
            let sender = caps[3].trim();
            let text = &caps[4];

            if self.config.skip_system_messages && is_system_message(sender, text) {
                continue;
            }

            let Some(timestamp) = parse_timestamp(date_str, time_str, self.config.date_order)
            else {
                warn!("skipping WhatsApp message with unparseable date: {date_str}, {time_str}");
                continue;
            };

            let sender_id = identities.label(identities.resolve_whatsapp(sender));
            let (kind, media_count) = classify(text);

            current = Some(
                MessageEvent::new(timestamp, sender_id, Platform::WhatsApp, kind, text.trim())
                    .with_media_count(media_count),
            );
        }

        if let Some(last) = current {
            events.push(last);
        }

        events
    }
}

impl Default for WhatsAppParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Format strings tried for the preferred component ordering.
fn date_parse_formats(order: DateOrder) -> &'static [&'static str] {
    match order {
        DateOrder::MonthFirst => &[
            "%m/%d/%y, %H:%M:%S",
            "%m/%d/%y, %H:%M",
            "%m/%d/%Y, %H:%M:%S",
            "%m/%d/%Y, %H:%M",
        ],
        DateOrder::DayFirst => &[
            "%d/%m/%y, %H:%M:%S",
            "%d/%m/%y, %H:%M",
            "%d/%m/%Y, %H:%M:%S",
            "%d/%m/%Y, %H:%M",
        ],
    }
}

fn try_parse(date_str: &str, time_str: &str, order: DateOrder) -> Option<DateTime<Utc>> {
    let datetime_str = format!("{date_str}, {time_str}");
    for format in date_parse_formats(order) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&datetime_str, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Parses a header date/time, retrying with the first two numeric components
/// swapped when the literal string does not parse.
///
/// The retry is a heuristic: a date that is valid under both orderings (e.g.
/// `03/04/2024`) silently resolves to the preferred ordering.
fn parse_timestamp(date_str: &str, time_str: &str, order: DateOrder) -> Option<DateTime<Utc>> {
    if let Some(ts) = try_parse(date_str, time_str, order) {
        return Some(ts);
    }

    let parts: Vec<&str> = date_str.split('/').collect();
    if parts.len() == 3 {
        let swapped = format!("{}/{}/{}", parts[1], parts[0], parts[2]);
        return try_parse(&swapped, time_str, order);
    }

    None
}

/// Classifies message content against the fixed marker vocabulary.
///
/// Best-effort: the markers cover common English export wording, not every
/// locale. Returns the kind and the media count (1 for image/video).
fn classify(content: &str) -> (EventKind, u32) {
    let lower = content.to_lowercase();

    if lower.contains("<media omitted>") || lower.contains("image omitted") {
        (EventKind::Image, 1)
    } else if lower.contains("audio omitted") || lower.contains("voice message") {
        (EventKind::Voice, 0)
    } else if lower.contains("video omitted") {
        (EventKind::Video, 1)
    } else if lower.contains("missed voice call") || lower.contains("missed video call") {
        (EventKind::Call, 0)
    } else {
        (EventKind::Text, 0)
    }
}

/// Check if a header line is a WhatsApp service notice rather than a real
/// message (encryption banner, group membership changes, etc.).
fn is_system_message(sender: &str, content: &str) -> bool {
    let system_indicators = [
        "messages and calls are end-to-end encrypted",
        "created group",
        "added",
        "removed",
        "changed the subject",
        "changed this group's icon",
        "changed the group description",
        "changed their phone number",
        "joined using this group's invite link",
        "security code changed",
        "turned on disappearing messages",
        "turned off disappearing messages",
    ];

    let content_lower = content.to_lowercase();
    for indicator in &system_indicators {
        if content_lower.contains(indicator) {
            return true;
        }
    }

    let sender_lower = sender.to_lowercase();
    sender.trim().is_empty() || sender_lower.contains("whatsapp") || sender_lower.contains("system")
}
