//! Instagram JSON export parser.
//!
//! Instagram message exports (from Meta's "Download Your Data") are JSON
//! documents with a top-level `messages` array. Each entry carries an
//! epoch-millisecond timestamp, the sender's display name, optional text
//! content, and optional `photos` / `videos` / `audio_files` attachment
//! collections.
//!
//! Two quirks are handled here:
//!
//! - Meta exports UTF-8 text encoded as if it were ISO-8859-1, so non-ASCII
//!   content arrives as Mojibake ("Привет" becomes "ÐŸÑ€Ð¸Ð²ÐµÑ‚"). The fix
//!   is on by default, see [`InstagramConfig`].
//! - A missing `messages` array yields an empty event list; only JSON that
//!   fails to parse at all is a terminal error.

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::config::InstagramConfig;
use crate::error::{DuologError, Result};
use crate::event::{EventKind, MessageEvent, Platform};
use crate::identity::Identities;

/// Instagram export wrapper.
#[derive(Debug, Deserialize)]
pub struct InstagramExport {
    #[serde(default)]
    pub messages: Vec<InstagramRawMessage>,
}

/// Raw Instagram message structure for deserialization.
#[derive(Debug, Deserialize)]
pub struct InstagramRawMessage {
    pub sender_name: String,
    pub timestamp_ms: i64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub photos: Option<Vec<InstagramMedia>>,
    #[serde(default)]
    pub videos: Option<Vec<InstagramMedia>>,
    #[serde(default)]
    pub audio_files: Option<Vec<InstagramMedia>>,
}

/// Instagram media (photo/video/audio) structure.
#[derive(Debug, Deserialize)]
pub struct InstagramMedia {
    #[serde(default)]
    pub uri: Option<String>,
}

/// Fix Meta's broken encoding (Mojibake).
///
/// Each UTF-8 byte of the original text is stored as a separate Unicode
/// codepoint. Reversing it means taking every char as its byte value and
/// reinterpreting the byte sequence as UTF-8. Strings that don't survive the
/// round trip are returned unchanged.
pub fn fix_mojibake_encoding(s: &str) -> String {
    let bytes: Vec<u8> = s.chars().map(|c| c as u8).collect();
    String::from_utf8(bytes).unwrap_or_else(|_| s.to_string())
}

/// Converts an epoch-millisecond timestamp to a UTC instant.
pub fn parse_ms_timestamp(timestamp_ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(timestamp_ms).single()
}

/// Parser for Instagram JSON exports.
///
/// # Example
///
/// ```
/// use duolog::identity::Identities;
/// use duolog::parsers::InstagramParser;
///
/// let ids = Identities::new("alice_ig", "bob_ig");
/// let parser = InstagramParser::new();
/// let json = r#"{"messages": [{"sender_name": "alice_ig", "timestamp_ms": 1705315800000, "content": "Hey"}]}"#;
/// let events = parser.parse_str(json, &ids)?;
/// assert_eq!(events.len(), 1);
/// # Ok::<(), duolog::DuologError>(())
/// ```
pub struct InstagramParser {
    config: InstagramConfig,
}

impl InstagramParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: InstagramConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: InstagramConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &InstagramConfig {
        &self.config
    }

    /// Parses one export document.
    ///
    /// Events are emitted in the export's own array order; the global sort
    /// across files belongs to the pipeline core.
    ///
    /// # Errors
    ///
    /// Returns [`DuologError::Parse`] when the document is not valid JSON.
    pub fn parse_str(&self, content: &str, identities: &Identities) -> Result<Vec<MessageEvent>> {
        let export: InstagramExport =
            serde_json::from_str(content).map_err(|e| DuologError::instagram_parse(e, None))?;

        Ok(export
            .messages
            .iter()
            .filter_map(|msg| self.convert(msg, identities))
            .collect())
    }

    fn convert(&self, msg: &InstagramRawMessage, identities: &Identities) -> Option<MessageEvent> {
        let Some(timestamp) = parse_ms_timestamp(msg.timestamp_ms) else {
            warn!(
                "skipping Instagram message with unrepresentable timestamp_ms: {}",
                msg.timestamp_ms
            );
            return None;
        };

        let sender_name = self.fixed(&msg.sender_name);
        let sender_id = identities.label(identities.resolve_instagram(&sender_name));

        // Attachment presence drives classification, checked photos first.
        // An empty collection still classifies; the count is just 0.
        let (kind, media_count, content) = if let Some(photos) = &msg.photos {
            let n = photos.len() as u32;
            (EventKind::Image, n, format!("[{n} photo(s)]"))
        } else if let Some(videos) = &msg.videos {
            let n = videos.len() as u32;
            (EventKind::Video, n, format!("[{n} video(s)]"))
        } else if msg.audio_files.is_some() {
            (EventKind::Voice, 0, "[Voice message]".to_string())
        } else {
            let text = msg.content.as_deref().unwrap_or_default();
            (EventKind::Text, 0, self.fixed(text))
        };

        Some(
            MessageEvent::new(timestamp, sender_id, Platform::Instagram, kind, content)
                .with_media_count(media_count),
        )
    }

    fn fixed(&self, s: &str) -> String {
        if self.config.fix_encoding {
            fix_mojibake_encoding(s)
        } else {
            s.to_string()
        }
    }
}

impl Default for InstagramParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Identities {
        Identities::new("alice_ig", "bob_ig")
    }

    #[test]
    fn test_parse_basic_text() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [{"sender_name": "alice_ig", "timestamp_ms": 1705315800000, "content": "Hello"}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sender_id, "alice_ig");
        assert_eq!(events[0].content, "Hello");
        assert_eq!(events[0].kind, EventKind::Text);
        assert_eq!(events[0].platform, Platform::Instagram);
        assert!(events[0].call_duration_seconds.is_none());
    }

    #[test]
    fn test_photos_classified_as_image_with_count() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [{"sender_name": "alice_ig", "timestamp_ms": 1705315800000, "photos": [{}, {}]}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].kind, EventKind::Image);
        assert_eq!(events[0].media_count, 2);
        assert_eq!(events[0].content, "[2 photo(s)]");
    }

    #[test]
    fn test_photos_override_text_content() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [{"sender_name": "alice_ig", "timestamp_ms": 1705315800000, "content": "look", "photos": [{"uri": "a.jpg"}]}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].content, "[1 photo(s)]");
    }

    #[test]
    fn test_videos_classified() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [{"sender_name": "bob_ig", "timestamp_ms": 1705315800000, "videos": [{"uri": "v.mp4"}]}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].kind, EventKind::Video);
        assert_eq!(events[0].media_count, 1);
        assert_eq!(events[0].content, "[1 video(s)]");
    }

    #[test]
    fn test_audio_classified_as_voice() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [{"sender_name": "bob_ig", "timestamp_ms": 1705315800000, "audio_files": [{"uri": "a.aac"}]}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].kind, EventKind::Voice);
        assert_eq!(events[0].media_count, 0);
        assert_eq!(events[0].content, "[Voice message]");
    }

    #[test]
    fn test_empty_photo_collection_still_classifies() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [{"sender_name": "alice_ig", "timestamp_ms": 1705315800000, "photos": []}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].kind, EventKind::Image);
        assert_eq!(events[0].media_count, 0);
        assert_eq!(events[0].content, "[0 photo(s)]");
    }

    #[test]
    fn test_missing_content_becomes_empty_text() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [{"sender_name": "alice_ig", "timestamp_ms": 1705315800000}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].kind, EventKind::Text);
        assert_eq!(events[0].content, "");
    }

    #[test]
    fn test_array_order_preserved() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [
            {"sender_name": "alice_ig", "timestamp_ms": 1705315920000, "content": "newest"},
            {"sender_name": "bob_ig", "timestamp_ms": 1705315800000, "content": "oldest"}
        ]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].content, "newest");
        assert_eq!(events[1].content, "oldest");
    }

    #[test]
    fn test_unknown_sender_falls_back_to_person_b() {
        let parser = InstagramParser::new();
        let json = r#"{"messages": [{"sender_name": "stranger", "timestamp_ms": 1705315800000, "content": "hi"}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].sender_id, "bob_ig");
    }

    #[test]
    fn test_missing_messages_array_yields_empty() {
        let parser = InstagramParser::new();
        let events = parser.parse_str(r#"{"participants": []}"#, &ids()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_malformed_json_is_terminal() {
        let parser = InstagramParser::new();
        let result = parser.parse_str("not json at all", &ids());
        assert!(result.is_err());
        assert!(result.unwrap_err().is_parse());
    }

    #[test]
    fn test_fix_encoding_ascii_passthrough() {
        assert_eq!(fix_mojibake_encoding("Hello"), "Hello");
        assert_eq!(fix_mojibake_encoding("Test 123"), "Test 123");
    }

    #[test]
    fn test_fix_encoding_mojibake() {
        // "é" exported as its UTF-8 bytes read through Latin-1
        assert_eq!(fix_mojibake_encoding("caf\u{00C3}\u{00A9}"), "café");
    }

    #[test]
    fn test_fix_encoding_can_be_disabled() {
        let parser =
            InstagramParser::with_config(InstagramConfig::new().with_fix_encoding(false));
        let json = r#"{"messages": [{"sender_name": "alice_ig", "timestamp_ms": 1705315800000, "content": "cafÃ©"}]}"#;
        let events = parser.parse_str(json, &ids()).unwrap();
        assert_eq!(events[0].content, "caf\u{00C3}\u{00A9}");
    }

    #[test]
    fn test_parse_ms_timestamp() {
        let ts = parse_ms_timestamp(1705315800000).unwrap();
        assert_eq!(ts, Utc.timestamp_millis_opt(1705315800000).unwrap());
        assert!(parse_ms_timestamp(i64::MAX).is_none());
    }
}
