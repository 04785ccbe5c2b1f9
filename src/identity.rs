//! Canonical two-party identities and sender resolution.
//!
//! The system models exactly one two-person conversation. Every raw sender
//! label from an export is folded onto one of two canonical identities by a
//! closed two-way classifier — there is no registry of participants and no
//! third bucket.
//!
//! The resolution rules are deliberately asymmetric between formats because
//! the export shapes differ:
//!
//! - WhatsApp: a trimmed exact match against the personB label selects
//!   [`Participant::PersonB`]; **everything else** (including group members
//!   and renamed contacts) falls back to personA.
//! - Instagram: an exact match against the personA label selects PersonA;
//!   everything else falls back to personB.
//!
//! The fallback buckets are a known misattribution risk for group chats and
//! inconsistent display names. They are preserved as-is rather than guessed
//! around; callers who need stricter matching should pre-clean their exports.

use serde::{Deserialize, Serialize};

/// One of the two parties in the conversation.
///
/// A closed enum by design: the domain has exactly two participants, so
/// sender resolution is a binary classification, not an open dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    PersonA,
    PersonB,
}

/// The caller-supplied canonical labels for the two participants.
///
/// Labels are opaque strings (display names, "You"/"Partner", etc.). They are
/// trimmed once at construction; resolution trims the raw side as well.
///
/// # Example
///
/// ```
/// use duolog::identity::{Identities, Participant};
///
/// let ids = Identities::new("You", "Sam");
/// assert_eq!(ids.resolve_whatsapp("Sam"), Participant::PersonB);
/// assert_eq!(ids.resolve_whatsapp("You"), Participant::PersonA);
/// // unknown names fold into personA on WhatsApp
/// assert_eq!(ids.resolve_whatsapp("Aunt Carol"), Participant::PersonA);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identities {
    person_a: String,
    person_b: String,
}

impl Identities {
    /// Creates a new identity pair, trimming surrounding whitespace.
    pub fn new(person_a: impl Into<String>, person_b: impl Into<String>) -> Self {
        Self {
            person_a: person_a.into().trim().to_string(),
            person_b: person_b.into().trim().to_string(),
        }
    }

    /// Returns the canonical label for a participant.
    pub fn label(&self, participant: Participant) -> &str {
        match participant {
            Participant::PersonA => &self.person_a,
            Participant::PersonB => &self.person_b,
        }
    }

    /// Returns the personA label.
    pub fn person_a(&self) -> &str {
        &self.person_a
    }

    /// Returns the personB label.
    pub fn person_b(&self) -> &str {
        &self.person_b
    }

    /// Resolves a raw WhatsApp sender label.
    ///
    /// Trimmed exact match against personB selects PersonB; any other value
    /// — personA's own label, unrecognized names, group members — selects
    /// PersonA.
    pub fn resolve_whatsapp(&self, raw: &str) -> Participant {
        if raw.trim() == self.person_b {
            Participant::PersonB
        } else {
            Participant::PersonA
        }
    }

    /// Resolves a raw Instagram sender name.
    ///
    /// Exact match against personA selects PersonA; any other value selects
    /// PersonB. Note the fallback bucket is the opposite of the WhatsApp
    /// rule.
    pub fn resolve_instagram(&self, raw: &str) -> Participant {
        if raw == self.person_a {
            Participant::PersonA
        } else {
            Participant::PersonB
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_trimmed() {
        let ids = Identities::new("  You ", " Sam\t");
        assert_eq!(ids.person_a(), "You");
        assert_eq!(ids.person_b(), "Sam");
        assert_eq!(ids.label(Participant::PersonB), "Sam");
    }

    #[test]
    fn test_whatsapp_exact_match_person_b() {
        let ids = Identities::new("You", "Sam");
        assert_eq!(ids.resolve_whatsapp("Sam"), Participant::PersonB);
        assert_eq!(ids.resolve_whatsapp("  Sam "), Participant::PersonB);
    }

    #[test]
    fn test_whatsapp_fallback_is_person_a() {
        let ids = Identities::new("You", "Sam");
        assert_eq!(ids.resolve_whatsapp("You"), Participant::PersonA);
        assert_eq!(ids.resolve_whatsapp("Aunt Carol"), Participant::PersonA);
        assert_eq!(ids.resolve_whatsapp(""), Participant::PersonA);
    }

    #[test]
    fn test_instagram_exact_match_person_a() {
        let ids = Identities::new("you_ig", "sam_ig");
        assert_eq!(ids.resolve_instagram("you_ig"), Participant::PersonA);
    }

    #[test]
    fn test_instagram_fallback_is_person_b() {
        let ids = Identities::new("you_ig", "sam_ig");
        assert_eq!(ids.resolve_instagram("sam_ig"), Participant::PersonB);
        assert_eq!(ids.resolve_instagram("someone_else"), Participant::PersonB);
    }

    #[test]
    fn test_case_sensitive_matching() {
        let ids = Identities::new("You", "Sam");
        // matching is exact; case differences fall into the format's bucket
        assert_eq!(ids.resolve_whatsapp("sam"), Participant::PersonA);
        assert_eq!(ids.resolve_instagram("YOU"), Participant::PersonB);
    }
}
