//! Configuration types for the format parsers.
//!
//! Each platform has its own configuration struct with a `Default` impl and
//! builder-style `with_*` methods:
//!
//! - [`WhatsAppConfig`] — date-component ordering hint, system-message skipping
//! - [`InstagramConfig`] — Meta encoding fix
//!
//! # Example
//!
//! ```
//! use duolog::config::{DateOrder, WhatsAppConfig};
//!
//! let config = WhatsAppConfig::new().with_date_order(DateOrder::DayFirst);
//! assert_eq!(config.date_order, DateOrder::DayFirst);
//! ```

use serde::{Deserialize, Serialize};

/// Preferred ordering of the first two numeric date components in a WhatsApp
/// export.
///
/// Purely numeric dates like `03/04/2024` are ambiguous between day-first and
/// month-first locales. The parser attempts the preferred ordering literally
/// and, on failure, retries with the first two components swapped — so this
/// hint decides which reading *wins* when both are plausible, it does not
/// disable the retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `MM/DD/YYYY` first (US-style exports). The default.
    #[default]
    MonthFirst,
    /// `DD/MM/YYYY` first (most other locales).
    DayFirst,
}

impl DateOrder {
    /// Returns all supported names.
    pub fn all_names() -> &'static [&'static str] {
        &["month-first", "day-first"]
    }
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::MonthFirst => write!(f, "month-first"),
            DateOrder::DayFirst => write!(f, "day-first"),
        }
    }
}

impl std::str::FromStr for DateOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month-first" | "mdy" => Ok(DateOrder::MonthFirst),
            "day-first" | "dmy" => Ok(DateOrder::DayFirst),
            _ => Err(format!(
                "Unknown date order: '{}'. Expected one of: {}",
                s,
                DateOrder::all_names().join(", ")
            )),
        }
    }
}

/// Configuration for WhatsApp export parsing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhatsAppConfig {
    /// Which date-component ordering to try first (default: month-first).
    pub date_order: DateOrder,

    /// Drop header lines recognized as WhatsApp service notices (group
    /// changes, encryption banner). Off by default: the notices are rare in
    /// two-party chats and dropping them changes event counts.
    pub skip_system_messages: bool,
}

impl WhatsAppConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preferred date-component ordering.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets whether to drop recognized system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }
}

/// Configuration for Instagram export parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstagramConfig {
    /// Fix Meta's broken UTF-8 encoding (Mojibake) in sender names and
    /// message content (default: true).
    pub fix_encoding: bool,
}

impl Default for InstagramConfig {
    fn default() -> Self {
        Self { fix_encoding: true }
    }
}

impl InstagramConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the encoding fix.
    #[must_use]
    pub fn with_fix_encoding(mut self, fix: bool) -> Self {
        self.fix_encoding = fix;
        self
    }
}
