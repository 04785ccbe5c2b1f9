//! Summary statistics over the finalized event sequence.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::MessageEvent;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Timestamps of the first and last event in sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Read-only snapshot of grouped counts and rate statistics, produced once
/// per processing run and replaced wholesale on the next.
///
/// Maps are `BTreeMap`s so the serialized payload is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_messages: u64,
    pub date_range: DateRange,
    pub by_platform: BTreeMap<String, u64>,
    pub by_sender: BTreeMap<String, u64>,
    pub by_type: BTreeMap<String, u64>,
    /// Total messages over the fractional-day span of the date range; 0 when
    /// the span collapses to zero (single message, or identical timestamps).
    pub messages_per_day: f64,
}

/// Reduces the event sequence to a [`SummaryStats`] in a single pass.
///
/// Returns `None` for an empty sequence — there is no meaningful date range
/// or rate to report, and callers serialize the absence rather than a
/// zero-filled object.
pub fn summarize(events: &[MessageEvent]) -> Option<SummaryStats> {
    let first = events.first()?;

    let mut start = first.timestamp;
    let mut end = first.timestamp;
    let mut by_platform: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_sender: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_type: BTreeMap<String, u64> = BTreeMap::new();

    for event in events {
        start = start.min(event.timestamp);
        end = end.max(event.timestamp);
        *by_platform.entry(event.platform.as_str().to_string()).or_default() += 1;
        *by_sender.entry(event.sender_id.clone()).or_default() += 1;
        *by_type.entry(event.kind.as_str().to_string()).or_default() += 1;
    }

    let total = events.len() as u64;
    let span_days = (end - start).num_milliseconds() as f64 / MILLIS_PER_DAY;
    let messages_per_day = if span_days > 0.0 {
        total as f64 / span_days
    } else {
        0.0
    };

    Some(SummaryStats {
        total_messages: total,
        date_range: DateRange { start, end },
        by_platform,
        by_sender,
        by_type,
        messages_per_day,
    })
}
