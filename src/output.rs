//! JSON writers for the processed payload.
//!
//! These exist for the external caller (a dashboard or persistence layer)
//! to store results and reload them later without reprocessing. Three
//! artifacts mirror what such a frontend consumes:
//!
//! - `events.json` — the full sorted, enriched event list
//! - `summary_stats.json` — the [`SummaryStats`] snapshot
//! - `events_<year>.json` — optional per-year split of the event list, for
//!   incremental loading of long histories

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Datelike;

use crate::core::stats::SummaryStats;
use crate::error::Result;
use crate::event::MessageEvent;

/// Writes the full event list as pretty-printed JSON.
pub fn write_events(events: &[MessageEvent], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), events)?;
    Ok(())
}

/// Writes the summary statistics as pretty-printed JSON.
pub fn write_stats(stats: &SummaryStats, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), stats)?;
    Ok(())
}

/// Groups events by calendar year (UTC) preserving sequence order.
pub fn split_by_year(events: &[MessageEvent]) -> BTreeMap<i32, Vec<&MessageEvent>> {
    let mut by_year: BTreeMap<i32, Vec<&MessageEvent>> = BTreeMap::new();
    for event in events {
        by_year.entry(event.timestamp.year()).or_default().push(event);
    }
    by_year
}

/// Writes one `events_<year>.json` file per calendar year into `dir`.
///
/// Returns the written paths in year order.
pub fn write_events_by_year(events: &[MessageEvent], dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (year, group) in split_by_year(events) {
        let path = dir.join(format!("events_{year}.json"));
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &group)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, Platform};
    use chrono::{DateTime, Utc};

    fn event(ts_secs: i64) -> MessageEvent {
        let ts = DateTime::<Utc>::from_timestamp(ts_secs, 0).unwrap();
        MessageEvent::new(ts, "Alice", Platform::WhatsApp, EventKind::Text, "x")
    }

    #[test]
    fn test_write_events_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let events = vec![event(100), event(200)];

        write_events(&events, &path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<MessageEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, events);
    }

    #[test]
    fn test_split_by_year() {
        // 2023-12-31T23:59:59Z and 2024-01-01T00:00:01Z
        let events = vec![event(1704067199), event(1704067201)];
        let by_year = split_by_year(&events);
        assert_eq!(by_year.len(), 2);
        assert_eq!(by_year[&2023].len(), 1);
        assert_eq!(by_year[&2024].len(), 1);
    }

    #[test]
    fn test_write_events_by_year_paths() {
        let dir = tempfile::tempdir().unwrap();
        let events = vec![event(1704067199), event(1704067201)];

        let written = write_events_by_year(&events, dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("events_2023.json"));
        assert!(written[1].ends_with("events_2024.json"));
        assert!(written.iter().all(|p| p.exists()));
    }

    #[test]
    fn test_write_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary_stats.json");
        let events = vec![event(0), event(43_200)];
        let stats = crate::core::stats::summarize(&events).unwrap();

        write_stats(&stats, &path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("total_messages"));
        assert!(json.contains("messages_per_day"));
    }
}
