//! Event ordering and derived-field enrichment.
//!
//! [`sort_events`] is the only sort in the pipeline and must run over the
//! fully merged, cross-file event list before either derivation: both
//! `hour_of_day_local` and `reply_latency_seconds` are positional over the
//! final sequence.

use chrono::{Local, TimeZone, Timelike};

use crate::event::MessageEvent;

/// Sorts events ascending by timestamp.
///
/// The sort is stable, so events with identical timestamps keep their input
/// order — reprocessing the same files in any file order yields the same
/// sequence up to that tie-break.
pub fn sort_events(events: &mut [MessageEvent]) {
    events.sort_by_key(|e| e.timestamp);
}

/// Enriches a sorted sequence in place using the runtime's local time zone.
///
/// Sets `hour_of_day_local` on every event and `reply_latency_seconds` on
/// every event whose immediate predecessor was sent by the other participant.
/// The first event never gets a latency; consecutive events from the same
/// sender are a burst, not a reply.
pub fn enrich(events: &mut [MessageEvent]) {
    enrich_in(events, &Local);
}

/// Enriches with an explicit time zone.
///
/// [`enrich`] is the production path; this exists so tests can pin a fixed
/// offset instead of depending on the host's zone.
pub fn enrich_in<Tz: TimeZone>(events: &mut [MessageEvent], tz: &Tz) {
    for event in events.iter_mut() {
        event.hour_of_day_local = Some(event.timestamp.with_timezone(tz).hour() as u8);
    }

    for i in 1..events.len() {
        let prev_ts = events[i - 1].timestamp;
        let is_reply = events[i - 1].sender_id != events[i].sender_id;
        if is_reply {
            let latency = (events[i].timestamp - prev_ts).num_milliseconds() as f64 / 1000.0;
            events[i].reply_latency_seconds = Some(latency);
        }
    }
}
