//! Property-based tests for ordering and enrichment.
//!
//! These generate random provisional event lists to check the invariants the
//! downstream visualizations depend on.

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use duolog::core::{enrich, sort_events, summarize};
use duolog::event::{EventKind, MessageEvent, Platform};

/// Builds an event deterministically from a timestamp, so any permutation of
/// the same timestamps describes the same message set.
fn event_for(ts_secs: i64) -> MessageEvent {
    let sender = if ts_secs % 2 == 0 { "Alice" } else { "Bob" };
    let platform = if ts_secs % 3 == 0 {
        Platform::Instagram
    } else {
        Platform::WhatsApp
    };
    MessageEvent::new(
        DateTime::<Utc>::from_timestamp(ts_secs, 0).unwrap(),
        sender,
        platform,
        EventKind::Text,
        format!("m{ts_secs}"),
    )
}

/// Distinct timestamps in a shuffled order.
fn arb_shuffled_timestamps(max: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(0i64..2_000_000_000, 0..max)
        .prop_map(|set| set.into_iter().collect::<Vec<i64>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Sorting any permutation of the same events yields the same sequence.
    #[test]
    fn ordering_is_permutation_invariant(timestamps in arb_shuffled_timestamps(40)) {
        let mut shuffled: Vec<MessageEvent> = timestamps.iter().copied().map(event_for).collect();
        let mut sorted_input: Vec<MessageEvent> = {
            let mut ts = timestamps.clone();
            ts.sort_unstable();
            ts.into_iter().map(event_for).collect()
        };

        sort_events(&mut shuffled);
        sort_events(&mut sorted_input);
        prop_assert_eq!(shuffled, sorted_input);
    }

    /// Timestamps are non-decreasing after the sort.
    #[test]
    fn timestamps_are_monotonic(timestamps in arb_shuffled_timestamps(40)) {
        let mut events: Vec<MessageEvent> = timestamps.into_iter().map(event_for).collect();
        sort_events(&mut events);
        for pair in events.windows(2) {
            prop_assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    /// Latency is the exact second gap on sender changes and absent otherwise.
    #[test]
    fn reply_latency_matches_definition(timestamps in arb_shuffled_timestamps(40)) {
        let mut events: Vec<MessageEvent> = timestamps.into_iter().map(event_for).collect();
        sort_events(&mut events);
        enrich(&mut events);

        if let Some(first) = events.first() {
            prop_assert!(first.reply_latency_seconds.is_none());
        }
        for i in 1..events.len() {
            let gap = (events[i].timestamp - events[i - 1].timestamp).num_seconds() as f64;
            if events[i].sender_id == events[i - 1].sender_id {
                prop_assert!(events[i].reply_latency_seconds.is_none());
            } else {
                prop_assert_eq!(events[i].reply_latency_seconds, Some(gap));
            }
        }
    }

    /// Every event gets a local hour in range after enrichment.
    #[test]
    fn local_hour_is_always_in_range(timestamps in arb_shuffled_timestamps(40)) {
        let mut events: Vec<MessageEvent> = timestamps.into_iter().map(event_for).collect();
        sort_events(&mut events);
        enrich(&mut events);
        for event in &events {
            let hour = event.hour_of_day_local.expect("hour set on every event");
            prop_assert!(hour <= 23);
        }
    }

    /// No events are fabricated or lost between enrichment and aggregation.
    #[test]
    fn stats_counts_are_consistent(timestamps in arb_shuffled_timestamps(40)) {
        let mut events: Vec<MessageEvent> = timestamps.into_iter().map(event_for).collect();
        sort_events(&mut events);
        enrich(&mut events);

        match summarize(&events) {
            None => prop_assert!(events.is_empty()),
            Some(stats) => {
                let total = events.len() as u64;
                prop_assert_eq!(stats.total_messages, total);
                prop_assert_eq!(stats.by_sender.values().sum::<u64>(), total);
                prop_assert_eq!(stats.by_platform.values().sum::<u64>(), total);
                prop_assert_eq!(stats.by_type.values().sum::<u64>(), total);
                prop_assert!(stats.messages_per_day >= 0.0);
                prop_assert!(stats.date_range.start <= stats.date_range.end);
            }
        }
    }
}
