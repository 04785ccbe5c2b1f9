//! Pipeline core: ordering, enrichment, aggregation, orchestration.
//!
//! Stages run strictly in sequence — parse, merge/sort, enrich, aggregate —
//! because the derived fields depend on final sequence position. See
//! [`processor::process`] for the single entry point that drives them.

pub mod enrich;
pub mod processor;
pub mod stats;

pub use enrich::{enrich, enrich_in, sort_events};
pub use processor::{ProcessRequest, ProcessingOutput, process};
pub use stats::{DateRange, SummaryStats, summarize};
