//! Command-line interface definition using clap.

use std::str::FromStr;

use clap::Parser;

use crate::config::DateOrder;

/// Normalize WhatsApp and Instagram chat exports into a unified two-person
/// message timeline with summary statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "duolog")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    duolog --person-a You --person-b Sam --whatsapp chat.txt
    duolog --person-a You --person-b Sam --whatsapp a.txt --whatsapp b.txt --instagram message_1.json
    duolog --person-a You --person-b sam_ig --instagram message_1.json --by-year -o processed
    duolog --person-a You --person-b Sam --whatsapp chat.txt --date-order day-first")]
pub struct Args {
    /// Canonical label for the first participant ("me")
    #[arg(long, value_name = "NAME")]
    pub person_a: String,

    /// Canonical label for the second participant ("them")
    #[arg(long, value_name = "NAME")]
    pub person_b: String,

    /// Path to a WhatsApp TXT export (repeatable)
    #[arg(long, value_name = "FILE")]
    pub whatsapp: Vec<String>,

    /// Path to an Instagram JSON export (repeatable)
    #[arg(long, value_name = "FILE")]
    pub instagram: Vec<String>,

    /// Output directory for the processed payload
    #[arg(short, long, default_value = "processed", value_name = "DIR")]
    pub output: String,

    /// Preferred date-component ordering for WhatsApp dates
    #[arg(long, default_value = "month-first", value_parser = DateOrder::from_str)]
    pub date_order: DateOrder,

    /// Drop recognized WhatsApp service notices (group changes, encryption banner)
    #[arg(long)]
    pub skip_system: bool,

    /// Keep Instagram text as exported instead of fixing Meta's broken encoding
    #[arg(long)]
    pub raw_encoding: bool,

    /// Additionally write one events_<year>.json file per calendar year
    #[arg(long)]
    pub by_year: bool,
}
