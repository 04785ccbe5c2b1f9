//! Format parsers.
//!
//! One parser per supported export format. Each turns the raw content of a
//! single export file into provisional [`MessageEvent`](crate::event::MessageEvent)s
//! in file order — the global sort across files belongs to the pipeline core,
//! not to the parsers.

pub mod instagram;
pub mod whatsapp;

pub use instagram::InstagramParser;
pub use whatsapp::WhatsAppParser;
