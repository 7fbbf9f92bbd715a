//! Domain hack generation - split words on TLD suffixes

mod generator;

pub use generator::{dedup_preserving_order, generate_domains, split_word};
