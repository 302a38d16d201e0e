//! Typed access to the Linux `/proc/[pid]/stat` record.
//!
//! This module provides the parser, the record it produces, and the table of
//! field names shared by both.

pub mod field;
pub mod parser;
pub mod record;

pub use field::StatField;
pub use parser::{parse_stat, parse_stat_bytes, parse_stat_reader};
pub use record::StatRecord;
