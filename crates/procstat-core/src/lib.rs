//! procstat-core: parser for the Linux `/proc/[pid]/stat` record.
//!
//! Provides:
//! - `procfs` — the [`StatRecord`] type, the [`StatField`] table, and the
//!   `parse_stat*` functions
//! - `error` — [`ParseError`] and the reader-level [`Error`]
//!
//! With `serde` feature:
//! - `Serialize` for [`StatRecord`] and [`StatField`]
//!
//! # Usage
//!
//! ```
//! use procstat_core::{ParseError, parse_stat};
//!
//! let line = format!("1 (init) S{}", " 0".repeat(49));
//! let stat = parse_stat(&line).unwrap();
//! assert_eq!(stat.comm, b"init");
//! assert_eq!(stat.state, 'S');
//!
//! assert_eq!(parse_stat("1 () S 0"), Err(ParseError::FieldCountError { found: 2 }));
//! ```
//!
//! Reading the file is left to the caller:
//!
//! ```no_run
//! let file = std::fs::File::open("/proc/self/stat")?;
//! let stat = procstat_core::parse_stat_reader(file)?;
//! println!("{} {}", stat.pid, stat.comm_lossy());
//! # Ok::<(), procstat_core::Error>(())
//! ```

pub mod error;
pub mod procfs;

pub use error::{Error, ParseError, Result};
pub use procfs::{StatField, StatRecord, parse_stat, parse_stat_bytes, parse_stat_reader};
