//! The typed form of one `/proc/[pid]/stat` record.

use std::borrow::Cow;
use std::str::FromStr;

use crate::error::ParseError;
use crate::procfs::parser::{parse_stat, parse_stat_bytes};

/// Parsed data from `/proc/[pid]/stat`.
///
/// Field names and types follow `proc(5)`. Every field the kernel writes is
/// kept, including the ones most tools skip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatRecord {
    pub pid: i32,
    /// Executable or thread name, byte-for-byte. Never empty, never holds
    /// `\n` or `\0`, but may hold anything else including parentheses.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_comm"))]
    pub comm: Vec<u8>,
    pub state: char,

    pub ppid: i32,
    pub pgrp: i32,
    pub session: i32,
    pub tty_nr: i32,
    pub tpgid: i32,

    pub flags: u32,
    pub minflt: u64,
    pub cminflt: u64,
    pub majflt: u64,
    pub cmajflt: u64,
    /// Clock ticks spent in user mode.
    pub utime: u64,
    /// Clock ticks spent in kernel mode.
    pub stime: u64,
    pub cutime: i64,
    pub cstime: i64,
    pub priority: i64,
    pub nice: i64,
    pub num_threads: i64,
    pub itrealvalue: i64,
    /// Clock ticks after boot at which the process started.
    pub starttime: u64,
    /// Virtual memory size in bytes.
    pub vsize: u64,
    /// Resident set size in pages.
    pub rss: i64,
    pub rsslim: u64,
    pub startcode: u64,
    pub endcode: u64,
    pub startstack: u64,
    pub kstkesp: u64,
    pub kstkeip: u64,
    pub signal: u64,
    pub blocked: u64,
    pub sigignore: u64,
    pub sigcatch: u64,
    pub wchan: u64,
    pub nswap: u64,
    pub cnswap: u64,
    pub exit_signal: i32,
    pub processor: i32,
    pub rt_priority: u32,
    pub policy: u32,
    pub delayacct_blkio_ticks: u64,
    pub guest_time: u64,
    pub cguest_time: i64,
    pub start_data: u64,
    pub end_data: u64,
    pub start_brk: u64,
    pub arg_start: u64,
    pub arg_end: u64,
    pub env_start: u64,
    pub env_end: u64,
    pub exit_code: i32,
}

impl StatRecord {
    /// Returns comm as text if it is valid UTF-8.
    pub fn comm_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.comm).ok()
    }

    /// Returns comm as text, replacing invalid UTF-8 sequences.
    pub fn comm_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.comm)
    }
}

impl FromStr for StatRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_stat(s)
    }
}

impl TryFrom<&[u8]> for StatRecord {
    type Error = ParseError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        parse_stat_bytes(bytes)
    }
}

#[cfg(feature = "serde")]
fn serialize_comm<S: serde::Serializer>(comm: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(comm))
}
