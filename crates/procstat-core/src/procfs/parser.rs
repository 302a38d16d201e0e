//! Parser for `/proc/[pid]/stat`.
//!
//! These are pure functions over the content of one stat file. They are
//! designed to be easily testable with string inputs and hold no state, so
//! any number of threads may call them at once.
//!
//! The format is tricky because comm is wrapped in parentheses but may itself
//! contain spaces and parentheses, and the kernel does no escaping:
//!
//! ```text
//! pid (comm) state ppid pgrp session tty_nr tpgid flags ... exit_code
//! ```
//!
//! comm is taken to run from the first `(` to the last `)` of the input. This
//! is correct as long as no `)` ever appears in the numeric tail, which holds
//! for every kernel so far. Bracket matching is not attempted.

use std::io::Read;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{self, ParseError};
use crate::procfs::field::StatField;
use crate::procfs::record::StatRecord;

/// Parses `/proc/[pid]/stat` content.
///
/// A trailing newline is accepted and ignored.
pub fn parse_stat(content: &str) -> Result<StatRecord, ParseError> {
    parse_stat_bytes(content.as_bytes())
}

/// Parses `/proc/[pid]/stat` content held as raw bytes.
///
/// Behaves exactly like [`parse_stat`], but comm is not required to be
/// valid UTF-8 and is returned unmodified.
pub fn parse_stat_bytes(content: &[u8]) -> Result<StatRecord, ParseError> {
    let close_paren = memchr::memrchr(b')', content).ok_or(ParseError::MissingCloseParen)?;

    // State character plus at least one separator or field.
    let rest = &content[close_paren + 1..];
    if rest.len() < 2 {
        return Err(ParseError::TruncatedInput);
    }

    // The tail is ASCII on every real kernel; anything else is replaced so it
    // fails as a malformed token rather than being dropped.
    let rest = String::from_utf8_lossy(rest);
    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() != StatField::COUNT {
        return Err(ParseError::FieldCountError {
            found: fields.len(),
        });
    }
    let tail = parse_tail(&fields)?;

    let open_paren = memchr::memchr(b'(', content).ok_or(ParseError::MissingOpenParen)?;
    if open_paren >= close_paren {
        return Err(ParseError::ParenOrderError);
    }

    let pid = parse_pid(&content[..open_paren])?;

    let comm = &content[open_paren + 1..close_paren];
    if comm.is_empty() {
        return Err(ParseError::EmptyComm);
    }
    if memchr::memchr2(b'\n', b'\0', comm).is_some() {
        return Err(ParseError::InvalidComm);
    }

    Ok(StatRecord {
        pid,
        comm: comm.to_vec(),
        ..tail
    })
}

/// Reads `reader` to the end and parses the result with [`parse_stat_bytes`].
pub fn parse_stat_reader<R: Read>(mut reader: R) -> error::Result<StatRecord> {
    let mut content = Vec::with_capacity(512);
    reader.read_to_end(&mut content)?;
    Ok(parse_stat_bytes(&content)?)
}

/// Builds a record from the 50 tokens after comm. `pid` and `comm` are left
/// empty for the caller to fill in.
fn parse_tail(fields: &[&str]) -> Result<StatRecord, ParseError> {
    Ok(StatRecord {
        pid: 0,
        comm: Vec::new(),
        state: parse_state(fields[StatField::State.index()])?,
        ppid: parse_field(fields, StatField::Ppid)?,
        pgrp: parse_field(fields, StatField::Pgrp)?,
        session: parse_field(fields, StatField::Session)?,
        tty_nr: parse_field(fields, StatField::TtyNr)?,
        tpgid: parse_field(fields, StatField::Tpgid)?,
        flags: parse_field(fields, StatField::Flags)?,
        minflt: parse_field(fields, StatField::Minflt)?,
        cminflt: parse_field(fields, StatField::Cminflt)?,
        majflt: parse_field(fields, StatField::Majflt)?,
        cmajflt: parse_field(fields, StatField::Cmajflt)?,
        utime: parse_field(fields, StatField::Utime)?,
        stime: parse_field(fields, StatField::Stime)?,
        cutime: parse_field(fields, StatField::Cutime)?,
        cstime: parse_field(fields, StatField::Cstime)?,
        priority: parse_field(fields, StatField::Priority)?,
        nice: parse_field(fields, StatField::Nice)?,
        num_threads: parse_field(fields, StatField::NumThreads)?,
        itrealvalue: parse_field(fields, StatField::Itrealvalue)?,
        starttime: parse_field(fields, StatField::Starttime)?,
        vsize: parse_field(fields, StatField::Vsize)?,
        rss: parse_field(fields, StatField::Rss)?,
        rsslim: parse_field(fields, StatField::Rsslim)?,
        startcode: parse_field(fields, StatField::Startcode)?,
        endcode: parse_field(fields, StatField::Endcode)?,
        startstack: parse_field(fields, StatField::Startstack)?,
        kstkesp: parse_field(fields, StatField::Kstkesp)?,
        kstkeip: parse_field(fields, StatField::Kstkeip)?,
        signal: parse_field(fields, StatField::Signal)?,
        blocked: parse_field(fields, StatField::Blocked)?,
        sigignore: parse_field(fields, StatField::Sigignore)?,
        sigcatch: parse_field(fields, StatField::Sigcatch)?,
        wchan: parse_field(fields, StatField::Wchan)?,
        nswap: parse_field(fields, StatField::Nswap)?,
        cnswap: parse_field(fields, StatField::Cnswap)?,
        exit_signal: parse_field(fields, StatField::ExitSignal)?,
        processor: parse_field(fields, StatField::Processor)?,
        rt_priority: parse_field(fields, StatField::RtPriority)?,
        policy: parse_field(fields, StatField::Policy)?,
        delayacct_blkio_ticks: parse_field(fields, StatField::DelayacctBlkioTicks)?,
        guest_time: parse_field(fields, StatField::GuestTime)?,
        cguest_time: parse_field(fields, StatField::CguestTime)?,
        start_data: parse_field(fields, StatField::StartData)?,
        end_data: parse_field(fields, StatField::EndData)?,
        start_brk: parse_field(fields, StatField::StartBrk)?,
        arg_start: parse_field(fields, StatField::ArgStart)?,
        arg_end: parse_field(fields, StatField::ArgEnd)?,
        env_start: parse_field(fields, StatField::EnvStart)?,
        env_end: parse_field(fields, StatField::EnvEnd)?,
        exit_code: parse_field(fields, StatField::ExitCode)?,
    })
}

fn parse_state(token: &str) -> Result<char, ParseError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(state), None) => Ok(state),
        _ => Err(ParseError::FieldFormatError(StatField::State)),
    }
}

fn parse_field<T>(fields: &[&str], field: StatField) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    parse_int(fields[field.index()]).map_err(|err| match err {
        IntError::Format => ParseError::FieldFormatError(field),
        IntError::Range => ParseError::FieldRangeError(field),
    })
}

/// Parses the text before the first `(`. One space may separate the pid from
/// the parenthesis; leading whitespace is skipped.
fn parse_pid(head: &[u8]) -> Result<i32, ParseError> {
    let head = head.strip_suffix(b" ").unwrap_or(head);
    let head = std::str::from_utf8(head).map_err(|_| ParseError::PidFormatError)?;

    parse_int(head.trim_start()).map_err(|err| match err {
        IntError::Format => ParseError::PidFormatError,
        IntError::Range => ParseError::PidRangeError,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntError {
    Format,
    Range,
}

/// Parses a decimal integer with an optional sign.
///
/// Anything that is not `[+-]?[0-9]+` is a format error. A well-formed number
/// that does not fit `T` (including a negative number for an unsigned `T`) is
/// a range error.
fn parse_int<T>(token: &str) -> Result<T, IntError>
where
    T: FromStr<Err = ParseIntError>,
{
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IntError::Format);
    }

    match token.parse::<T>() {
        Ok(value) => Ok(value),
        // "-0" is zero, which every type can hold.
        Err(_) if digits.bytes().all(|b| b == b'0') => {
            digits.parse::<T>().map_err(|_| IntError::Range)
        }
        Err(_) => Err(IntError::Range),
    }
}
