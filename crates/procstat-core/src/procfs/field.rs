//! Names and positions of the fields that follow `comm` in `/proc/[pid]/stat`.

use std::fmt;

/// A field of the stat record tail, in kernel ABI order.
///
/// The discriminant is the zero-based position of the field after the
/// closing `)` of comm: `State` is token 0, `Ppid` token 1, and so on up to
/// `ExitCode` at token 49.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatField {
    State,
    Ppid,
    Pgrp,
    Session,
    TtyNr,
    Tpgid,
    Flags,
    Minflt,
    Cminflt,
    Majflt,
    Cmajflt,
    Utime,
    Stime,
    Cutime,
    Cstime,
    Priority,
    Nice,
    NumThreads,
    Itrealvalue,
    Starttime,
    Vsize,
    Rss,
    Rsslim,
    Startcode,
    Endcode,
    Startstack,
    Kstkesp,
    Kstkeip,
    Signal,
    Blocked,
    Sigignore,
    Sigcatch,
    Wchan,
    Nswap,
    Cnswap,
    ExitSignal,
    Processor,
    RtPriority,
    Policy,
    DelayacctBlkioTicks,
    GuestTime,
    CguestTime,
    StartData,
    EndData,
    StartBrk,
    ArgStart,
    ArgEnd,
    EnvStart,
    EnvEnd,
    ExitCode,
}

impl StatField {
    /// Number of whitespace-separated tokens after comm.
    pub const COUNT: usize = 50;

    /// Every tail field, in the order the kernel writes them.
    pub const ALL: [StatField; Self::COUNT] = [
        StatField::State,
        StatField::Ppid,
        StatField::Pgrp,
        StatField::Session,
        StatField::TtyNr,
        StatField::Tpgid,
        StatField::Flags,
        StatField::Minflt,
        StatField::Cminflt,
        StatField::Majflt,
        StatField::Cmajflt,
        StatField::Utime,
        StatField::Stime,
        StatField::Cutime,
        StatField::Cstime,
        StatField::Priority,
        StatField::Nice,
        StatField::NumThreads,
        StatField::Itrealvalue,
        StatField::Starttime,
        StatField::Vsize,
        StatField::Rss,
        StatField::Rsslim,
        StatField::Startcode,
        StatField::Endcode,
        StatField::Startstack,
        StatField::Kstkesp,
        StatField::Kstkeip,
        StatField::Signal,
        StatField::Blocked,
        StatField::Sigignore,
        StatField::Sigcatch,
        StatField::Wchan,
        StatField::Nswap,
        StatField::Cnswap,
        StatField::ExitSignal,
        StatField::Processor,
        StatField::RtPriority,
        StatField::Policy,
        StatField::DelayacctBlkioTicks,
        StatField::GuestTime,
        StatField::CguestTime,
        StatField::StartData,
        StatField::EndData,
        StatField::StartBrk,
        StatField::ArgStart,
        StatField::ArgEnd,
        StatField::EnvStart,
        StatField::EnvEnd,
        StatField::ExitCode,
    ];

    /// Zero-based token position after the closing `)`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field name as documented in `proc(5)`.
    pub fn name(self) -> &'static str {
        match self {
            StatField::State => "state",
            StatField::Ppid => "ppid",
            StatField::Pgrp => "pgrp",
            StatField::Session => "session",
            StatField::TtyNr => "tty_nr",
            StatField::Tpgid => "tpgid",
            StatField::Flags => "flags",
            StatField::Minflt => "minflt",
            StatField::Cminflt => "cminflt",
            StatField::Majflt => "majflt",
            StatField::Cmajflt => "cmajflt",
            StatField::Utime => "utime",
            StatField::Stime => "stime",
            StatField::Cutime => "cutime",
            StatField::Cstime => "cstime",
            StatField::Priority => "priority",
            StatField::Nice => "nice",
            StatField::NumThreads => "num_threads",
            StatField::Itrealvalue => "itrealvalue",
            StatField::Starttime => "starttime",
            StatField::Vsize => "vsize",
            StatField::Rss => "rss",
            StatField::Rsslim => "rsslim",
            StatField::Startcode => "startcode",
            StatField::Endcode => "endcode",
            StatField::Startstack => "startstack",
            StatField::Kstkesp => "kstkesp",
            StatField::Kstkeip => "kstkeip",
            StatField::Signal => "signal",
            StatField::Blocked => "blocked",
            StatField::Sigignore => "sigignore",
            StatField::Sigcatch => "sigcatch",
            StatField::Wchan => "wchan",
            StatField::Nswap => "nswap",
            StatField::Cnswap => "cnswap",
            StatField::ExitSignal => "exit_signal",
            StatField::Processor => "processor",
            StatField::RtPriority => "rt_priority",
            StatField::Policy => "policy",
            StatField::DelayacctBlkioTicks => "delayacct_blkio_ticks",
            StatField::GuestTime => "guest_time",
            StatField::CguestTime => "cguest_time",
            StatField::StartData => "start_data",
            StatField::EndData => "end_data",
            StatField::StartBrk => "start_brk",
            StatField::ArgStart => "arg_start",
            StatField::ArgEnd => "arg_end",
            StatField::EnvStart => "env_start",
            StatField::EnvEnd => "env_end",
            StatField::ExitCode => "exit_code",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
