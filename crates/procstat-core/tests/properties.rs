//! Property-based tests for stat record parsing.

use proptest::prelude::*;
use procstat_core::{ParseError, StatField, StatRecord, parse_stat, parse_stat_bytes};

fn record_strategy() -> impl Strategy<Value = StatRecord> {
    (
        any::<i32>(),
        r"[^\n\x00]{1,24}",
        "[RSDZTtXxKWPI]",
        any::<[i32; 8]>(),
        any::<[u32; 3]>(),
        any::<[i64; 8]>(),
        any::<[u64; 30]>(),
    )
        .prop_map(|(pid, comm, state, i, u, l, q)| StatRecord {
            pid,
            comm: comm.into_bytes(),
            state: state.chars().next().unwrap(),
            ppid: i[0],
            pgrp: i[1],
            session: i[2],
            tty_nr: i[3],
            tpgid: i[4],
            flags: u[0],
            minflt: q[0],
            cminflt: q[1],
            majflt: q[2],
            cmajflt: q[3],
            utime: q[4],
            stime: q[5],
            cutime: l[0],
            cstime: l[1],
            priority: l[2],
            nice: l[3],
            num_threads: l[4],
            itrealvalue: l[5],
            starttime: q[6],
            vsize: q[7],
            rss: l[6],
            rsslim: q[8],
            startcode: q[9],
            endcode: q[10],
            startstack: q[11],
            kstkesp: q[12],
            kstkeip: q[13],
            signal: q[14],
            blocked: q[15],
            sigignore: q[16],
            sigcatch: q[17],
            wchan: q[18],
            nswap: q[19],
            cnswap: q[20],
            exit_signal: i[5],
            processor: i[6],
            rt_priority: u[1],
            policy: u[2],
            delayacct_blkio_ticks: q[21],
            guest_time: q[22],
            cguest_time: l[7],
            start_data: q[23],
            end_data: q[24],
            start_brk: q[25],
            arg_start: q[26],
            arg_end: q[27],
            env_start: q[28],
            env_end: q[29],
            exit_code: i[7],
        })
}

/// Tokens after comm, indexed by `StatField::index`.
fn tail_tokens(r: &StatRecord) -> Vec<String> {
    vec![
        r.state.to_string(),
        r.ppid.to_string(),
        r.pgrp.to_string(),
        r.session.to_string(),
        r.tty_nr.to_string(),
        r.tpgid.to_string(),
        r.flags.to_string(),
        r.minflt.to_string(),
        r.cminflt.to_string(),
        r.majflt.to_string(),
        r.cmajflt.to_string(),
        r.utime.to_string(),
        r.stime.to_string(),
        r.cutime.to_string(),
        r.cstime.to_string(),
        r.priority.to_string(),
        r.nice.to_string(),
        r.num_threads.to_string(),
        r.itrealvalue.to_string(),
        r.starttime.to_string(),
        r.vsize.to_string(),
        r.rss.to_string(),
        r.rsslim.to_string(),
        r.startcode.to_string(),
        r.endcode.to_string(),
        r.startstack.to_string(),
        r.kstkesp.to_string(),
        r.kstkeip.to_string(),
        r.signal.to_string(),
        r.blocked.to_string(),
        r.sigignore.to_string(),
        r.sigcatch.to_string(),
        r.wchan.to_string(),
        r.nswap.to_string(),
        r.cnswap.to_string(),
        r.exit_signal.to_string(),
        r.processor.to_string(),
        r.rt_priority.to_string(),
        r.policy.to_string(),
        r.delayacct_blkio_ticks.to_string(),
        r.guest_time.to_string(),
        r.cguest_time.to_string(),
        r.start_data.to_string(),
        r.end_data.to_string(),
        r.start_brk.to_string(),
        r.arg_start.to_string(),
        r.arg_end.to_string(),
        r.env_start.to_string(),
        r.env_end.to_string(),
        r.exit_code.to_string(),
    ]
}

fn render(r: &StatRecord, tokens: &[String]) -> String {
    format!("{} ({}) {}\n", r.pid, r.comm_lossy(), tokens.join(" "))
}

fn numeric_field() -> impl Strategy<Value = StatField> {
    prop::sample::select(StatField::ALL[1..].to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn rendered_record_parses_back(record in record_strategy()) {
        let content = render(&record, &tail_tokens(&record));
        prop_assert_eq!(parse_stat(&content), Ok(record));
    }

    #[test]
    fn arbitrary_text_never_panics(content in ".{0,200}") {
        let _ = parse_stat(&content);
    }

    #[test]
    fn arbitrary_bytes_never_panic(content in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = parse_stat_bytes(&content);
    }

    #[test]
    fn str_and_bytes_agree(content in r"[0-9 ()a-z\n]{0,120}") {
        prop_assert_eq!(parse_stat(&content), parse_stat_bytes(content.as_bytes()));
    }

    #[test]
    fn wrong_field_count_is_rejected(record in record_strategy(), keep in 1usize..49) {
        let tokens = tail_tokens(&record);
        let content = render(&record, &tokens[..keep]);
        prop_assert_eq!(
            parse_stat(&content),
            Err(ParseError::FieldCountError { found: keep })
        );
    }

    #[test]
    fn non_numeric_token_is_format_error(
        record in record_strategy(),
        field in numeric_field(),
        token in "[0-9]{0,3}[a-z.x_]{1,3}[0-9]{0,3}",
    ) {
        let mut tokens = tail_tokens(&record);
        tokens[field.index()] = token;
        prop_assert_eq!(
            parse_stat(&render(&record, &tokens)),
            Err(ParseError::FieldFormatError(field))
        );
    }

    #[test]
    fn oversized_token_is_range_error(
        record in record_strategy(),
        field in numeric_field(),
        token in "-?[1-9][0-9]{20,30}",
    ) {
        let mut tokens = tail_tokens(&record);
        tokens[field.index()] = token;
        let err = parse_stat(&render(&record, &tokens)).unwrap_err();
        prop_assert_eq!(err.clone(), ParseError::FieldRangeError(field));
        prop_assert!(err.is_range_error());
    }

    #[test]
    fn comm_with_newline_is_rejected(
        record in record_strategy(),
        prefix in "[a-z]{0,5}",
        suffix in "[a-z]{0,5}",
    ) {
        let content = format!(
            "{} ({prefix}\n{suffix}) {}",
            record.pid,
            tail_tokens(&record).join(" ")
        );
        prop_assert_eq!(parse_stat(&content), Err(ParseError::InvalidComm));
    }
}
