use std::fmt::Write as _;

use chrono::{NaiveDateTime, Timelike};

use crate::types::Timestamp;
use crate::zone::Zone;

/// Literal for a timestamp that was never set.
pub(super) const ZERO_TIMESTAMP: &str = "'0000-00-00 00:00:00'";

/// `'YYYY-MM-DD HH:MM:SS[.fff]'`, converted into `zone` first when one is given.
pub(super) fn write_timestamp(out: &mut String, ts: &Timestamp, zone: Option<Zone>) {
    let at = match ts {
        Timestamp::Zero => {
            out.push_str(ZERO_TIMESTAMP);
            return;
        }
        Timestamp::At(at) => at,
    };
    let wall = match zone {
        Some(zone) => zone.wall_clock(at),
        None => at.naive_local(),
    };
    out.push('\'');
    write_wall_clock(out, &wall);
    out.push('\'');
}

fn write_wall_clock(out: &mut String, wall: &NaiveDateTime) {
    let _ = write!(out, "{}", wall.format("%Y-%m-%d %H:%M:%S"));
    // truncated to milliseconds; leap seconds report nanos past 1e9
    let millis = (wall.nanosecond() / 1_000_000) % 1000;
    if millis > 0 {
        let digits = format!("{millis:03}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}
