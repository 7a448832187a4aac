//! `y`: system information.

use std::time::{SystemTime, UNIX_EPOCH};

use toroid_foundation::{Rect, Value, Vector};

use crate::exec::{ExecContext, Outcome};
use crate::fingerprint::fingerprint_id;

/// Implementation version reported by `y`.
const VERSION: Value = 1;

/// Flag bits: `t` implemented, `i` implemented, `o` implemented.
const FLAG_CONCURRENT: Value = 0x01;
const FLAG_FILE_INPUT: Value = 0x02;
const FLAG_FILE_OUTPUT: Value = 0x04;

/// Pops `n`. With `n <= 0` pushes the whole information block; otherwise
/// pushes only the `n`th cell counted from the top of the stack as it would
/// stand with the block pushed.
pub(crate) fn sysinfo(ctx: &mut ExecContext<'_>) -> Outcome {
    let n = ctx.pop();
    let before = ctx.toss().len();
    push_block(ctx);
    if n > 0 {
        let picked = ctx
            .toss()
            .iter()
            .nth(n.unsigned_abs() as usize - 1)
            .unwrap_or(0);
        let pushed = ctx.toss().len() - before;
        ctx.toss().discard(pushed);
        ctx.push(picked);
    }
    Outcome::Done
}

/// Pushes the block bottom item first, so item 1 (the flags) ends on top.
fn push_block(ctx: &mut ExecContext<'_>) {
    let sizes = ctx.ip.stacks.sizes();
    let (date, time) = date_and_time(SystemTime::now());

    // 20: environment, "NAME=VALUE" strings, then a terminating null.
    ctx.push(0);
    let vars: Vec<String> = ctx.env.vars().iter().map(|(k, v)| format!("{k}={v}")).collect();
    for var in vars.iter().rev() {
        ctx.toss().push_string(var);
    }
    // 19: arguments; one extra null closes the series with a double null.
    ctx.push(0);
    let args = ctx.env.args().to_vec();
    for arg in args.iter().rev() {
        ctx.toss().push_string(arg);
    }
    // 18: size of each stack, TOSS nearest the top.
    for size in sizes.iter().rev() {
        ctx.push(Value::try_from(*size).unwrap_or(Value::MAX));
    }
    // 17: number of stacks.
    ctx.push(Value::try_from(sizes.len()).unwrap_or(Value::MAX));
    // 16, 15: time and date.
    ctx.push(time);
    ctx.push(date);
    // 14, 13: greatest point relative to least, and least point.
    let bounds = ctx.space.bounds().unwrap_or(Rect::point(Vector::ZERO));
    ctx.push_vector(bounds.max - bounds.min);
    ctx.push_vector(bounds.min);
    // 12, 11, 10: storage offset, delta, position.
    ctx.push_vector(ctx.ip.storage_offset);
    ctx.push_vector(ctx.ip.delta);
    ctx.push_vector(ctx.ip.position);
    // 9: team number.
    ctx.push(0);
    // 8: IP id.
    ctx.push(Value::try_from(ctx.ip.id()).unwrap_or(Value::MAX));
    // 7: dimensions.
    ctx.push(2);
    // 6: path separator.
    ctx.push(Value::from(std::path::MAIN_SEPARATOR as u8));
    // 5: operating paradigm for `=`; none.
    ctx.push(0);
    // 4: version.
    ctx.push(VERSION);
    // 3: handprint.
    ctx.push(fingerprint_id("TORO"));
    // 2: bytes per cell.
    ctx.push(Value::try_from(std::mem::size_of::<Value>()).unwrap_or(4));
    // 1: flags.
    let mut flags = FLAG_CONCURRENT;
    if ctx.env.file_io() {
        flags |= FLAG_FILE_INPUT | FLAG_FILE_OUTPUT;
    }
    ctx.push(flags);
}

/// Encodes the UTC date as `(year - 1900) * 65536 + month * 256 + day` and
/// the time as `hour * 65536 + minute * 256 + second`.
fn date_and_time(now: SystemTime) -> (Value, Value) {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(0));
    let days = secs.div_euclid(86_400);
    let of_day = secs.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);

    let date = (year - 1900) * 65_536 + month * 256 + day;
    let time = (of_day / 3600) * 65_536 + (of_day / 60 % 60) * 256 + of_day % 60;
    (
        Value::try_from(date).unwrap_or(0),
        Value::try_from(time).unwrap_or(0),
    )
}

/// Converts days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
