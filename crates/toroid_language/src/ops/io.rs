//! Character, number, and file I/O.
//!
//! File failures reflect the requesting IP and are logged at debug level;
//! they never reach the host as errors.

use std::fs;

use toroid_foundation::{Rect, Value, glyph_of};
use toroid_space::Encoding;

use crate::environment::{InputPoll, PendingNumber};
use crate::exec::{ExecContext, Outcome};

pub(crate) fn output_char(ctx: &mut ExecContext<'_>) -> Outcome {
    let v = ctx.pop();
    ctx.env.write_char(glyph_of(v).unwrap_or(char::REPLACEMENT_CHARACTER));
    Outcome::Done
}

pub(crate) fn output_number(ctx: &mut ExecContext<'_>) -> Outcome {
    let v = ctx.pop();
    ctx.env.write_number(v);
    Outcome::Done
}

pub(crate) fn input_char(ctx: &mut ExecContext<'_>) -> Outcome {
    match ctx.env.poll_char() {
        InputPoll::Ready(c) => {
            ctx.push(char_value(c));
            Outcome::Done
        }
        InputPoll::Pending => Outcome::Suspend,
        InputPoll::Eof => Outcome::Reflect,
    }
}

/// `&`: skips to the first digit, then reads digits up to and including the
/// first non-digit. A `-` directly before the digits negates the result.
pub(crate) fn input_number(ctx: &mut ExecContext<'_>) -> Outcome {
    let mut state = ctx.env.pending_number().take().unwrap_or_default();
    loop {
        match ctx.env.poll_char() {
            InputPoll::Pending => {
                *ctx.env.pending_number() = Some(state);
                return Outcome::Suspend;
            }
            InputPoll::Eof if state.digits => {
                ctx.push(finish(state));
                return Outcome::Done;
            }
            InputPoll::Eof => return Outcome::Reflect,
            InputPoll::Ready(c) => match c.to_digit(10) {
                Some(d) => {
                    state.digits = true;
                    #[allow(clippy::cast_possible_wrap)]
                    let d = d as Value;
                    state.value = state.value.saturating_mul(10).saturating_add(d);
                }
                None if state.digits => {
                    ctx.push(finish(state));
                    return Outcome::Done;
                }
                None => state.negative = c == '-',
            },
        }
    }
}

fn finish(state: PendingNumber) -> Value {
    if state.negative { state.value.wrapping_neg() } else { state.value }
}

#[allow(clippy::cast_possible_wrap)]
fn char_value(c: char) -> Value {
    u32::from(c) as Value
}

/// `i`: pops a filename, flags, and an origin; loads the file there and
/// pushes the loaded size and the origin.
pub(crate) fn file_input(ctx: &mut ExecContext<'_>) -> Outcome {
    let name = ctx.toss().pop_string();
    let flags = ctx.pop();
    let origin = ctx.pop_vector();
    if !ctx.env.file_io() {
        log::debug!("ip#{}: file input disabled", ctx.ip.id());
        return Outcome::Reflect;
    }

    let bytes = match fs::read(&name) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("ip#{}: cannot read {name:?}: {e}", ctx.ip.id());
            return Outcome::Reflect;
        }
    };

    let at = origin + ctx.ip.storage_offset;
    let size = if flags & 1 == 0 {
        match Encoding::decode_detected(&bytes) {
            Ok((text, _)) => ctx.space.load_text(at, &text),
            Err(e) => {
                log::debug!("ip#{}: cannot decode {name:?}: {e}", ctx.ip.id());
                return Outcome::Reflect;
            }
        }
    } else {
        ctx.space.load_binary(at, &bytes)
    };

    ctx.push_vector(size);
    ctx.push_vector(origin);
    Outcome::Done
}

/// `o`: pops a filename, flags, an origin, and a size; writes that region as
/// Latin-1 text, stripping trailing spaces and blank lines when flag bit 0 is
/// set. A cell outside Latin-1 reflects and nothing is written.
pub(crate) fn file_output(ctx: &mut ExecContext<'_>) -> Outcome {
    let name = ctx.toss().pop_string();
    let flags = ctx.pop();
    let origin = ctx.pop_vector() + ctx.ip.storage_offset;
    let size = ctx.pop_vector();
    if !ctx.env.file_io() {
        log::debug!("ip#{}: file output disabled", ctx.ip.id());
        return Outcome::Reflect;
    }
    let Some(rect) = Rect::with_size(origin, size.x, size.y) else {
        return Outcome::Reflect;
    };

    let text = ctx.space.region_text(rect, flags & 1 != 0);
    let bytes = match Encoding::Latin1.encode(&text) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("ip#{}: cannot encode {name:?}: {e}", ctx.ip.id());
            return Outcome::Reflect;
        }
    };
    match fs::write(&name, bytes) {
        Ok(()) => Outcome::Done,
        Err(e) => {
            log::debug!("ip#{}: cannot write {name:?}: {e}", ctx.ip.id());
            Outcome::Reflect
        }
    }
}
