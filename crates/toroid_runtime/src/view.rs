//! Plain-text rendering of FungeSpace and IPs.

use std::fmt::Write as _;

use toroid_foundation::{Rect, Vector, glyph_of};
use toroid_language::Ip;
use toroid_space::FungeSpace;

/// The rectangle `:show` renders: the board, grown to cover every
/// written cell.
#[must_use]
pub fn view_rect(space: &FungeSpace, board: Rect) -> Rect {
    space.bounds().map_or(board, |b| b.union(&board))
}

/// Renders a rectangle row by row.
///
/// Trailing blanks on each row are dropped. Cells without a printable
/// glyph render as `?`, and `marker` (the edit cursor) as `_` when it sits
/// on a blank cell.
#[must_use]
pub fn render(space: &FungeSpace, rect: Rect, marker: Option<Vector>) -> String {
    let mut out = String::new();
    let mut row = String::new();
    let mut y = rect.min.y;
    for (p, value) in space.region(rect) {
        if p.y != y {
            out.push_str(row.trim_end());
            out.push('\n');
            row.clear();
            y = p.y;
        }
        let glyph = match glyph_of(value) {
            Some(' ') if marker == Some(p) => '_',
            Some(c) if !c.is_control() => c,
            _ => '?',
        };
        row.push(glyph);
    }
    out.push_str(row.trim_end());
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

/// One line per IP: identity, position, heading, and the TOSS top first.
#[must_use]
pub fn describe_ips(ips: &[Ip]) -> String {
    let mut out = String::new();
    for ip in ips {
        let _ = write!(out, "{ip}");
        if ip.string_mode {
            out.push_str(" [string]");
        }
        let stack: Vec<String> = ip
            .stacks
            .toss()
            .iter()
            .take(8)
            .map(|v| v.to_string())
            .collect();
        let _ = write!(out, " stack [{}]", stack.join(" "));
        if ip.stacks.toss().len() > 8 {
            out.push_str(" ...");
        }
        if ip.stacks.depth() > 1 {
            let _ = write!(out, " depth {}", ip.stacks.depth());
        }
        let loaded: Vec<&str> = ip.fingerprints().map(|f| f.name).collect();
        if !loaded.is_empty() {
            let _ = write!(out, " fingerprints {}", loaded.join(","));
        }
        out.push('\n');
    }
    out.pop();
    out
}
