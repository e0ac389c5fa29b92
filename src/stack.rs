//! Stack dump decoding.
//!
//! A raw process stack dump is a multi-line text block in which return
//! addresses look like
//!
//! ```text
//! Return addr 0x00007F8E4C0A1B10 ('Elixir.MyApp.Worker':'handle_call'/3 + 144)
//! CP: 0x00007F8E4C09F000 (gen_server:loop/7 + 288)
//! ```
//!
//! The decoder keeps only the return-address lines and reduces each to a
//! simplified `Module.function/arity` signature. Lines that carry a marker
//! but no parseable call site are dropped silently; a dump is best-effort
//! diagnostic text, not a structured format.

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

use crate::render::signature::format_module;

/// Substrings identifying the return-address lines of a dump.
const FRAME_MARKERS: [&str; 2] = ["Return addr 0x", "CP: 0x"];

static FRAME_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches the trailing parenthesized call site of a return-address line:
/// `(module:function/arity + offset)` anchored at end of line. Module and
/// function may be single-quoted; the arity is a digit run and anything
/// after it up to the closing parenthesis (the `+ offset` part) is ignored.
fn frame_regex() -> &'static Regex {
    FRAME_REGEX.get_or_init(|| {
        Regex::new(r"\(([^():]+):([^():]+)/(\d+)[^)]*\)$").expect("frame pattern is valid")
    })
}

/// Decode the call-site signatures out of a raw stack dump, outermost line
/// first, in dump order.
///
/// An empty dump yields an empty sequence.
#[must_use]
pub fn decode_stack(dump: &str) -> Vec<String> {
    dump.lines()
        .filter(|line| FRAME_MARKERS.iter().any(|marker| line.contains(marker)))
        .filter_map(decode_frame)
        .collect()
}

fn decode_frame(line: &str) -> Option<String> {
    let Some(caps) = frame_regex().captures(line) else {
        debug!("dropping unparseable stack frame line: {line}");
        return None;
    };
    let module = caps[1].trim_matches('\'');
    let function = caps[2].trim_matches('\'');
    Some(format!("{}.{}/{}", format_module(module), function, &caps[3]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_only_marked_lines() {
        let dump = "\
Program counter: 0x00007f8e4c0a1a00 (unknown function)
Return addr 0x00007f8e4c0a1b10 (foo:bar/1 + 16)
y(0)     []
CP: 0x00007f8e4c09f000 (gen_server:loop/7 + 288)
";
        assert_eq!(decode_stack(dump), vec![":foo.bar/1", ":gen_server.loop/7"]);
    }

    #[test]
    fn test_strips_quotes_and_host_prefix() {
        let dump = "Return addr 0x0000 ('Elixir.Mod':'fun name'/3 + 8)";
        assert_eq!(decode_stack(dump), vec!["Mod.fun name/3"]);
    }

    #[test]
    fn test_marked_line_without_call_site_is_dropped() {
        let dump = "\
Return addr 0x00007f8e4c0a1b10 (unknown function)
Return addr 0x00007f8e4c0a1b10 (foo:bar/1 + 16)
";
        assert_eq!(decode_stack(dump), vec![":foo.bar/1"]);
    }

    #[test]
    fn test_empty_dump() {
        assert!(decode_stack("").is_empty());
    }

    #[test]
    fn test_frame_order_preserved() {
        let dump = "\
Return addr 0x01 (a:first/0 + 4)
Return addr 0x02 (a:second/0 + 4)
";
        assert_eq!(decode_stack(dump), vec![":a.first/0", ":a.second/0"]);
    }
}
