//! Event representers.
//!
//! One representer per event type, each producing a block of `#`-prefixed
//! lines joined with newlines and no trailing newline. Every function here
//! is pure; [`print_event`] is the crate's single I/O boundary.

pub mod signature;
pub mod timestamp;

use crate::domain::{Sig, Term, Timestamp};
use crate::event::{
    normalize, CallEvent, ReceiveEvent, ReturnEvent, SendEvent, TraceEvent,
};
use crate::options::FormatOptions;
use crate::stack::decode_stack;
use signature::format_sig;
use timestamp::format_timestamp;

/// Render a normalized event into its text block.
///
/// Events render as two `#`-prefixed lines; a call event with a non-empty
/// stack dump appends one `#   frame` line per decoded frame. An opaque
/// pass-through value renders via the default inspector.
#[must_use]
pub fn format_event(event: &TraceEvent, options: &FormatOptions) -> String {
    match event {
        TraceEvent::Call(call) => represent_call(call, options),
        TraceEvent::Return(retn) => represent_return(retn, options),
        TraceEvent::Send(send) => represent_send(send, options),
        TraceEvent::Receive(recv) => represent_receive(recv, options),
        TraceEvent::Opaque(term) => term.to_string(),
    }
}

/// Normalize, format, and write a raw trace tuple to stdout, preceded by one
/// blank line.
pub fn print_event(raw: Term, options: &FormatOptions) {
    println!("\n{}", format_event(&normalize(raw), options));
}

fn represent_call(event: &CallEvent, options: &FormatOptions) -> String {
    let mut lines = vec![
        header(&event.timestamp, &event.caller_pid, &event.caller, options),
        format!("# {}", format_sig(&event.mfa)),
    ];
    if let Some(dump) = &event.stack_dump {
        for frame in decode_stack(dump) {
            lines.push(format!("#   {frame}"));
        }
    }
    lines.join("\n")
}

fn represent_return(event: &ReturnEvent, options: &FormatOptions) -> String {
    format!(
        "{}\n# {} -> {}",
        header(&event.timestamp, &event.caller_pid, &event.caller, options),
        format_sig(&event.mfa),
        event.return_value
    )
}

fn represent_send(event: &SendEvent, options: &FormatOptions) -> String {
    format!(
        "{}\n# {} <<< {}",
        header(&event.timestamp, &event.caller_pid, &event.caller, options),
        endpoint(&event.target_pid, &event.target),
        event.message
    )
}

fn represent_receive(event: &ReceiveEvent, options: &FormatOptions) -> String {
    format!(
        "{}\n# <<< {}",
        header(&event.timestamp, &event.target_pid, &event.target, options),
        event.message
    )
}

fn header(
    timestamp: &Timestamp,
    pid: &Option<Term>,
    sig: &Sig,
    options: &FormatOptions,
) -> String {
    format!(
        "# {} {}",
        format_timestamp(timestamp, options.show_millis),
        endpoint(pid, sig)
    )
}

/// A process endpoint: pid plus signature when the pid is known, the bare
/// signature otherwise.
fn endpoint(pid: &Option<Term>, sig: &Sig) -> String {
    match pid {
        Some(pid) => format!("{} {}", pid, format_sig(sig)),
        None => format_sig(sig),
    }
}
