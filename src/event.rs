//! Event normalization.
//!
//! Raw trace tuples arrive as loosely shaped 4-tuples
//! `{tag, origin, payload, timestamp}`. This module pattern-matches them into
//! one of four typed event records. Anything that does not match comes back
//! unchanged as [`TraceEvent::Opaque`], so callers can feed arbitrary values
//! through the pipeline without failure.

use log::trace;

use crate::domain::{Args, Mfa, Sig, Term, Timestamp};

/// A function call, with an optional raw stack dump captured at the call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallEvent {
    pub mfa: Sig,
    pub stack_dump: Option<String>,
    pub caller_pid: Option<Term>,
    pub caller: Sig,
    pub timestamp: Timestamp,
}

/// A function return carrying the returned value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnEvent {
    pub mfa: Sig,
    pub return_value: Term,
    pub caller_pid: Option<Term>,
    pub caller: Sig,
    pub timestamp: Timestamp,
}

/// A message sent from one process to another.
#[derive(Debug, Clone, PartialEq)]
pub struct SendEvent {
    pub message: Term,
    pub target_pid: Option<Term>,
    pub target: Sig,
    pub caller_pid: Option<Term>,
    pub caller: Sig,
    pub timestamp: Timestamp,
}

/// A message received by a process.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiveEvent {
    pub message: Term,
    pub target_pid: Option<Term>,
    pub target: Sig,
    pub timestamp: Timestamp,
}

/// A normalized trace event, or the unmodified input when the shape is not
/// one of the four recognized tags.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    Call(CallEvent),
    Return(ReturnEvent),
    Send(SendEvent),
    Receive(ReceiveEvent),
    Opaque(Term),
}

/// Normalize a raw trace tuple into a typed event record.
///
/// Recognized shapes, all 4-tuples tagged with an atom:
/// - `{:call, from, {mfa, stack_dump}, timestamp}`
/// - `{:retn, from, {mfa, return_value}, timestamp}`
/// - `{:send, from, {message, to}, timestamp}`
/// - `{:recv, to, message, timestamp}`
///
/// `from`/`to` are either a `{pid, signature}` pair or a bare signature
/// value. Any other input shape passes through unchanged.
#[must_use]
pub fn normalize(raw: Term) -> TraceEvent {
    match typed_event(&raw) {
        Some(event) => event,
        None => {
            trace!("unrecognized event shape, passing through: {raw}");
            TraceEvent::Opaque(raw)
        }
    }
}

fn typed_event(raw: &Term) -> Option<TraceEvent> {
    let Term::Tuple(items) = raw else {
        return None;
    };
    let [Term::Atom(tag), origin, payload, ts] = items.as_slice() else {
        return None;
    };
    let timestamp = as_timestamp(ts)?;

    match (tag.as_str(), payload) {
        ("call", Term::Tuple(pair)) if pair.len() == 2 => {
            let (caller_pid, caller) = split_origin(origin);
            Some(TraceEvent::Call(CallEvent {
                mfa: as_sig(&pair[0]),
                stack_dump: as_dump(&pair[1]),
                caller_pid,
                caller,
                timestamp,
            }))
        }
        ("retn", Term::Tuple(pair)) if pair.len() == 2 => {
            let (caller_pid, caller) = split_origin(origin);
            Some(TraceEvent::Return(ReturnEvent {
                mfa: as_sig(&pair[0]),
                return_value: pair[1].clone(),
                caller_pid,
                caller,
                timestamp,
            }))
        }
        ("send", Term::Tuple(pair)) if pair.len() == 2 => {
            let (caller_pid, caller) = split_origin(origin);
            let (target_pid, target) = split_origin(&pair[1]);
            Some(TraceEvent::Send(SendEvent {
                message: pair[0].clone(),
                target_pid,
                target,
                caller_pid,
                caller,
                timestamp,
            }))
        }
        ("recv", message) => {
            let (target_pid, target) = split_origin(origin);
            Some(TraceEvent::Receive(ReceiveEvent {
                message: message.clone(),
                target_pid,
                target,
                timestamp,
            }))
        }
        _ => None,
    }
}

/// Split an origin/target slot: a 2-tuple keeps both pid and signature, any
/// bare value keeps no pid and lands in the signature slot.
fn split_origin(term: &Term) -> (Option<Term>, Sig) {
    match term {
        Term::Tuple(pair) if pair.len() == 2 => (Some(pair[0].clone()), as_sig(&pair[1])),
        other => (None, as_sig(other)),
    }
}

/// Signature-tuple normalization: a `{module, function, args_or_arity}`
/// triple of atoms becomes a structured [`Mfa`]; anything else stays opaque.
fn as_sig(term: &Term) -> Sig {
    if let Term::Tuple(items) = term {
        if let [Term::Atom(module), Term::Atom(function), args] = items.as_slice() {
            let args = match args {
                Term::Int(arity) => u32::try_from(*arity).ok().map(Args::Arity),
                Term::List(values) => Some(Args::List(values.clone())),
                _ => None,
            };
            if let Some(args) = args {
                return Sig::Mfa(Mfa {
                    module: module.clone(),
                    function: function.clone(),
                    args,
                });
            }
        }
    }
    Sig::Opaque(term.clone())
}

/// A stack dump is carried as a string; any other value in the dump slot
/// means no dump was captured.
fn as_dump(term: &Term) -> Option<String> {
    match term {
        Term::Str(dump) => Some(dump.clone()),
        _ => None,
    }
}

/// Timestamps arrive as `{h, m, s, us}` or, without microsecond capture,
/// `{h, m, s}`.
fn as_timestamp(term: &Term) -> Option<Timestamp> {
    let Term::Tuple(items) = term else {
        return None;
    };
    let fields: Vec<u32> = items
        .iter()
        .map(|item| match item {
            Term::Int(value) => u32::try_from(*value).ok(),
            _ => None,
        })
        .collect::<Option<_>>()?;
    match fields.as_slice() {
        [hours, minutes, seconds] => Some(Timestamp {
            hours: *hours,
            minutes: *minutes,
            seconds: *seconds,
            micros: 0,
        }),
        [hours, minutes, seconds, micros] => Some(Timestamp {
            hours: *hours,
            minutes: *minutes,
            seconds: *seconds,
            micros: *micros,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts_term() -> Term {
        Term::tuple(vec![Term::int(1), Term::int(2), Term::int(3), Term::int(4)])
    }

    fn mfa_term() -> Term {
        Term::tuple(vec![
            Term::atom("Elixir.Foo"),
            Term::atom("bar"),
            Term::int(2),
        ])
    }

    #[test]
    fn test_normalize_call_with_pid_origin() {
        let raw = Term::tuple(vec![
            Term::atom("call"),
            Term::tuple(vec![Term::pid(0, 42, 0), mfa_term()]),
            Term::tuple(vec![mfa_term(), Term::str("dump")]),
            ts_term(),
        ]);

        let TraceEvent::Call(call) = normalize(raw) else {
            panic!("expected a call event");
        };
        assert_eq!(call.caller_pid, Some(Term::pid(0, 42, 0)));
        assert_eq!(call.stack_dump.as_deref(), Some("dump"));
        assert_eq!(call.timestamp.micros, 4);
        assert!(matches!(call.mfa, Sig::Mfa(_)));
    }

    #[test]
    fn test_normalize_bare_origin_has_no_pid() {
        let raw = Term::tuple(vec![
            Term::atom("recv"),
            Term::atom("server"),
            Term::atom("ping"),
            ts_term(),
        ]);

        let TraceEvent::Receive(recv) = normalize(raw) else {
            panic!("expected a receive event");
        };
        assert_eq!(recv.target_pid, None);
        assert_eq!(recv.target, Sig::Opaque(Term::atom("server")));
    }

    #[test]
    fn test_normalize_missing_dump_slot() {
        let raw = Term::tuple(vec![
            Term::atom("call"),
            Term::pid(0, 1, 0),
            Term::tuple(vec![mfa_term(), Term::list(vec![])]),
            ts_term(),
        ]);

        let TraceEvent::Call(call) = normalize(raw) else {
            panic!("expected a call event");
        };
        assert_eq!(call.stack_dump, None);
    }

    #[test]
    fn test_three_field_timestamp_defaults_micros() {
        let raw = Term::tuple(vec![
            Term::atom("recv"),
            Term::pid(0, 1, 0),
            Term::atom("msg"),
            Term::tuple(vec![Term::int(9), Term::int(8), Term::int(7)]),
        ]);

        let TraceEvent::Receive(recv) = normalize(raw) else {
            panic!("expected a receive event");
        };
        assert_eq!(recv.timestamp.micros, 0);
    }

    #[test]
    fn test_unrecognized_shape_passes_through() {
        let raw = Term::tuple(vec![Term::atom("weird"), Term::int(1)]);
        assert_eq!(normalize(raw.clone()), TraceEvent::Opaque(raw));
    }

    #[test]
    fn test_bad_timestamp_passes_whole_event_through() {
        let raw = Term::tuple(vec![
            Term::atom("recv"),
            Term::pid(0, 1, 0),
            Term::atom("msg"),
            Term::atom("not_a_timestamp"),
        ]);
        assert_eq!(normalize(raw.clone()), TraceEvent::Opaque(raw));
    }

    #[test]
    fn test_signature_tuple_with_non_atom_module_stays_opaque() {
        let bad = Term::tuple(vec![Term::int(1), Term::atom("f"), Term::int(0)]);
        let raw = Term::tuple(vec![
            Term::atom("retn"),
            Term::pid(0, 1, 0),
            Term::tuple(vec![bad.clone(), Term::atom("ok")]),
            ts_term(),
        ]);

        let TraceEvent::Return(retn) = normalize(raw) else {
            panic!("expected a return event");
        };
        assert_eq!(retn.mfa, Sig::Opaque(bad));
    }
}
