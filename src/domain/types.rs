//! Core value types.
//!
//! [`Term`] is a closed model of the value shapes the tracing facility puts
//! into trace tuples. Its `Display` impl is the default inspector used for
//! every opaque value in a formatted block (pids, messages, return values).

use std::fmt;

/// Host-namespace prefix carried by Elixir module atoms. Modules with this
/// prefix render stripped of it; any other module renders colon-prefixed as
/// a foreign-runtime module.
pub const HOST_NAMESPACE_PREFIX: &str = "Elixir.";

/// A process identifier, rendered `#PID<a.b.c>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pid(pub u32, pub u32, pub u32);

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#PID<{}.{}.{}>", self.0, self.1, self.2)
    }
}

/// A dynamically typed trace value.
///
/// Raw events arrive as nested tuples of these; anything the normalizer does
/// not recognize stays a `Term` and is rendered via `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Atom(String),
    Int(i64),
    Float(f64),
    Str(String),
    Pid(Pid),
    List(Vec<Term>),
    Tuple(Vec<Term>),
}

impl Term {
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    #[must_use]
    pub fn int(value: i64) -> Self {
        Term::Int(value)
    }

    pub fn str(value: impl Into<String>) -> Self {
        Term::Str(value.into())
    }

    #[must_use]
    pub fn pid(a: u32, b: u32, c: u32) -> Self {
        Term::Pid(Pid(a, b, c))
    }

    #[must_use]
    pub fn list(items: Vec<Term>) -> Self {
        Term::List(items)
    }

    #[must_use]
    pub fn tuple(items: Vec<Term>) -> Self {
        Term::Tuple(items)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) => write_atom(f, name),
            Term::Int(value) => write!(f, "{value}"),
            Term::Float(value) => write!(f, "{value:?}"),
            Term::Str(value) => write!(f, "{value:?}"),
            Term::Pid(pid) => write!(f, "{pid}"),
            Term::List(items) => write_seq(f, items, "[", "]"),
            Term::Tuple(items) => write_seq(f, items, "{", "}"),
        }
    }
}

fn write_atom(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if let Some(stripped) = name.strip_prefix(HOST_NAMESPACE_PREFIX) {
        return write!(f, "{stripped}");
    }
    let plain = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '@' | '.'));
    if plain {
        write!(f, ":{name}")
    } else {
        write!(f, ":{name:?}")
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Term], open: &str, close: &str) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "{close}")
}

/// Arguments of a call site: either the actual argument values or, when the
/// tracer only reports the arity, a bare count.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    Arity(u32),
    List(Vec<Term>),
}

/// A module/function/args-or-arity triple identifying a call site.
#[derive(Debug, Clone, PartialEq)]
pub struct Mfa {
    pub module: String,
    pub function: String,
    pub args: Args,
}

/// A signature slot of an event record.
///
/// The tracer does not always report a structured call site; an atom or a
/// list in a signature position stays opaque and renders wrapped in
/// parentheses instead of the `Module.function` form.
#[derive(Debug, Clone, PartialEq)]
pub enum Sig {
    Mfa(Mfa),
    Opaque(Term),
}

/// Wall-clock time of day, no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub micros: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pid_display() {
        assert_eq!(Pid(0, 105, 0).to_string(), "#PID<0.105.0>");
    }

    #[test]
    fn test_inspect_plain_atom() {
        assert_eq!(Term::atom("ok").to_string(), ":ok");
        assert_eq!(Term::atom("erlang").to_string(), ":erlang");
    }

    #[test]
    fn test_inspect_module_atom_strips_host_prefix() {
        assert_eq!(Term::atom("Elixir.MyApp.Worker").to_string(), "MyApp.Worker");
    }

    #[test]
    fn test_inspect_quoted_atom() {
        assert_eq!(Term::atom("fun name").to_string(), ":\"fun name\"");
    }

    #[test]
    fn test_inspect_string_and_numbers() {
        assert_eq!(Term::str("hi").to_string(), "\"hi\"");
        assert_eq!(Term::int(-3).to_string(), "-3");
        assert_eq!(Term::Float(1.0).to_string(), "1.0");
    }

    #[test]
    fn test_inspect_nested_sequences() {
        let term = Term::tuple(vec![
            Term::atom("reply"),
            Term::list(vec![Term::int(1), Term::int(2)]),
        ]);
        assert_eq!(term.to_string(), "{:reply, [1, 2]}");
    }
}
