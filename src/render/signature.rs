//! Call-site signature rendering.

use crate::domain::{Args, Mfa, Sig, HOST_NAMESPACE_PREFIX};

/// Render a module name for display: host-namespace modules lose their
/// prefix, every other module is colon-prefixed as foreign-runtime.
#[must_use]
pub fn format_module(module: &str) -> String {
    match module.strip_prefix(HOST_NAMESPACE_PREFIX) {
        Some(stripped) => stripped.to_string(),
        None => format!(":{module}"),
    }
}

/// Render a structured call site as `Module.function(a, b)` when the
/// argument values are known, or `Module.function/N` when only the arity is.
#[must_use]
pub fn format_mfa(mfa: &Mfa) -> String {
    let suffix = match &mfa.args {
        Args::Arity(arity) => format!("/{arity}"),
        Args::List(args) => {
            let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
            format!("({})", rendered.join(", "))
        }
    };
    format!("{}.{}{}", format_module(&mfa.module), mfa.function, suffix)
}

/// Render a signature slot: structured call sites use the `Module.function`
/// form, opaque values are inspected and wrapped in parentheses.
#[must_use]
pub fn format_sig(sig: &Sig) -> String {
    match sig {
        Sig::Mfa(mfa) => format_mfa(mfa),
        Sig::Opaque(term) => format!("({term})"),
    }
}
