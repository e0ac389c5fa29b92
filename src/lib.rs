//! # tracefmt - BEAM trace event formatter
//!
//! tracefmt turns the raw trace tuples emitted by a BEAM process-tracing
//! facility (function calls, returns, message sends and receives) into
//! human-readable, `#`-prefixed text blocks suitable for a console.
//!
//! ## Architecture Overview
//!
//! ```text
//! raw trace tuple (Term)
//!         │
//!         ▼
//! ┌──────────────┐    ┌──────────────┐    ┌────────────────────────┐
//! │  Normalizer  │──▶│ Representers │──▶│ output block (String)  │
//! │   (event)    │    │   (render)   │    └────────────────────────┘
//! └──────────────┘    └──────┬───────┘
//!                            │ uses
//!              ┌─────────────┼──────────────┐
//!              ▼             ▼              ▼
//!       ┌───────────┐ ┌───────────┐ ┌─────────────┐
//!       │ signature │ │ timestamp │ │ stack       │
//!       │ renderer  │ │ renderer  │ │ decoder     │
//!       └───────────┘ └───────────┘ └─────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`domain`]: Core value model - the [`Term`](domain::Term) type standing
//!   in for dynamically typed trace payloads, plus signatures and timestamps
//! - [`event`]: Normalizes raw tuples into typed [`TraceEvent`](event::TraceEvent)
//!   records; unrecognized shapes pass through unchanged
//! - [`render`]: Per-event representers producing the final text block, and
//!   the console-printing convenience entry point
//! - [`stack`]: Decodes simplified function signatures out of raw process
//!   stack dumps
//! - [`options`]: Formatting options with forward-compatible deserialization
//!
//! Every function in the pipeline is a pure, stateless transformation; the
//! only side effect in the crate is [`render::print_event`] writing to
//! stdout. Everything else is testable by plain string comparison.
//!
//! ## Typical Usage
//!
//! ```
//! use tracefmt::domain::Term;
//! use tracefmt::event::normalize;
//! use tracefmt::options::FormatOptions;
//! use tracefmt::render::format_event;
//!
//! let raw = Term::tuple(vec![
//!     Term::atom("retn"),
//!     Term::tuple(vec![
//!         Term::pid(0, 105, 0),
//!         Term::tuple(vec![Term::atom("Elixir.MyApp"), Term::atom("loop"), Term::int(1)]),
//!     ]),
//!     Term::tuple(vec![
//!         Term::tuple(vec![Term::atom("Elixir.MyApp"), Term::atom("step"), Term::int(2)]),
//!         Term::atom("ok"),
//!     ]),
//!     Term::tuple(vec![Term::int(14), Term::int(30), Term::int(5), Term::int(0)]),
//! ]);
//!
//! let block = format_event(&normalize(raw), &FormatOptions::default());
//! assert_eq!(block, "# 14:30:05 #PID<0.105.0> MyApp.loop/1\n# MyApp.step/2 -> :ok");
//! ```

pub mod domain;
pub mod event;
pub mod options;
pub mod render;
pub mod stack;

pub use domain::{Args, Mfa, Pid, Sig, Term, Timestamp};
pub use event::{normalize, TraceEvent};
pub use options::FormatOptions;
pub use render::{format_event, print_event};
pub use stack::decode_stack;
