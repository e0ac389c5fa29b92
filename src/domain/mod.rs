//! Domain model for tracefmt
//!
//! This module contains the core value types shared by the normalizer and
//! the renderers:
//! - A small term model standing in for the dynamically typed values a BEAM
//!   tracing facility emits
//! - Typed signatures and timestamps extracted from those values

pub mod types;

// Re-export common types for convenience
pub use types::{Args, Mfa, Pid, Sig, Term, Timestamp, HOST_NAMESPACE_PREFIX};
