//! Diagnostic system for pattern errors and warnings.
//!
//! Every diagnostic carries:
//! - an error code for searchability (`strex explain E1003`)
//! - a message saying what went wrong
//! - a primary span pointing into the pattern
//! - optional notes and help lines
//!
//! The parser produces [`Diagnostic`]s; the CLI renders them through a
//! [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
