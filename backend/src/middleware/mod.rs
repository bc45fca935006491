//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit in front of every handler,
//! namely trace identifiers with access logging and the JSON body guard.

pub mod json_content;
pub mod trace;

pub use json_content::RequireJson;
pub use trace::{TRACE_ID_HEADER, Trace};
