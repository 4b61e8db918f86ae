//! # Utilities
//!
//! Text helpers shared across the detector crate.
//!
//! - [`fence`]: strips markdown code fences from backend replies.
//! - [`flag`]: the on/off rule shared by every boolean setting.
//! - [`lines`]: splits source text into numbered, non-blank lines.

pub mod fence;
pub mod flag;
pub mod lines;
