//!
//! Traits Module
//!
//! Core seams of the detector pipeline.
//!
//! - [`backend`]: a text-producing backend (code generator or judge).
//! - [`comparator`]: a strategy for matching lines between two source texts.
//! - [`variant_source`]: anything able to produce a full set of code variants.

pub mod backend;
pub mod comparator;
pub mod variant_source;
