//! Field values for structured logging.
//!
//! A [`field::Field`] wraps one value and renders it three ways: a display
//! string for log lines, a text encoding, and a JSON encoding. Values can be
//! wrapped by kind-specific constructors, by static dispatch over any
//! [`field::Reflect`] value ([`field::Field::any`]), by generic structural
//! encoding ([`field::Field::reflect`]), or as pre-serialized JSON
//! ([`field::Field::raw`]).

/// Field adapters, rendering and record assembly.
pub mod field;
