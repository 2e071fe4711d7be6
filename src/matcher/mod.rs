//! Predicate matching subsystem
//!
//! A `Predicate` is a stateless boolean test over a (record, criteria)
//! pair. Atomic predicates test one attribute; `And`/`Or`/`Not` compose
//! them into arbitrary boolean trees built once and reused across the
//! whole record set.

mod predicate;

pub use predicate::Predicate;
