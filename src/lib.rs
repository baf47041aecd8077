//! celldb - an embedded, in-memory tabular store with a typed SELECT core.
//!
//! A query flows command string -> clause locator -> predicate parser ->
//! per-row comparison evaluation -> projected [`access::TableView`].

pub mod access;
pub mod database;
pub mod error;
pub mod executor;
pub mod expression;
pub mod sql;
