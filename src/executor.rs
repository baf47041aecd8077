//! Query execution layer.

pub mod select;

pub use select::select;
