//! Data sources feeding the domain layer.

pub mod catalog;
