//! Command handlers

pub mod extract;
pub mod query;
