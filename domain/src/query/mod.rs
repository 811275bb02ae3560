//! Boolean search queries: entities, validation, decoding strategies, the
//! decoder with its guaranteed fallback, and user-typed query parsing.

pub mod decoder;
pub mod entities;
pub mod manual;
pub mod strategy;
pub mod validation;
