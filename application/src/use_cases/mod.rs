//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_query;
pub mod generate_questions;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod test_support;
