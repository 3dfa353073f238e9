//! Code generation bridge for Flowscribe
//!
//! Turns a pseudocode listing into a code-generation prompt and hands it
//! to a text-generation provider.

pub mod generator;
pub mod prompt;
pub mod providers;

#[cfg(test)]
pub mod tests;

pub use generator::*;
pub use providers::create_generator;
