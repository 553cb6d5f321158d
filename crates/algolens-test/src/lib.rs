//! Shared test fixtures for algolens crates.
//!
//! This crate provides known-answer data for testing. It depends on no
//! engine crate so every engine can take it as a dev-dependency.
//!
//! - [`queens`] - known N-Queens solution counts
//! - [`sequences`] - string pairs with known LCS answers
//! - [`words`] - word lists for trie tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! algolens-test = { workspace = true }
//! ```

pub mod queens;
pub mod sequences;
pub mod words;
