//! Algolens Core - Shared primitives for the algolens engines
//!
//! This crate provides the types that more than one engine crate needs:
//! - [`Position`] for board coordinates and conflict predicates
//! - [`Matrix2`] and [`Matrix3`] dense tables for dynamic programming

pub mod matrix;
pub mod position;

pub use matrix::{Matrix2, Matrix3};
pub use position::Position;
