//! sqeval Query - in-memory evaluation of SELECT/FROM/WHERE queries.
//!
//! This crate provides the evaluation pipeline:
//!
//! - `ast`: Query, selector, condition and term definitions
//! - `resolver`: Column resolution and query validation
//! - `executor`: Cross product, filter and projection
//! - `evaluator`: The `evaluate` entry point
//! - `diagnostic`: Validation diagnostics

#![no_std]

extern crate alloc;

pub mod ast;
pub mod diagnostic;
pub mod evaluator;
pub mod executor;
pub mod resolver;

pub use diagnostic::Diagnostic;
pub use evaluator::{evaluate, Evaluator};
pub use executor::{DataSource, InMemoryDataSource};
pub use resolver::{ResolvedColumn, Resolver};
