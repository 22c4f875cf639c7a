//! Shared test utilities for the risq integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Builders produce raw JSON entries so harnesses exercise
//! the same loading path as production code.

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
