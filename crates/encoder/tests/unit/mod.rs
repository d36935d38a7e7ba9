//! Unit test modules.

/// Random operand supply tests.
pub mod r#gen;
