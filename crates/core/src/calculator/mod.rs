//! Calculator module - live expression evaluation over exact decimals.
//!
//! The evaluator accepts whatever the user has typed so far, including
//! half-finished input such as `"12+"` or `"3."`, and either produces a
//! [`Decimal`](rust_decimal::Decimal) or `None` (the invalid marker).
//!
//! - [`tokenizer`] - splits sanitized input into numbers and operators
//! - [`evaluator`] - live-typing tolerance, precedence-aware evaluation, rendering

pub mod evaluator;
pub mod tokenizer;

pub use evaluator::{evaluate, parse_literal, render_decimal};
pub use tokenizer::{Operator, Token};
