//! BetterConvert Core - expression evaluation and currency conversion.
//!
//! The computational core of a calculator-style currency converter:
//!
//! - [`calculator`] evaluates live-typed arithmetic over exact decimals
//! - [`fx`] converts between currencies through a pivot and refreshes rates
//! - [`input`] is the keypad state machine tying both together
//!
//! Rates come from the `betterconvert-market-data` crate; persistence and
//! presentation are left to the host through traits and events.

pub mod calculator;
pub mod constants;
pub mod errors;
pub mod events;
pub mod fx;
pub mod input;
pub mod settings;
pub mod utils;

pub use calculator::{evaluate, render_decimal};
pub use fx::{convert, Currency};
pub use input::{InputController, Key};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
