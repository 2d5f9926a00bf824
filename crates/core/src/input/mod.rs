//! Input module - the keypad state machine.
//!
//! [`InputController`] owns the edit buffer and the selected currencies and
//! recomputes the calculated value and converted amount after every change.

mod input_controller;
mod key;


pub use input_controller::InputController;
pub use key::Key;
