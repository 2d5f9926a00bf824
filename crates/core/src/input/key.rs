use std::fmt;
use std::str::FromStr;

use crate::calculator::Operator;
use crate::errors::ValidationError;

/// A keypad key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `'0'..='9'`; any other payload is a dead key.
    Digit(char),
    DecimalPoint,
    Operator(Operator),
    Clear,
    Equals,
    Percent,
    Delete,
}

impl Key {
    /// Builds a digit key, `None` unless `c` is an ASCII digit.
    pub fn digit(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Self::Digit(c))
    }

    /// The character appended to the buffer, for keys that append one.
    pub fn buffer_char(&self) -> Option<char> {
        match self {
            Self::Digit(c) if c.is_ascii_digit() => Some(*c),
            Self::Digit(_) => None,
            Self::DecimalPoint => Some('.'),
            Self::Operator(op) => Some(op.as_char()),
            Self::Clear | Self::Equals | Self::Percent | Self::Delete => None,
        }
    }
}

/// Parses keypad labels: digits, `.`, `+ - * /` (also `×` and `÷`),
/// `CLEAR`/`C`, `=`, `%` and `DELETE`/`⌫`.
impl FromStr for Key {
    type Err = ValidationError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let key = match label.trim() {
            "CLEAR" | "C" => Self::Clear,
            "=" => Self::Equals,
            "%" => Self::Percent,
            "." => Self::DecimalPoint,
            "DELETE" | "⌫" => Self::Delete,
            "×" => Self::Operator(Operator::Multiply),
            "÷" => Self::Operator(Operator::Divide),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Self::Digit(c),
                    (Some(c), None) => Operator::from_char(c).map(Self::Operator).ok_or_else(
                        || ValidationError::InvalidInput(format!("unknown key '{}'", label)),
                    )?,
                    _ => {
                        return Err(ValidationError::InvalidInput(format!(
                            "unknown key '{}'",
                            label
                        )))
                    }
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => write!(f, "CLEAR"),
            Self::Equals => write!(f, "="),
            Self::Percent => write!(f, "%"),
            Self::Delete => write!(f, "DELETE"),
            Self::Digit(c) => write!(f, "{}", c),
            Self::DecimalPoint => write!(f, "."),
            Self::Operator(op) => write!(f, "{}", op.as_char()),
        }
    }
}
